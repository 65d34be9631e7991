//! Implementation of the `glossa check` command.

use std::collections::HashMap;
use std::fs::read;
use std::path::{Path, PathBuf};

use clap::Args;
use glossa::{catalog_file_info, Bundle, LoadError};
use miette::{IntoDiagnostic, Report, Result, WrapErr};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use crate::output::diagnose;

/// Arguments for the check command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Catalog files to check (.json, .toml)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Source-language catalog to compare message ids against
    #[arg(long)]
    pub source: Option<PathBuf>,
}

/// JSON output for one checked file.
#[derive(Debug, Serialize)]
struct FileReport {
    file: String,
    language: Option<String>,
    messages: usize,
    errors: Vec<String>,
    warnings: Vec<String>,
}

/// A decoded source catalog, kept as bytes so each file can be checked
/// against it in a fresh bundle.
struct SourceCatalog<'a> {
    path: &'a Path,
    language: String,
    bytes: Vec<u8>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<i32> {
    let source = match &args.source {
        Some(path) => match load_source(path) {
            Ok(source) => Some(source),
            Err(report) => {
                eprintln!("{report:?}");
                return Ok(exitcode::DATAERR);
            }
        },
        None => None,
    };

    let mut reports = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let (report, failure) = check_file(path, source.as_ref());
        if !args.json {
            print_report(&report, failure);
        }
        reports.push(report);
    }

    let failed = reports.iter().filter(|r| !r.errors.is_empty()).count();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports).into_diagnostic()?);
    } else {
        let warned: usize = reports.iter().map(|r| r.warnings.len()).sum();
        println!(
            "\nChecked {} file(s): {} failed, {} warning(s)",
            reports.len(),
            failed,
            warned
        );
    }

    if failed > 0 {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

fn load_source(path: &Path) -> Result<SourceCatalog<'_>> {
    let bytes = read(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read source catalog {}", path.display()))?;
    let (language, _) = catalog_file_info(path).map_err(|e| diagnose(&e, &bytes))?;
    Bundle::new()
        .parse_message_file_bytes(&bytes, path)
        .map_err(|e| diagnose(&e, &bytes))?;
    Ok(SourceCatalog {
        path,
        language,
        bytes,
    })
}

/// Decode and validate one file. The report is returned alongside a
/// renderable diagnostic when decoding failed.
fn check_file(path: &Path, source: Option<&SourceCatalog<'_>>) -> (FileReport, Option<Report>) {
    let mut report = FileReport {
        file: path.display().to_string(),
        language: None,
        messages: 0,
        errors: Vec::new(),
        warnings: Vec::new(),
    };

    let bytes = match read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            let error = LoadError::Io {
                path: path.to_path_buf(),
                source: e,
            };
            report.errors.push(error.to_string());
            return (report, Some(diagnose(&error, &[])));
        }
    };

    let mut bundle = Bundle::new();
    if let Some(source) = source {
        // The source decoded once already; it cannot fail here.
        let _ = bundle.parse_message_file_bytes(&source.bytes, source.path);
    }

    let language = match catalog_file_info(path) {
        Ok((language, _)) => language,
        Err(error) => {
            report.errors.push(error.to_string());
            return (report, Some(diagnose(&error, &bytes)));
        }
    };
    report.language = Some(language.clone());

    if let Err(error) = bundle.parse_message_file_bytes(&bytes, path) {
        report.errors.push(error.to_string());
        return (report, Some(diagnose(&error, &bytes)));
    }
    report.messages = bundle.messages(&language).map_or(0, HashMap::len);

    let source_language = source.map_or(language.as_str(), |s| s.language.as_str());
    report.warnings = bundle
        .validate(source_language, &language)
        .iter()
        .map(ToString::to_string)
        .collect();

    (report, None)
}

fn print_report(report: &FileReport, failure: Option<Report>) {
    if let Some(failure) = failure {
        eprintln!("{failure:?}");
        return;
    }
    println!(
        "{} {} ({}, {} message(s))",
        "ok".if_supports_color(Stream::Stdout, |text| text.green()),
        report.file,
        report.language.as_deref().unwrap_or("?"),
        report.messages
    );
    for warning in &report.warnings {
        println!(
            "  {}",
            warning.if_supports_color(Stream::Stdout, |text| text.yellow())
        );
    }
}
