//! Coverage command implementation.

use std::collections::BTreeSet;
use std::fs::{read, read_dir};
use std::path::{Path, PathBuf};

use clap::Args;
use glossa::{catalog_file_info, Bundle};
use miette::{miette, IntoDiagnostic, Result, WrapErr};
use serde::Serialize;

use crate::output::diagnose;
use crate::output::table::{format_coverage_table, LanguageCoverage};

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Source language catalog (e.g., active.en.json).
    #[arg(long)]
    pub source: PathBuf,

    /// Languages to check coverage for (comma-separated).
    #[arg(long, value_delimiter = ',', required = true)]
    pub lang: Vec<String>,

    /// Directory containing translation files. Defaults to source file directory.
    #[arg(long)]
    pub translations: Option<PathBuf>,

    /// Exit with non-zero code if any translation is incomplete.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson {
    language: String,
    translated: usize,
    total: usize,
    missing: Vec<String>,
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    let mut bundle = Bundle::new();
    load_file(&mut bundle, &args.source)?;
    let (source_lang, _) = catalog_file_info(&args.source).map_err(|e| miette!("{e}"))?;

    let source_ids: BTreeSet<String> = bundle
        .messages(&source_lang)
        .map(|messages| messages.keys().cloned().collect())
        .unwrap_or_default();
    let source_count = source_ids.len();

    // Determine base directory for translation files
    let base_dir = args
        .translations
        .clone()
        .or_else(|| args.source.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    let catalogs = catalog_files(&base_dir)?;

    let mut coverage_data: Vec<LanguageCoverage> = Vec::new();
    for lang in &args.lang {
        for (path, file_lang) in &catalogs {
            if file_lang.eq_ignore_ascii_case(lang) && *path != args.source {
                load_file(&mut bundle, path)?;
            }
        }

        let translated: BTreeSet<String> = bundle
            .messages(lang)
            .map(|messages| {
                messages
                    .iter()
                    .filter(|(_, message)| !message.templates.is_empty())
                    .map(|(id, _)| id.clone())
                    .collect()
            })
            .unwrap_or_default();
        let missing: Vec<String> = source_ids.difference(&translated).cloned().collect();

        coverage_data.push(LanguageCoverage {
            language: lang.clone(),
            translated: source_ids.intersection(&translated).count(),
            missing,
        });
    }

    let any_incomplete = coverage_data.iter().any(|c| !c.missing.is_empty());

    if args.json {
        let json_data: Vec<CoverageJson> = coverage_data
            .iter()
            .map(|c| CoverageJson {
                language: c.language.clone(),
                translated: c.translated,
                total: source_count,
                missing: c.missing.clone(),
            })
            .collect();

        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{json_output}");
    } else {
        let table = format_coverage_table(source_count, &coverage_data);
        println!("{table}");

        for lang_coverage in &coverage_data {
            if !lang_coverage.missing.is_empty() {
                println!("\nMissing in {}:", lang_coverage.language);
                for id in &lang_coverage.missing {
                    println!("  - {id}");
                }
            }
        }
    }

    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

/// Decode a catalog file into the bundle, rendering decode errors with a
/// source span.
fn load_file(bundle: &mut Bundle, path: &Path) -> Result<()> {
    let bytes = read(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    bundle
        .parse_message_file_bytes(&bytes, path)
        .map_err(|e| diagnose(&e, &bytes))?;
    Ok(())
}

/// Catalog files in `dir` with their language tags, sorted by path. Files
/// that do not look like catalogs are ignored.
fn catalog_files(dir: &Path) -> Result<Vec<(PathBuf, String)>> {
    let entries = read_dir(dir)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to list {}", dir.display()))?;
    let mut catalogs = Vec::new();
    for entry in entries {
        let path = entry.into_diagnostic()?.path();
        if !path.is_file() {
            continue;
        }
        if let Ok((lang, _)) = catalog_file_info(&path) {
            catalogs.push((path, lang));
        }
    }
    catalogs.sort();
    Ok(catalogs)
}
