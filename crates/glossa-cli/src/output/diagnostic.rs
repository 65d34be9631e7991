//! Miette diagnostics for catalog decode errors.

use std::path::Path;

use glossa::LoadError;
use miette::{miette, Diagnostic, NamedSource, Report, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic pointing into a catalog file.
///
/// Fields are read by the miette derive, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(glossa::decode))]
pub struct CatalogDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl CatalogDiagnostic {
    /// Create a diagnostic for a 1-based line and column in `content`.
    ///
    /// Line 0 marks an error with no position, such as invalid UTF-8, and
    /// points at the start of the file.
    pub fn at(path: &Path, content: &str, line: usize, column: usize, message: &str) -> Self {
        // Sum of (line_length + 1) for lines before the error line, plus column.
        let offset = content
            .lines()
            .take(line.saturating_sub(1))
            .map(|l| l.len() + 1)
            .sum::<usize>()
            + column.saturating_sub(1);

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = offset.min(content.len());

        CatalogDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message: message.to_string(),
            help: None,
        }
    }

    /// Attach a help line.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Turn a load error into a report, with a source span for decode errors.
pub fn diagnose(error: &LoadError, bytes: &[u8]) -> Report {
    match error {
        LoadError::Parse {
            path,
            line,
            column,
            message,
        } => {
            let content = String::from_utf8_lossy(bytes);
            let mut diagnostic = CatalogDiagnostic::at(path, &content, *line, *column, message);
            if *line == 0 {
                diagnostic = diagnostic.with_help("catalog files must be UTF-8 encoded");
            }
            diagnostic.into()
        }
        LoadError::UnsupportedFormat { .. } => {
            miette!(help = "use a .json or .toml file", "{error}")
        }
        LoadError::MissingLanguageTag { .. } => {
            miette!(help = "name the file after its language, as in en.json or active.fr.toml", "{error}")
        }
        LoadError::Io { .. } | LoadError::UnknownLocale { .. } | LoadError::Message { .. } => {
            miette!("{error}")
        }
    }
}
