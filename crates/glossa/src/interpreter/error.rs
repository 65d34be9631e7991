//! Error types for catalog construction, rendering, and translation.

use std::io::Error as IoError;
use std::path::PathBuf;

use thiserror::Error;

use crate::parser::ParseError;
use crate::plural::{PluralError, format_suggestions};
use crate::types::PluralCategory;

/// Errors that occur while building a [`Bundle`](crate::Bundle).
///
/// These are configuration errors: they abort loading instead of silently
/// dropping data.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a catalog file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: IoError,
    },

    /// Decode error with file location context.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// No plural rule is known for the language of a message set.
    #[error("no plural rule for language '{locale}'")]
    UnknownLocale { locale: String },

    /// A message in the catalog could not be built.
    #[error("invalid message '{id}' for language '{locale}': {source}")]
    Message {
        locale: String,
        id: String,
        #[source]
        source: MessageError,
    },

    /// The file extension does not name a supported catalog format.
    #[error("unsupported catalog format for '{path}'")]
    UnsupportedFormat { path: PathBuf },

    /// The file name does not carry a language tag, as in `en.json`.
    #[error("no language tag in file name '{path}'")]
    MissingLanguageTag { path: PathBuf },
}

impl LoadError {
    /// Attach a file path to a decode error.
    pub(crate) fn from_parse(path: PathBuf, error: ParseError) -> Self {
        match error {
            ParseError::Syntax {
                line,
                column,
                message,
            } => LoadError::Parse {
                path,
                line,
                column,
                message,
            },
            ParseError::UnexpectedEof { line, column } => LoadError::Parse {
                path,
                line,
                column,
                message: "unexpected end of file".to_string(),
            },
            ParseError::InvalidUtf8 => LoadError::Parse {
                path,
                line: 0,
                column: 0,
                message: "invalid UTF-8".to_string(),
            },
        }
    }
}

/// Errors that occur while building a [`Message`](crate::Message) from raw
/// category-to-source pairs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    /// A key that is neither a plural category nor `description`.
    #[error("unknown plural category '{key}'{}", format_suggestions(suggestions))]
    UnknownCategory {
        key: String,
        suggestions: Vec<String>,
    },

    /// The same category appears more than once.
    #[error("duplicate plural category '{key}'")]
    DuplicateCategory { key: String },

    /// A template source that does not parse.
    #[error("invalid template for '{key}': {source}")]
    Template {
        key: String,
        #[source]
        source: ParseError,
    },
}

/// An error from executing a template against data.
///
/// The `Display` text is what a failed render degrades to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The map has no entry for a referenced field.
    #[error("executing \"{path}\": map has no entry for key \"{field}\"")]
    MissingField { path: String, field: String },

    /// A field was accessed on a value that is not a map.
    #[error("executing \"{path}\": can't evaluate field {field} in {value}")]
    NotAMap {
        path: String,
        field: String,
        value: String,
    },

    /// The template references data but none was supplied.
    #[error("executing \"{path}\": no data")]
    NoData { path: String },
}

/// A failure that ends a translation call with an inline diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// The count could not be classified under a locale's plural rule.
    #[error("[ERR][{id}] {source}")]
    Classification {
        id: String,
        #[source]
        source: PluralError,
    },
}

/// Non-fatal findings from comparing a translation against its source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadWarning {
    /// The translation defines a message the source does not have.
    #[error("warning: unknown message '{id}' in '{locale}' translations (not defined in source)")]
    UnknownMessage { id: String, locale: String },

    /// A category the locale's plural rule never produces.
    #[error("warning: message '{id}' in '{locale}' defines '{category}', which '{locale}' never uses")]
    UnusedCategory {
        id: String,
        locale: String,
        category: PluralCategory,
    },

    /// The message has no `other` template.
    #[error("warning: message '{id}' in '{locale}' has no 'other' template")]
    MissingOther { id: String, locale: String },
}

impl LoadWarning {
    /// The id of the message the warning is about.
    pub fn id(&self) -> &str {
        match self {
            LoadWarning::UnknownMessage { id, .. }
            | LoadWarning::UnusedCategory { id, .. }
            | LoadWarning::MissingOther { id, .. } => id,
        }
    }
}
