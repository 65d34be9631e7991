//! Error types for operand extraction and plural classification.

use std::convert::Infallible;

use strsim::levenshtein;
use thiserror::Error;

/// An error that occurred while extracting operands or classifying a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PluralError {
    /// The input is not a decimal literal (`-`? digits (`.` digits)?).
    #[error("'{input}' is not a number")]
    NotANumber { input: String },

    /// No plural rule is registered for the locale.
    #[error("no plural rule for locale '{locale}'")]
    UnknownLocale { locale: String },

    /// A category keyword that is not one of zero/one/two/few/many/other.
    #[error("unknown plural category '{name}'{}", format_suggestions(suggestions))]
    UnknownCategory {
        name: String,
        suggestions: Vec<String>,
    },
}

impl From<Infallible> for PluralError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

pub(crate) fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}

/// Compute "did you mean" suggestions for a misspelled key.
///
/// Returns at most three candidates from `available`, closest first. Keys of
/// three characters or fewer tolerate one edit, longer keys tolerate two.
pub fn compute_suggestions(target: &str, available: &[String]) -> Vec<String> {
    let max_distance = if target.chars().count() <= 3 { 1 } else { 2 };
    let mut scored: Vec<(usize, &String)> = available
        .iter()
        .map(|candidate| (levenshtein(target, candidate), candidate))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    scored.sort();
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.clone())
        .collect()
}
