//! CLDR plural classification.
//!
//! Numbers are first reduced to CLDR [`Operands`], then classified by the
//! [`PluralRule`] registered for a locale. Rules live in an immutable
//! [`PluralRules`] table that is built once and shared.

mod cldr;
mod error;
mod operands;
mod rules;

pub use error::{PluralError, compute_suggestions};
pub(crate) use error::format_suggestions;
pub use operands::Operands;
pub use rules::{PluralFn, PluralRule, PluralRules, normalize_locale};
