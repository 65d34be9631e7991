use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::plural::{PluralError, compute_suggestions};

/// A CLDR plural category.
///
/// Which subset of categories a language distinguishes varies: English uses
/// `one` and `other`, Russian adds `few` and `many`, and Arabic uses all six.
/// `Other` is the universal fallback every language declares.
///
/// Categories are ordered from `Zero` to `Other`, so maps keyed by category
/// iterate in the conventional CLDR order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    /// All categories, in CLDR order.
    pub const ALL: [PluralCategory; 6] = [
        PluralCategory::Zero,
        PluralCategory::One,
        PluralCategory::Two,
        PluralCategory::Few,
        PluralCategory::Many,
        PluralCategory::Other,
    ];

    /// The lowercase CLDR keyword for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        }
    }
}

impl Display for PluralCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for PluralCategory {
    type Err = PluralError;

    /// Parse a CLDR category keyword.
    ///
    /// Keywords are matched exactly; `"One"` is not a category name.
    ///
    /// ```
    /// use glossa::PluralCategory;
    ///
    /// assert_eq!("few".parse::<PluralCategory>().unwrap(), PluralCategory::Few);
    /// assert!("asdf".parse::<PluralCategory>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PluralCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| {
                let names: Vec<String> = PluralCategory::ALL
                    .iter()
                    .map(|category| category.as_str().to_string())
                    .collect();
                PluralError::UnknownCategory {
                    name: s.to_string(),
                    suggestions: compute_suggestions(s, &names),
                }
            })
    }
}
