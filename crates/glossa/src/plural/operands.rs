//! CLDR plural operands.
//!
//! See <https://unicode.org/reports/tr35/tr35-numbers.html#Operands>.

use std::str::FromStr;

use winnow::ascii::digit1;
use winnow::combinator::{opt, preceded};
use winnow::prelude::*;

use crate::plural::PluralError;
use crate::types::Value;

/// The operands every CLDR plural rule is written over.
///
/// | operand | meaning                                               |
/// |---------|-------------------------------------------------------|
/// | `n`     | absolute value                                        |
/// | `i`     | integer digits of `n`                                 |
/// | `v`     | number of visible fraction digits, with trailing zeros |
/// | `w`     | number of visible fraction digits, without trailing zeros |
/// | `f`     | visible fraction digits, with trailing zeros          |
/// | `t`     | visible fraction digits, without trailing zeros       |
///
/// The fraction operands depend on how the number is written: `1`, `1.0` and
/// `1.50` are different inputs to a plural rule.
///
/// `i`, `f` and `t` saturate: a digit run with more than 18 significant
/// digits becomes `10^18` plus its low 18 digits, which keeps every
/// comparison and modulus a CLDR rule makes.
///
/// ```
/// use glossa::Operands;
///
/// let ops: Operands = "1.50".parse().unwrap();
/// assert_eq!((ops.i, ops.v, ops.w, ops.f, ops.t), (1, 2, 1, 50, 5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operands {
    pub n: f64,
    pub i: u64,
    pub v: usize,
    pub w: usize,
    pub f: u64,
    pub t: u64,
}

impl Operands {
    /// Operands for an integer magnitude. Integers never have fraction digits.
    pub fn from_integer(i: u64) -> Self {
        Self {
            n: i as f64,
            i,
            v: 0,
            w: 0,
            f: 0,
            t: 0,
        }
    }

    /// Extract operands from a decimal literal such as `"-12.050"`.
    ///
    /// Any length is accepted; see [`Operands`] for how oversized digit runs
    /// are represented.
    pub fn from_decimal_str(input: &str) -> Result<Self, PluralError> {
        let mut remaining = input;
        let parsed = decimal_literal(&mut remaining);
        let (integer, fraction) = match parsed {
            Ok(parts) if remaining.is_empty() => parts,
            _ => {
                return Err(PluralError::NotANumber {
                    input: input.to_string(),
                });
            }
        };

        let fraction = fraction.unwrap_or("");
        let trimmed = fraction.trim_end_matches('0');
        let i = digits_value(integer);
        let f = digits_value(fraction);
        let t = digits_value(trimmed);
        let n = input
            .trim_start_matches('-')
            .parse::<f64>()
            .map_err(|_| PluralError::NotANumber {
                input: input.to_string(),
            })?;

        Ok(Self {
            n,
            i,
            v: fraction.len(),
            w: trimmed.len(),
            f,
            t,
        })
    }

    /// Extract operands from a floating point value.
    ///
    /// The value goes through its shortest round-tripping decimal form, so
    /// `0.1` yields `v = 1, f = 1` rather than the digits of its binary
    /// expansion. Whole floats such as `2.0` format as `"2"` and classify
    /// like the integer.
    pub fn from_float(value: f64) -> Result<Self, PluralError> {
        if !value.is_finite() {
            return Err(PluralError::NotANumber {
                input: value.to_string(),
            });
        }
        Self::from_decimal_str(&value.to_string())
    }

    /// CLDR `n = a,b,...`: true only for integer-valued `n`.
    pub fn n_equals_any(&self, values: &[u64]) -> bool {
        self.t == 0 && values.contains(&self.i)
    }

    /// CLDR `n = from..to`: true only for integer-valued `n`.
    pub fn n_in_range(&self, from: u64, to: u64) -> bool {
        self.t == 0 && (from..=to).contains(&self.i)
    }

    /// CLDR `n % m = a,b,...`.
    pub fn n_mod_equals_any(&self, m: u64, values: &[u64]) -> bool {
        self.t == 0 && values.contains(&(self.i % m))
    }

    /// CLDR `n % m = from..to`.
    pub fn n_mod_in_range(&self, m: u64, from: u64, to: u64) -> bool {
        self.t == 0 && (from..=to).contains(&(self.i % m))
    }
}

/// `-`? digits (`.` digits)?, returning the integer and fraction digit runs.
fn decimal_literal<'i>(input: &mut &'i str) -> ModalResult<(&'i str, Option<&'i str>)> {
    let _ = opt('-').parse_next(input)?;
    let integer = digit1.parse_next(input)?;
    let fraction = opt(preceded('.', digit1)).parse_next(input)?;
    Ok((integer, fraction))
}

/// Operand values at or above this have more than 18 significant digits.
const SATURATED: u64 = 1_000_000_000_000_000_000;

/// Interpret ASCII digits as an integer. Empty is zero.
///
/// Runs with more than 18 significant digits saturate to `SATURATED` plus
/// their low 18 digits. The result compares above every rule constant and
/// keeps its residue for any `% 10^k` with `k <= 18`.
fn digits_value(digits: &str) -> u64 {
    let significant = digits.trim_start_matches('0');
    if significant.len() > 18 {
        SATURATED + fold_digits(&significant[significant.len() - 18..])
    } else {
        fold_digits(significant)
    }
}

fn fold_digits(digits: &str) -> u64 {
    digits
        .bytes()
        .fold(0, |acc, digit| acc * 10 + u64::from(digit - b'0'))
}

impl FromStr for Operands {
    type Err = PluralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal_str(s)
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Operands {
                fn from(value: $ty) -> Self {
                    Self::from_integer(u64::from(value.unsigned_abs()))
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Operands {
                fn from(value: $ty) -> Self {
                    Self::from_integer(u64::from(value))
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<isize> for Operands {
    fn from(value: isize) -> Self {
        Self::from_integer(value.unsigned_abs() as u64)
    }
}

impl From<usize> for Operands {
    fn from(value: usize) -> Self {
        Self::from_integer(value as u64)
    }
}

impl TryFrom<f64> for Operands {
    type Error = PluralError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_float(value)
    }
}

impl TryFrom<f32> for Operands {
    type Error = PluralError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        // Format the f32 itself so 0.1f32 stays "0.1" instead of widening.
        if !value.is_finite() {
            return Err(PluralError::NotANumber {
                input: value.to_string(),
            });
        }
        Self::from_decimal_str(&value.to_string())
    }
}

impl TryFrom<&str> for Operands {
    type Error = PluralError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_decimal_str(value)
    }
}

impl TryFrom<&Value> for Operands {
    type Error = PluralError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => Ok(Self::from(*n)),
            Value::Unsigned(n) => Ok(Self::from(*n)),
            Value::Float(x) => Self::from_float(*x),
            Value::String(s) => Self::from_decimal_str(s),
            Value::Bool(_) | Value::Map(_) => Err(PluralError::NotANumber {
                input: value.to_string(),
            }),
        }
    }
}
