//! Tafgeet: spelling out integers as Arabic cardinal-number prose.
//!
//! Numbers are split into base-1000 tiers (trillions down to units). Each tier count
//! picks its suffix by Arabic agreement: singular for 1, dual for 2, plural for 3-10
//! and the accusative singular for 11 and above. Tiers are joined with the conjunction
//! "و" attached to the following tier.

use log::debug;

use crate::consts::{
    BILLIONS, CONJUNCTION, HUNDREDS, MAX_SAFE_INTEGER, MILLIONS, NEGATIVE_WORD, ONES, TEENS, TENS,
    THOUSANDS, TRILLIONS, TierForms, ZERO_WORD,
};
use crate::prelude::*;

/// Error type for tafgeet input validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TafgeetError {
    /// Text that is not an optionally signed run of decimal digits.
    #[error("tafgeet expects a numeric string, got {0:?}")]
    NonNumeric(String),

    /// NaN or an infinity.
    #[error("tafgeet expects a finite number")]
    NonFinite,

    /// A number with a fractional part.
    #[error("tafgeet expects an integer value")]
    NonInteger,

    /// Magnitude above 2^53 - 1.
    #[error("tafgeet expects a safe integer value")]
    UnsafeInteger,
}

/// A number to spell out, as an integer, a float or decimal text.
#[derive(Debug, Clone, PartialEq, From)]
pub enum TafgeetInput {
    Integer(i64),
    Float(f64),
    Text(String),
}

macro_rules! impl_from_small_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for TafgeetInput {
                fn from(n: $t) -> Self {
                    Self::Integer(i64::from(n))
                }
            }
        )*
    };
}

impl_from_small_int!(i8, i16, i32, u8, u16, u32);

macro_rules! impl_from_wide_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for TafgeetInput {
                /// Values outside `i64` saturate, so they fail as unsafe integers.
                fn from(n: $t) -> Self {
                    let saturated = if n > 0 { i64::MAX } else { i64::MIN };
                    Self::Integer(i64::try_from(n).unwrap_or(saturated))
                }
            }
        )*
    };
}

impl_from_wide_int!(isize, i128, u64, usize, u128);

impl From<f32> for TafgeetInput {
    fn from(n: f32) -> Self {
        Self::Float(f64::from(n))
    }
}

impl From<&str> for TafgeetInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl TafgeetInput {
    /// Validates the input and returns it as an integer within `±MAX_SAFE_INTEGER`.
    ///
    /// # Errors
    /// Returns the `TafgeetError` variant naming the first rule the input breaks.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn into_safe_integer(self) -> Result<i64, TafgeetError> {
        let value = match self {
            Self::Text(s) => parse_numeric_text(&s)?,
            Self::Float(f) => {
                if !f.is_finite() {
                    return Err(TafgeetError::NonFinite);
                }
                if f.fract() != 0.0 {
                    return Err(TafgeetError::NonInteger);
                }
                if f.abs() > MAX_SAFE_INTEGER as f64 {
                    return Err(TafgeetError::UnsafeInteger);
                }
                f as i64
            }
            Self::Integer(n) => n,
        };

        if value.unsigned_abs() > MAX_SAFE_INTEGER.unsigned_abs() {
            return Err(TafgeetError::UnsafeInteger);
        }
        Ok(value)
    }
}

fn parse_numeric_text(s: &str) -> Result<i64, TafgeetError> {
    let trimmed = s.trim();
    let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        debug!("tafgeet rejected {trimmed:?}");
        return Err(TafgeetError::NonNumeric(s.to_owned()));
    }

    // matches the digit pattern, so the only possible failure is overflow
    trimmed
        .parse::<i64>()
        .map_err(|_| TafgeetError::UnsafeInteger)
}

/// A base-1000 magnitude tier and its suffix forms (`None` for the unit tier).
struct NumericSegment {
    value: u64,
    forms: Option<&'static TierForms>,
}

const SEGMENTS: [NumericSegment; 5] = [
    NumericSegment {
        value: 1_000_000_000_000,
        forms: Some(&TRILLIONS),
    },
    NumericSegment {
        value: 1_000_000_000,
        forms: Some(&BILLIONS),
    },
    NumericSegment {
        value: 1_000_000,
        forms: Some(&MILLIONS),
    },
    NumericSegment {
        value: 1_000,
        forms: Some(&THOUSANDS),
    },
    NumericSegment {
        value: 1,
        forms: None,
    },
];

impl NumericSegment {
    fn render(&self, count: u64) -> String {
        let Some(forms) = self.forms else {
            return spell_below_thousand(count);
        };

        match count {
            1 => forms[1].to_owned(),
            2 => forms[2].to_owned(),
            3..=10 => format!("{} {}", spell_count(count), forms[3]),
            _ => format!("{} {}", spell_count(count), forms[4]),
        }
    }
}

/// Tier counts are below 1000 except at the top tier, which can reach 9007.
fn spell_count(count: u64) -> String {
    if count < 1000 {
        spell_below_thousand(count)
    } else {
        spell_positive(count)
    }
}

fn spell_below_thousand(n: u64) -> String {
    debug_assert!(n < 1000);

    let hundreds = (n / 100) as usize;
    let remainder = (n % 100) as usize;

    let mut parts = Vec::with_capacity(3);
    if hundreds > 0 {
        parts.push(HUNDREDS[hundreds]);
    }
    match remainder {
        0 => {}
        1..=9 => parts.push(ONES[remainder]),
        10..=19 => parts.push(TEENS[remainder - 10]),
        _ => {
            let (tens, ones) = (remainder / 10, remainder % 10);
            if ones > 0 {
                parts.push(ONES[ones]);
            }
            parts.push(TENS[tens]);
        }
    }

    parts.join(CONJUNCTION)
}

fn spell_positive(n: u64) -> String {
    let mut remaining = n;
    let mut parts = Vec::with_capacity(SEGMENTS.len());

    for segment in &SEGMENTS {
        let count = remaining / segment.value;
        if count > 0 {
            parts.push(segment.render(count));
            remaining %= segment.value;
        }
    }

    parts.retain(|p| !p.is_empty());
    parts.join(CONJUNCTION)
}

fn spell(n: i64) -> String {
    match n {
        0 => ZERO_WORD.to_owned(),
        n if n < 0 => format!("{NEGATIVE_WORD} {}", spell(-n)),
        n => spell_positive(n.unsigned_abs()),
    }
}

/// Spells out an integer in Arabic words, e.g. `1234` → `"ألف ومائتان وأربعة وثلاثون"`.
///
/// Accepts integers, integral floats and decimal text with an optional sign.
///
/// # Errors
/// Returns `TafgeetError` if the input is not numeric text, not finite, not an integer,
/// or outside `±(2^53 - 1)`.
pub fn tafgeet(number: impl Into<TafgeetInput>) -> Result<String, TafgeetError> {
    let n = number.into().into_safe_integer()?;
    Ok(spell(n))
}
