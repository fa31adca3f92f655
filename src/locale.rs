use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Output language for names and phrases.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    #[display(fmt = "ar")]
    Ar,
    #[display(fmt = "en")]
    En,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocaleError {
    #[error("Unknown locale: {0} (expected \"ar\" or \"en\")")]
    Unknown(String),
}

impl Locale {
    /// Whether numerals default to Eastern Arabic digits in this locale
    pub const fn prefers_eastern_digits(self) -> bool {
        matches!(self, Self::Ar)
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ar" => Ok(Self::Ar),
            "en" => Ok(Self::En),
            _ => Err(LocaleError::Unknown(s.to_owned())),
        }
    }
}
