//! Gregorian and Hijri date formatting.
//!
//! Calendar fields are always read in UTC.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::consts::{GREGORIAN_MONTHS_AR, GREGORIAN_MONTHS_EN};
use crate::digits::to_eastern_digits;
use crate::hijri::{DateError, DateLike, format_hijri, to_hijri};
use crate::locale::Locale;
use crate::prelude::*;

/// Layout of a Gregorian date. Hijri dates always use the human layout.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize,
)]
pub enum DatePattern {
    /// `15 May 2024`
    #[default]
    #[serde(rename = "human")]
    #[display(fmt = "human")]
    Human,
    /// `2024-05-15`
    #[serde(rename = "YYYY-MM-DD")]
    #[display(fmt = "YYYY-MM-DD")]
    YearMonthDay,
    /// `15/05/2024`
    #[serde(rename = "DD/MM/YYYY")]
    #[display(fmt = "DD/MM/YYYY")]
    DayMonthYear,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Calendar {
    #[default]
    #[display(fmt = "gregorian")]
    Gregorian,
    #[display(fmt = "hijri")]
    Hijri,
}

/// Options for [`format_date`].
///
/// Missing fields take their defaults when deserialized, so `{"calendar": "hijri"}` is a
/// complete configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DateFormatOptions {
    /// Language of month names
    pub locale: Locale,
    /// Eastern Arabic digits; `None` follows the locale
    pub use_arabic_digits: Option<bool>,
    pub pattern: DatePattern,
    pub calendar: Calendar,
}

impl DateFormatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    #[must_use]
    pub const fn use_arabic_digits(mut self, enabled: bool) -> Self {
        self.use_arabic_digits = Some(enabled);
        self
    }

    #[must_use]
    pub const fn pattern(mut self, pattern: DatePattern) -> Self {
        self.pattern = pattern;
        self
    }

    #[must_use]
    pub const fn calendar(mut self, calendar: Calendar) -> Self {
        self.calendar = calendar;
        self
    }

    /// Resolved digit style
    pub const fn eastern_digits(&self) -> bool {
        match self.use_arabic_digits {
            Some(enabled) => enabled,
            None => self.locale.prefers_eastern_digits(),
        }
    }
}

fn month_name(locale: Locale, month: i8) -> &'static str {
    let names = match locale {
        Locale::Ar => &GREGORIAN_MONTHS_AR,
        Locale::En => &GREGORIAN_MONTHS_EN,
    };
    // civil dates always carry a month in 1..=12
    names[usize::from(month.unsigned_abs()) - 1]
}

fn format_gregorian(date: Date, pattern: DatePattern, locale: Locale) -> String {
    let (year, month, day) = (date.year(), date.month(), date.day());
    match pattern {
        DatePattern::Human => format!("{day} {} {year}", month_name(locale, month)),
        DatePattern::YearMonthDay => format!("{year}-{month:02}-{day:02}"),
        DatePattern::DayMonthYear => format!("{day:02}/{month:02}/{year}"),
    }
}

/// Formats a date according to `options`.
///
/// # Errors
/// Returns `DateError::InvalidDate` if the input cannot be resolved to an instant.
pub fn format_date(
    date: impl Into<DateLike>,
    options: &DateFormatOptions,
) -> Result<String, DateError> {
    let date = date.into();

    let formatted = match options.calendar {
        Calendar::Hijri => format_hijri(&to_hijri(date)?)?,
        Calendar::Gregorian => format_gregorian(date.utc_date()?, options.pattern, options.locale),
    };

    if options.eastern_digits() {
        Ok(to_eastern_digits(formatted))
    } else {
        Ok(formatted)
    }
}
