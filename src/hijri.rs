//! Gregorian to Hijri conversion using the tabular (arithmetic) Islamic calendar.
//!
//! The tabular calendar is a fixed approximation: it does not follow moon
//! sightings and can differ from an observational calendar by a day.

use std::str::FromStr;

use jiff::{
    Timestamp, Zoned,
    civil::{self, Date},
    tz::TimeZone,
};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::consts::{
    GREGORIAN_REFORM_YEAR, HIJRI_CYCLE_DAYS, HIJRI_EPOCH_JDN, HIJRI_MONTHS,
    JULIAN_LAST_DAY_OCTOBER_1582, REFORM_GAP_DAYS,
};
use crate::prelude::*;

/// A date in the tabular Hijri calendar.
///
/// Values produced by [`to_hijri`] always have `month` in `1..=12` and `day` in `1..=30`.
/// The fields are public, so [`format_hijri`] validates the month before using it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct HijriDate {
    pub year: i64,
    pub month: u8,
    pub day: u8,
}

/// Errors raised by date conversion and formatting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Input could not be resolved to an instant.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// A Hijri date whose month is outside 1-12.
    #[error("Malformed Hijri date: month {month} is not in 1-12")]
    MalformedHijriDate { month: u8 },
}

/// Anything that names an instant.
///
/// Text is read as an RFC 3339 timestamp first; text without an offset is a
/// civil date or date-time in UTC. Integers are milliseconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, From)]
pub enum DateLike {
    Timestamp(Timestamp),
    Civil(Date),
    Millis(i64),
    Text(String),
}

impl From<&str> for DateLike {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<Zoned> for DateLike {
    fn from(zoned: Zoned) -> Self {
        Self::Timestamp(zoned.timestamp())
    }
}

impl From<&Zoned> for DateLike {
    fn from(zoned: &Zoned) -> Self {
        Self::Timestamp(zoned.timestamp())
    }
}

impl DateLike {
    /// Resolves the input to an instant.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` if the text does not parse or the value is out of range.
    pub fn to_timestamp(&self) -> Result<Timestamp, DateError> {
        match self {
            Self::Timestamp(ts) => Ok(*ts),
            Self::Civil(date) => date
                .to_zoned(TimeZone::UTC)
                .map(|z| z.timestamp())
                .map_err(|e| DateError::InvalidDate(format!("{date}: {e}"))),
            Self::Millis(ms) => Timestamp::from_millisecond(*ms)
                .map_err(|e| DateError::InvalidDate(format!("{ms}: {e}"))),
            Self::Text(s) => parse_instant(s),
        }
    }

    /// The calendar date of this instant as seen in UTC.
    ///
    /// # Errors
    /// Same as [`Self::to_timestamp`].
    pub fn utc_date(&self) -> Result<Date, DateError> {
        Ok(self.to_timestamp()?.to_zoned(TimeZone::UTC).date())
    }
}

fn parse_instant(s: &str) -> Result<Timestamp, DateError> {
    let trimmed = s.trim();

    if let Ok(ts) = Timestamp::from_str(trimmed) {
        return Ok(ts);
    }

    // no offset given: the wall clock is UTC
    let civil = civil::DateTime::from_str(trimmed)
        .or_else(|_| Date::from_str(trimmed).map(|d| d.to_datetime(civil::Time::midnight())));

    civil
        .and_then(|dt| dt.to_zoned(TimeZone::UTC))
        .map(|z| z.timestamp())
        .map_err(|e| {
            debug!("rejected date input {trimmed:?}: {e}");
            DateError::InvalidDate(format!("{trimmed:?}: {e}"))
        })
}

impl HijriDate {
    /// Creates a Hijri date from raw fields (not validated)
    pub const fn new(year: i64, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Converts a Gregorian (proleptic, Julian before the 1582 reform) calendar date.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` if the fields do not name a day of that calendar.
    pub fn from_gregorian(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        let jdn = gregorian_to_jdn(year, month, day)?;
        Self::from_jdn(jdn).ok_or_else(|| DateError::InvalidDate(format!("JDN {jdn}")))
    }

    /// Converts a Julian Day Number with the tabular 30-year cycle.
    ///
    /// Returns `None` only for day numbers within about two million days of `i64::MIN`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn from_jdn(jdn: i64) -> Option<Self> {
        // days since the start of the cycle before the epoch
        let Some(offset) = jdn.checked_sub(HIJRI_EPOCH_JDN - HIJRI_CYCLE_DAYS) else {
            return None;
        };
        let n = offset.div_euclid(HIJRI_CYCLE_DAYS);
        let l1 = offset.rem_euclid(HIJRI_CYCLE_DAYS) + 355;
        let j = (10985 - l1).div_euclid(5316) * (50 * l1).div_euclid(17719)
            + l1.div_euclid(5670) * (43 * l1).div_euclid(15238);
        let l2 = l1
            - (30 - j).div_euclid(15) * (17719 * j).div_euclid(50)
            - j.div_euclid(16) * (15238 * j).div_euclid(43)
            + 29;

        // l1 always lands inside one cycle, so month is 1..=12 and day 1..=30
        let month = (24 * l2).div_euclid(709);
        let day = l2 - (709 * month).div_euclid(24);

        Some(Self {
            year: 30 * n + j - 30,
            month: month as u8,
            day: day as u8,
        })
    }

    /// Arabic name of this date's month, if the month is valid
    pub fn month_name(&self) -> Option<&'static str> {
        hijri_month_name(self.month)
    }
}

const fn is_leap_year(year: i64) -> bool {
    if year < GREGORIAN_REFORM_YEAR {
        year.rem_euclid(4) == 0
    } else {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }
}

const fn days_in_month(year: i64, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Julian Day Number of a calendar date.
///
/// Dates before the 1582 reform are reckoned in the Julian calendar; 4 October 1582 is
/// followed directly by 15 October 1582.
///
/// # Errors
/// Returns `DateError::InvalidDate` for a month outside 1-12, a day past the end of its
/// month, or one of the ten days dropped by the reform.
pub fn gregorian_to_jdn(year: i32, month: u8, day: u8) -> Result<i64, DateError> {
    let y = i64::from(year);
    let dropped_by_reform = y == GREGORIAN_REFORM_YEAR - 1
        && month == 10
        && i64::from(day) > JULIAN_LAST_DAY_OCTOBER_1582
        && i64::from(day) <= JULIAN_LAST_DAY_OCTOBER_1582 + REFORM_GAP_DAYS;

    let valid = (1..=12).contains(&month)
        && (1..=days_in_month(y, month)).contains(&day)
        && !dropped_by_reform;
    if !valid {
        debug!("rejected calendar date {year:04}-{month:02}-{day:02}");
        return Err(DateError::InvalidDate(format!(
            "{year:04}-{month:02}-{day:02} is not a calendar day"
        )));
    }
    Ok(fields_to_jdn(y, i64::from(month), i64::from(day)))
}

/// The day-number formula over unchecked fields.
fn fields_to_jdn(year: i64, month: i64, day: i64) -> i64 {
    let (mut y, mut m) = (year, month);

    // January and February count as months 13 and 14 of the previous year
    if m < 3 {
        y -= 1;
        m += 12;
    }

    let a = y.div_euclid(100);
    let b = match y {
        1582 if m > 10 || (m == 10 && day > JULIAN_LAST_DAY_OCTOBER_1582) => -REFORM_GAP_DAYS,
        _ if y < GREGORIAN_REFORM_YEAR => 0,
        _ => 2 - a + a.div_euclid(4),
    };

    // floor(365.25 * (y + 4716)) + floor(30.6001 * (m + 1)) without floats
    (1461 * (y + 4716)).div_euclid(4) + (306_001 * (m + 1)).div_euclid(10_000) + day + b - 1524
}

/// Converts an instant to the tabular Hijri calendar.
///
/// The calendar date is always read in UTC, so the result does not depend on the host timezone.
///
/// # Errors
/// Returns `DateError::InvalidDate` if the input cannot be resolved to an instant.
pub fn to_hijri(date: impl Into<DateLike>) -> Result<HijriDate, DateError> {
    let utc = date.into().utc_date()?;
    // jiff dates are proleptic Gregorian, so their fields skip the day-of-calendar check
    let jdn = fields_to_jdn(
        i64::from(utc.year()),
        i64::from(utc.month()),
        i64::from(utc.day()),
    );
    let hijri = HijriDate::from_jdn(jdn)
        .ok_or_else(|| DateError::InvalidDate(format!("{utc}: outside the Hijri range")))?;
    trace!("{utc} (UTC) -> {hijri} AH");
    Ok(hijri)
}

/// Arabic name of a Hijri month (1-12)
pub fn hijri_month_name(month: u8) -> Option<&'static str> {
    HIJRI_MONTHS.get(usize::from(month).checked_sub(1)?).copied()
}

/// Renders `"<day> <month name> <year>"`, e.g. `"1 رمضان 1445"`.
///
/// # Errors
/// Returns `DateError::MalformedHijriDate` if the month is outside 1-12.
pub fn format_hijri(hijri: &HijriDate) -> Result<String, DateError> {
    let name = hijri.month_name().ok_or(DateError::MalformedHijriDate {
        month: hijri.month,
    })?;
    Ok(format!("{} {} {}", hijri.day, name, hijri.year))
}
