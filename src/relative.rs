//! Relative-time phrases such as "منذ ٥ دقيقة" or "in 2 hours".

use jiff::Timestamp;

use crate::consts::{HOURS_PER_DAY, MILLIS_PER_SECOND, MINUTES_PER_HOUR, SECONDS_PER_MINUTE};
use crate::digits::to_eastern_digits;
use crate::hijri::{DateError, DateLike};
use crate::locale::Locale;

const AR_PAST: &str = "منذ";
const AR_FUTURE: &str = "بعد";
const AR_JUST_NOW: &str = "منذ لحظات";
const EN_JUST_NOW: &str = "just now";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Second,
    Minute,
    Hour,
    Day,
}

impl Unit {
    const fn arabic(self) -> &'static str {
        match self {
            Self::Second => "ثانية",
            Self::Minute => "دقيقة",
            Self::Hour => "ساعة",
            Self::Day => "يوم",
        }
    }

    const fn english(self) -> &'static str {
        match self {
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
        }
    }
}

/// Picks the largest unit that keeps the value readable: seconds under a minute, then
/// minutes under an hour, hours under a day, days beyond.
const fn largest_unit(seconds: i64) -> (i64, Unit) {
    let minutes = seconds / SECONDS_PER_MINUTE;
    let hours = minutes / MINUTES_PER_HOUR;
    if seconds < SECONDS_PER_MINUTE {
        (seconds, Unit::Second)
    } else if minutes < MINUTES_PER_HOUR {
        (minutes, Unit::Minute)
    } else if hours < HOURS_PER_DAY {
        (hours, Unit::Hour)
    } else {
        (hours / HOURS_PER_DAY, Unit::Day)
    }
}

fn phrase(value: i64, unit: Unit, future: bool, locale: Locale) -> String {
    match locale {
        Locale::Ar => {
            let prefix = if future { AR_FUTURE } else { AR_PAST };
            format!("{prefix} {} {}", to_eastern_digits(value), unit.arabic())
        }
        Locale::En => {
            let plural = if value == 1 { "" } else { "s" };
            if future {
                format!("in {value} {}{plural}", unit.english())
            } else {
                format!("{value} {}{plural} ago", unit.english())
            }
        }
    }
}

/// Describes `date` relative to `now`.
///
/// Anything less than a minute in the past is "just now"; the future always names its
/// distance, down to seconds.
///
/// # Errors
/// Returns `DateError::InvalidDate` if `date` cannot be resolved to an instant.
pub fn relative_time_from(
    date: impl Into<DateLike>,
    now: Timestamp,
    locale: Locale,
) -> Result<String, DateError> {
    let then = date.into().to_timestamp()?;
    let diff_ms = then.as_millisecond() - now.as_millisecond();
    let future = diff_ms > 0;
    let seconds = diff_ms.abs() / MILLIS_PER_SECOND;

    let (value, unit) = largest_unit(seconds);
    if unit == Unit::Second && !future {
        return Ok(match locale {
            Locale::Ar => AR_JUST_NOW,
            Locale::En => EN_JUST_NOW,
        }
        .to_owned());
    }

    Ok(phrase(value, unit, future, locale))
}

/// Describes `date` relative to the current time.
///
/// # Errors
/// Returns `DateError::InvalidDate` if `date` cannot be resolved to an instant.
pub fn relative_time(date: impl Into<DateLike>, locale: Locale) -> Result<String, DateError> {
    relative_time_from(date, Timestamp::now(), locale)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> Timestamp {
        "2024-05-15T12:00:00Z".parse().unwrap()
    }

    fn offset(seconds: i64) -> Timestamp {
        Timestamp::from_second(now().as_second() + seconds).unwrap()
    }

    #[test]
    fn test_just_now() {
        assert_eq!(
            relative_time_from(now(), now(), Locale::Ar).unwrap(),
            "منذ لحظات"
        );
        assert_eq!(
            relative_time_from(offset(-59), now(), Locale::En).unwrap(),
            "just now"
        );
    }

    #[test]
    fn test_just_now_against_clock() {
        assert_eq!(
            relative_time(Timestamp::now(), Locale::Ar).unwrap(),
            "منذ لحظات"
        );
    }

    #[test]
    fn test_minutes_ago() {
        assert_eq!(
            relative_time_from(offset(-5 * 60), now(), Locale::Ar).unwrap(),
            "منذ ٥ دقيقة"
        );
        assert_eq!(
            relative_time_from(offset(-60), now(), Locale::En).unwrap(),
            "1 minute ago"
        );
        assert_eq!(
            relative_time_from(offset(-5 * 60), now(), Locale::En).unwrap(),
            "5 minutes ago"
        );
    }

    #[test]
    fn test_future_seconds() {
        assert_eq!(
            relative_time_from(offset(30), now(), Locale::En).unwrap(),
            "in 30 seconds"
        );
        assert_eq!(
            relative_time_from(offset(1), now(), Locale::En).unwrap(),
            "in 1 second"
        );
        assert_eq!(
            relative_time_from(offset(30), now(), Locale::Ar).unwrap(),
            "بعد ٣٠ ثانية"
        );
    }

    #[test]
    fn test_future_minutes() {
        assert_eq!(
            relative_time_from(offset(5 * 60), now(), Locale::Ar).unwrap(),
            "بعد ٥ دقيقة"
        );
    }

    #[test]
    fn test_hours() {
        assert_eq!(
            relative_time_from(offset(2 * 3600), now(), Locale::En).unwrap(),
            "in 2 hours"
        );
        assert_eq!(
            relative_time_from(offset(-23 * 3600), now(), Locale::Ar).unwrap(),
            "منذ ٢٣ ساعة"
        );
    }

    #[test]
    fn test_days() {
        assert_eq!(
            relative_time_from(offset(3 * 86_400), now(), Locale::Ar).unwrap(),
            "بعد ٣ يوم"
        );
        assert_eq!(
            relative_time_from(offset(-86_400), now(), Locale::En).unwrap(),
            "1 day ago"
        );
        assert_eq!(
            relative_time_from("2024-04-15T12:00:00Z", now(), Locale::En).unwrap(),
            "30 days ago"
        );
    }

    #[test]
    fn test_invalid_date() {
        assert!(matches!(
            relative_time_from("soon", now(), Locale::En),
            Err(DateError::InvalidDate(_))
        ));
    }
}
