//! Formatting helpers for Arabic-speaking locales.
//!
//! - Eastern Arabic digits: [`to_eastern_digits`], [`to_western_digits`]
//! - Tabular Hijri calendar: [`to_hijri`], [`format_hijri`]
//! - Arabic number words (tafgeet): [`tafgeet`]
//! - Dates, relative time and currency: [`format_date`], [`relative_time`], [`format_currency`]
//!
//! Everything is pure except [`relative_time`], which reads the system clock. Calendar
//! fields are always taken in UTC, never in the host timezone.

mod consts;
mod currency;
mod date_format;
mod digits;
mod hijri;
mod locale;
mod prelude;
mod relative;
mod tafgeet;

pub use consts::*;
pub use currency::{CurrencyOptions, currency_fraction_digits, currency_symbol, format_currency};
pub use date_format::{Calendar, DateFormatOptions, DatePattern, format_date};
pub use digits::{to_eastern_digits, to_western_digits};
pub use hijri::{
    DateError, DateLike, HijriDate, format_hijri, gregorian_to_jdn, hijri_month_name, to_hijri,
};
pub use locale::{Locale, LocaleError};
pub use relative::{relative_time, relative_time_from};
pub use tafgeet::{TafgeetError, TafgeetInput, tafgeet};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hijri_date_through_formatter() {
        let hijri = to_hijri("2024-03-15T00:00:00Z").unwrap();
        assert_eq!(
            to_eastern_digits(format_hijri(&hijri).unwrap()),
            format_date(
                "2024-03-15T00:00:00Z",
                &DateFormatOptions::new().calendar(Calendar::Hijri)
            )
            .unwrap()
        );
    }

    #[test]
    fn test_tafgeet_of_eastern_digits() {
        let amount = to_western_digits("١٢٣٤");
        assert_eq!(
            tafgeet(amount.as_str()).unwrap(),
            "ألف ومائتان وأربعة وثلاثون"
        );
    }

    #[test]
    fn test_errors_are_send_sync() {
        fn assert_send_sync<T: Send + Sync + std::error::Error>() {}
        assert_send_sync::<DateError>();
        assert_send_sync::<TafgeetError>();
        assert_send_sync::<LocaleError>();
    }

    #[test]
    fn test_constants() {
        assert_eq!(MAX_SAFE_INTEGER, (1_i64 << 53) - 1);
        assert_eq!(HIJRI_MONTHS[8], "رمضان");
    }
}
