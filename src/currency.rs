//! Currency amounts with en-US grouping, ISO 4217 minor units and Arabic symbols.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::consts::{
    CURRENCY_SYMBOLS, DEFAULT_CURRENCY, DEFAULT_FRACTION_DIGITS, THREE_DECIMAL_CURRENCIES,
    ZERO_DECIMAL_CURRENCIES,
};
use crate::digits::to_eastern_digits;

/// Options for [`format_currency`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyOptions {
    /// ISO 4217 code, e.g. `"SAR"`
    pub currency: String,
    /// Eastern Arabic digits (`١٢٣`) instead of Western (`123`)
    pub use_arabic_digits: bool,
    /// Append the currency symbol (or the code when no symbol is known)
    pub show_symbol: bool,
}

impl Default for CurrencyOptions {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_owned(),
            use_arabic_digits: true,
            show_symbol: true,
        }
    }
}

impl CurrencyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.currency = code.into();
        self
    }

    #[must_use]
    pub const fn use_arabic_digits(mut self, enabled: bool) -> Self {
        self.use_arabic_digits = enabled;
        self
    }

    #[must_use]
    pub const fn show_symbol(mut self, enabled: bool) -> Self {
        self.show_symbol = enabled;
        self
    }
}

/// Number of decimal places quoted for a currency code (case-insensitive).
pub fn currency_fraction_digits(code: &str) -> usize {
    let code = code.trim().to_ascii_uppercase();
    if THREE_DECIMAL_CURRENCIES.contains(&code.as_str()) {
        3
    } else if ZERO_DECIMAL_CURRENCIES.contains(&code.as_str()) {
        0
    } else {
        DEFAULT_FRACTION_DIGITS
    }
}

/// Display symbol for a currency code, if one is known (case-insensitive).
pub fn currency_symbol(code: &str) -> Option<&'static str> {
    let code = code.trim();
    CURRENCY_SYMBOLS
        .iter()
        .find(|(iso, _)| iso.eq_ignore_ascii_case(code))
        .map(|&(_, symbol)| symbol)
}

fn group_thousands(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_owned();
    }

    let mut result = String::with_capacity(digits.len() + (digits.len() - 1) / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Rounds the shortest decimal form of `abs` half away from zero, so `1.005` reads as
/// written rather than as its binary neighbour.
fn round_decimal(abs: f64, fraction_digits: u32) -> Option<String> {
    let mut decimal = Decimal::from_str(&abs.to_string())
        .ok()?
        .round_dp_with_strategy(fraction_digits, RoundingStrategy::MidpointAwayFromZero);
    decimal.rescale(fraction_digits);
    (decimal.scale() == fraction_digits).then(|| decimal.to_string())
}

fn format_amount(amount: f64, fraction_digits: usize) -> String {
    if amount.is_nan() {
        return "NaN".to_owned();
    }
    let sign = if amount.is_sign_negative() { "-" } else { "" };
    if amount.is_infinite() {
        return format!("{sign}∞");
    }

    let abs = amount.abs();
    // fraction_digits is at most 3
    #[allow(clippy::cast_possible_truncation)]
    let text = round_decimal(abs, fraction_digits as u32).unwrap_or_else(|| {
        if abs >= 1.0 {
            // beyond the decimal range every float is an integer
            let mut text = abs.to_string();
            if fraction_digits > 0 {
                text.push('.');
                text.push_str(&"0".repeat(fraction_digits));
            }
            text
        } else {
            format!("{abs:.fraction_digits$}")
        }
    });

    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut out = format!("{sign}{}", group_thousands(whole));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Formats an amount as `"<amount> <symbol>"`, e.g. `"١٠٠.٠٠ ر.س"`.
///
/// Unknown currency codes are shown as-is in place of a symbol and quoted with two decimals.
pub fn format_currency(amount: f64, options: &CurrencyOptions) -> String {
    let fraction_digits = currency_fraction_digits(&options.currency);

    let mut formatted = format_amount(amount, fraction_digits);
    if options.use_arabic_digits {
        formatted = to_eastern_digits(formatted);
    }

    if !options.show_symbol {
        return formatted;
    }

    let symbol = currency_symbol(&options.currency).unwrap_or(options.currency.as_str());
    format!("{formatted} {symbol}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn western(code: &str) -> CurrencyOptions {
        CurrencyOptions::new().currency(code).use_arabic_digits(false)
    }

    #[test]
    fn test_default_currency() {
        assert_eq!(format_currency(100.0, &CurrencyOptions::default()), "١٠٠.٠٠ ر.س");
    }

    #[test]
    fn test_egp() {
        let options = CurrencyOptions::new().currency("EGP");
        assert_eq!(format_currency(50.5, &options), "٥٠.٥٠ ج.م");
    }

    #[test]
    fn test_usd_western_digits() {
        assert_eq!(format_currency(1000.0, &western("USD")), "1,000.00 $");
        assert_eq!(
            format_currency(1_234_567.891, &western("USD")),
            "1,234,567.89 $"
        );
    }

    #[test]
    fn test_three_decimal_currencies() {
        assert_eq!(format_currency(1.234, &western("KWD")), "1.234 د.ك");
        assert_eq!(format_currency(1.2, &western("BHD")), "1.200 د.ب");
        assert_eq!(format_currency(1.2, &western("OMR")), "1.200 ر.ع");
        assert_eq!(format_currency(7.0, &western("JOD")), "7.000 د.أ");
    }

    #[test]
    fn test_zero_decimal_currency() {
        assert_eq!(format_currency(1000.0, &western("JPY")), "1,000 JPY");
        assert_eq!(format_currency(1499.6, &western("IQD")), "1,500 IQD");
    }

    #[test]
    fn test_custom_currency() {
        let options = CurrencyOptions::new().currency("XYZ");
        assert_eq!(format_currency(123.0, &options), "١٢٣.٠٠ XYZ");
    }

    #[test]
    fn test_hide_symbol() {
        let options = CurrencyOptions::new().show_symbol(false);
        assert_eq!(format_currency(100.0, &options), "١٠٠.٠٠");
    }

    #[test]
    fn test_negative_and_rounding() {
        assert_eq!(format_currency(-1234.5, &western("EUR")), "-1,234.50 €");
        assert_eq!(format_currency(0.999, &western("GBP")), "1.00 £");
        assert_eq!(format_currency(999_999.999, &western("USD")), "1,000,000.00 $");
    }

    #[test]
    fn test_rounds_decimal_midpoints_away_from_zero() {
        assert_eq!(format_currency(1.005, &western("USD")), "1.01 $");
        assert_eq!(format_currency(-1.005, &western("USD")), "-1.01 $");
        assert_eq!(format_currency(2.675, &western("EUR")), "2.68 €");
        assert_eq!(format_currency(1.0005, &western("KWD")), "1.001 د.ك");
        assert_eq!(format_currency(2.5, &western("JPY")), "3 JPY");
        assert_eq!(format_currency(1.004, &western("USD")), "1.00 $");
    }

    #[test]
    fn test_beyond_decimal_range() {
        assert_eq!(
            format_currency(1e30, &western("JPY")),
            "1,000,000,000,000,000,000,000,000,000,000 JPY"
        );
        assert_eq!(
            format_currency(1e30, &western("USD")),
            "1,000,000,000,000,000,000,000,000,000,000.00 $"
        );
        assert_eq!(format_currency(5e-324, &western("USD")), "0.00 $");
        assert_eq!(format_currency(-0.0, &western("USD")), "-0.00 $");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_currency(f64::NAN, &western("USD")), "NaN $");
        assert_eq!(format_currency(f64::INFINITY, &western("USD")), "∞ $");
        assert_eq!(format_currency(f64::NEG_INFINITY, &western("USD")), "-∞ $");
    }

    #[test]
    fn test_huge_amount() {
        assert_eq!(
            format_currency(1e20, &western("USD")),
            "100,000,000,000,000,000,000.00 $"
        );
    }

    #[test]
    fn test_case_insensitive_codes() {
        assert_eq!(currency_fraction_digits("kwd"), 3);
        assert_eq!(currency_symbol("sar"), Some("ر.س"));
        assert_eq!(currency_symbol("XYZ"), None);
        assert_eq!(currency_fraction_digits("not-a-code"), 2);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn test_options_from_partial_json() {
        let options: CurrencyOptions =
            serde_json::from_str(r#"{"currency": "AED", "use_arabic_digits": false}"#).unwrap();
        assert_eq!(options.currency, "AED");
        assert!(options.show_symbol);
        assert_eq!(format_currency(12.0, &options), "12.00 د.إ");

        let options: CurrencyOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, CurrencyOptions::default());
    }
}
