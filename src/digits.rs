//! Digit transliteration between Western (0-9) and Eastern Arabic (٠-٩) numerals.

use std::fmt::Display;

use crate::consts::{EASTERN_DIGITS, WESTERN_DIGITS};

/// Replaces every Western digit in the text form of `input` with its Eastern Arabic glyph.
/// All other characters, including digits that are already Eastern, are left untouched.
pub fn to_eastern_digits(input: impl Display) -> String {
    input
        .to_string()
        .chars()
        .map(|c| {
            if c.is_ascii_digit() {
                EASTERN_DIGITS[usize::from(c as u8 - b'0')]
            } else {
                c
            }
        })
        .collect()
}

/// Replaces every Eastern Arabic digit in the text form of `input` with its Western digit.
pub fn to_western_digits(input: impl Display) -> String {
    input
        .to_string()
        .chars()
        .map(|c| {
            EASTERN_DIGITS
                .iter()
                .position(|&e| e == c)
                .map_or(c, |i| WESTERN_DIGITS[i])
        })
        .collect()
}
