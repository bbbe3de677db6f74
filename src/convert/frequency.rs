//! Frequency converters.
//!
//! Domain frequencies are MHz decimal strings (`"14.320"`). Parsing is done
//! with integer arithmetic so that `"14.320"` always lands on exactly
//! `14_320_000` Hz.

use super::ConvertError;

/// Hertz per megahertz.
pub const HZ_PER_MHZ: i64 = 1_000_000;

const FRACTION_DIGITS: usize = 6;

/// Parses non-negative MHz decimal text into hertz, rounding half up.
///
/// A leading `-` is rejected: frequencies are never below zero.
pub fn parse_mhz(text: &str) -> Result<i64, ConvertError> {
    let invalid = || ConvertError::Frequency(text.to_string());
    let s = text.trim();
    let unsigned = s.strip_prefix('+').unwrap_or(s);

    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, f),
        None => (unsigned, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(invalid());
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit()) || !frac_part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let out_of_range = || ConvertError::FrequencyRange(text.to_string());

    let mut hz: i64 = 0;
    for b in int_part.bytes() {
        hz = hz
            .checked_mul(10)
            .and_then(|v| v.checked_add(i64::from(b - b'0')))
            .ok_or_else(out_of_range)?;
    }
    hz = hz.checked_mul(HZ_PER_MHZ).ok_or_else(out_of_range)?;

    let frac = frac_part.as_bytes();
    let mut scale = HZ_PER_MHZ / 10;
    for &b in frac.iter().take(FRACTION_DIGITS) {
        hz = hz
            .checked_add(i64::from(b - b'0') * scale)
            .ok_or_else(out_of_range)?;
        scale /= 10;
    }
    if frac.get(FRACTION_DIGITS).is_some_and(|&b| b >= b'5') {
        hz = hz.checked_add(1).ok_or_else(out_of_range)?;
    }

    Ok(hz)
}

/// Renders hertz as MHz text with six fractional digits.
pub fn format_mhz(hz: i64) -> String {
    let sign = if hz < 0 { "-" } else { "" };
    let abs = hz.unsigned_abs();
    let per = HZ_PER_MHZ.unsigned_abs();
    format!("{sign}{}.{:06}", abs / per, abs % per)
}

/// Domain MHz text to an integer hertz column. Empty text is NULL.
pub fn encode_hz(freq: &String) -> Result<Option<i64>, ConvertError> {
    if freq.trim().is_empty() {
        return Ok(None);
    }
    parse_mhz(freq).map(Some)
}

/// Integer hertz column to domain MHz text. NULL is empty text.
pub fn decode_hz(hz: &Option<i64>) -> Result<String, ConvertError> {
    Ok(hz.map(format_mhz).unwrap_or_default())
}

/// Domain MHz text to canonical NUMERIC text. Empty text is NULL.
pub fn encode_numeric(freq: &String) -> Result<Option<String>, ConvertError> {
    if freq.trim().is_empty() {
        return Ok(None);
    }
    parse_mhz(freq).map(|hz| Some(format_mhz(hz)))
}

/// NUMERIC text to domain MHz text, re-rendered with six fractional digits.
pub fn decode_numeric(numeric: &Option<String>) -> Result<String, ConvertError> {
    match numeric {
        Some(text) if !text.trim().is_empty() => parse_mhz(text).map(format_mhz),
        _ => Ok(String::new()),
    }
}
