//! Date and time-of-day converters.
//!
//! Storage keeps both as unseparated digit strings (`20251108`, `1140`).
//! Reads are already in storage form, so decode is a pass-through.

use chrono::NaiveDate;

use super::ConvertError;

/// Normalizes `YYYY-MM-DD` or `YYYYMMDD` to `YYYYMMDD`. Empty stays empty.
pub fn encode_date(date: &String) -> Result<String, ConvertError> {
    let trimmed = date.trim();
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    let separators: &[usize] = match trimmed.len() {
        8 => &[],
        10 => &[4, 7],
        _ => return Err(ConvertError::Date(date.clone())),
    };
    let digits = unseparated(trimmed, b'-', separators).ok_or_else(|| ConvertError::Date(date.clone()))?;
    NaiveDate::parse_from_str(&digits, "%Y%m%d").map_err(|_| ConvertError::Date(date.clone()))?;
    Ok(digits)
}

/// Stored date to domain form.
pub fn decode_date(date: &String) -> Result<String, ConvertError> {
    Ok(date.clone())
}

/// Normalizes `HH:MM`, `HHMM`, `HH:MM:SS` or `HHMMSS` to digits only.
pub fn encode_time(time: &String) -> Result<String, ConvertError> {
    let trimmed = time.trim();
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    let separators: &[usize] = match trimmed.len() {
        4 | 6 => &[],
        5 => &[2],
        8 => &[2, 5],
        _ => return Err(ConvertError::Time(time.clone())),
    };
    let digits = unseparated(trimmed, b':', separators).ok_or_else(|| ConvertError::Time(time.clone()))?;

    let field = |at: usize| -> u32 {
        let b = digits.as_bytes();
        u32::from(b[at] - b'0') * 10 + u32::from(b[at + 1] - b'0')
    };
    let (hour, minute) = (field(0), field(2));
    let second = if digits.len() == 6 { field(4) } else { 0 };
    if hour > 23 || minute > 59 || second > 59 {
        return Err(ConvertError::Time(time.clone()));
    }
    Ok(digits)
}

/// Stored time to domain form.
pub fn decode_time(time: &String) -> Result<String, ConvertError> {
    Ok(time.clone())
}

/// Digits of `text` when `sep` appears exactly at `at` and digits everywhere else.
fn unseparated(text: &str, sep: u8, at: &[usize]) -> Option<String> {
    let bytes = text.as_bytes();
    let well_formed = bytes
        .iter()
        .enumerate()
        .all(|(i, &b)| if at.contains(&i) { b == sep } else { b.is_ascii_digit() });
    well_formed.then(|| bytes.iter().filter(|&&b| b != sep).map(|&b| char::from(b)).collect())
}
