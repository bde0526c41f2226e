//! Parsing of CSS `<time>` strings such as `"1.5s"` or `"250ms"`.

use crate::foundation::error::{SettleError, SettleResult};

/// Unit suffix of a parsed time value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    /// `s`
    Seconds,
    /// `ms`
    Millis,
}

/// A non-negative time value as written in a style string.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimeValue {
    /// Numeric part, unscaled.
    pub value: f64,
    /// Unit suffix.
    pub unit: TimeUnit,
}

impl TimeValue {
    /// Convert to milliseconds.
    pub fn to_millis(self) -> f64 {
        match self.unit {
            TimeUnit::Seconds => self.value * 1000.0,
            TimeUnit::Millis => self.value,
        }
    }
}

/// Find the first `<digits>[.[<digits>]](s|ms)` run in `s`.
///
/// Anything around the match is ignored, so for a list like `"0.3s, 1s"` only the first entry is
/// returned.
pub fn parse_time(s: &str) -> Option<TimeValue> {
    let bytes = s.as_bytes();
    let mut start = 0;
    while start < bytes.len() {
        if !bytes[start].is_ascii_digit() {
            start += 1;
            continue;
        }
        let int_end = digits_end(bytes, start);
        if let Some(tv) = match_at(s, start, int_end) {
            return Some(tv);
        }
        // Any later start inside the same digit run ends at the same place and fails the same way.
        start = int_end;
    }
    None
}

/// Parse `s` into milliseconds, returning `0.0` when nothing usable is found.
pub fn parse_time_ms(s: &str) -> f64 {
    match parse_time(s).map(TimeValue::to_millis) {
        Some(ms) if ms.is_finite() => ms,
        _ => 0.0,
    }
}

/// Strict variant of [`parse_time_ms`].
pub fn try_parse_time_ms(s: &str) -> SettleResult<f64> {
    let tv = parse_time(s)
        .ok_or_else(|| SettleError::parse(format!("no time value in '{}'", s.trim())))?;
    let ms = tv.to_millis();
    if !ms.is_finite() {
        return Err(SettleError::parse(format!(
            "time value in '{}' is out of range",
            s.trim()
        )));
    }
    Ok(ms)
}

fn digits_end(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    i
}

fn match_at(s: &str, start: usize, int_end: usize) -> Option<TimeValue> {
    let bytes = s.as_bytes();
    let mut end = int_end;
    if bytes.get(end) == Some(&b'.') {
        end = digits_end(bytes, end + 1);
    }

    let unit = match (bytes.get(end), bytes.get(end + 1)) {
        (Some(b's'), _) => TimeUnit::Seconds,
        (Some(b'm'), Some(b's')) => TimeUnit::Millis,
        _ => return None,
    };
    let value = s[start..end].parse::<f64>().ok()?;
    Some(TimeValue { value, unit })
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/time.rs"]
mod tests;
