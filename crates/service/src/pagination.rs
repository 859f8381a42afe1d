//! Pagination window for listing rides.
//!
//! `from`/`count` arrive as text. Absent or empty values take the defaults;
//! anything present must coerce to an integer.

use crate::errors::RideError;

pub const DEFAULT_FROM: i64 = 0;
pub const DEFAULT_COUNT: i64 = 10;
pub const INVALID_WINDOW_MESSAGE: &str = "The `from` or `count` must be an integer larger or equal to 0";

/// Offset/limit pair bounding a list query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    /// rows to skip
    pub from: i64,
    /// maximum rows to return
    pub count: i64,
}

impl Default for Window {
    fn default() -> Self {
        Self { from: DEFAULT_FROM, count: DEFAULT_COUNT }
    }
}

impl Window {
    /// Parse both bounds. Sign is not checked: SQLite reads a negative limit
    /// as unbounded and a negative offset as zero.
    pub fn parse(from: Option<&str>, count: Option<&str>) -> Result<Self, RideError> {
        let from = parse_integer(from, DEFAULT_FROM);
        let count = parse_integer(count, DEFAULT_COUNT);
        match (from, count) {
            (Some(from), Some(count)) => Ok(Self { from, count }),
            _ => Err(RideError::validation(INVALID_WINDOW_MESSAGE)),
        }
    }
}

/// Absent or empty text takes the default; anything else must be integral.
fn parse_integer(raw: Option<&str>, default: i64) -> Option<i64> {
    match raw {
        None | Some("") => Some(default),
        Some(raw) => parse_integral(raw),
    }
}

/// Integral value of numeric text. `"3"`, `" 3.0 "` and `"3e0"` all parse to
/// 3 and whitespace-only text reads as 0; `"1.1"` and `"abc"` do not parse.
pub fn parse_integral(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(0);
    }
    if let Ok(v) = raw.parse::<i64>() {
        return Some(v);
    }
    let v = raw.parse::<f64>().ok().filter(|v| v.is_finite() && v.fract() == 0.0)?;
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    if v >= i64::MIN as f64 && v < i64::MAX as f64 {
        Some(v as i64)
    } else {
        None
    }
}
