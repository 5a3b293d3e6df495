use chrono::{NaiveDate, NaiveTime};

use crate::engine::errors::EngineError;

pub const TIME_FORMAT: &str = "%H:%M:%S";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const TIME_SHAPE: &[u8] = b"dd:dd:dd";
const DATE_SHAPE: &[u8] = b"dddd-dd-dd";

/// Checks `value` against a shape template where `d` is any ASCII digit
/// and every other byte must match literally.
fn has_shape(value: &str, shape: &[u8]) -> bool {
    value.len() == shape.len()
        && value.bytes().zip(shape.iter()).all(|(b, &s)| match s {
            b'd' => b.is_ascii_digit(),
            lit => b == lit,
        })
}

/// Fixed-width `hh:mm:ss` shape check without range validation.
#[inline]
pub fn is_fixed_time(value: &str) -> bool {
    has_shape(value, TIME_SHAPE)
}

/// Parses a fixed-width, zero-padded `hh:mm:ss` time of day.
pub fn parse_time_of_day(value: &str) -> Result<NaiveTime, EngineError> {
    if !is_fixed_time(value) {
        return Err(EngineError::format("time", value, "hh:mm:ss"));
    }
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .map_err(|_| EngineError::format("time", value, "hh:mm:ss"))
}

/// Parses a fixed-width, zero-padded `YYYY-MM-DD` calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate, EngineError> {
    if !has_shape(value, DATE_SHAPE) {
        return Err(EngineError::format("date", value, "YYYY-MM-DD"));
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| EngineError::format("date", value, "YYYY-MM-DD"))
}

/// Returns true if `before` is earlier than or equal to `after`.
///
/// Digit-by-digit scan that skips the `:` separators and decides at the
/// first differing digit. Only chronologically correct because both inputs
/// are fixed-width and zero padded; do not use on variable-width strings.
pub fn is_before_or_equal(before: &str, after: &str) -> bool {
    for (b, a) in before.bytes().zip(after.bytes()) {
        if b == b':' {
            continue;
        }
        if b < a {
            return true;
        }
        if b > a {
            return false;
        }
    }
    true
}
