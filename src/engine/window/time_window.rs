use tracing::warn;

use crate::engine::errors::EngineError;
use crate::shared::datetime::time::{is_before_or_equal, parse_time_of_day};

/// Inclusive time-of-day window `[lower, upper]` over `hh:mm:ss` strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeWindow {
    lower: String,
    upper: String,
    whole_hours: i64,
}

impl TimeWindow {
    /// Both limits must be well-formed and `lower <= upper`.
    pub fn new(lower: &str, upper: &str) -> Result<Self, EngineError> {
        let lower_time = parse_time_of_day(lower)?;
        let upper_time = parse_time_of_day(upper)?;
        if !is_before_or_equal(lower, upper) {
            warn!("Rejected time window {}..{}: lower limit after upper limit", lower, upper);
            return Err(EngineError::InvalidWindow(format!(
                "lower limit {lower} is after upper limit {upper}"
            )));
        }
        let whole_hours = upper_time.signed_duration_since(lower_time).num_hours();
        Ok(Self {
            lower: lower.to_string(),
            upper: upper.to_string(),
            whole_hours,
        })
    }

    pub fn lower(&self) -> &str {
        &self.lower
    }

    pub fn upper(&self) -> &str {
        &self.upper
    }

    /// Length of the window in hours, fractional part truncated.
    pub fn whole_hours(&self) -> i64 {
        self.whole_hours
    }

    /// `lower <= time <= upper` for a time already known to be fixed width.
    #[inline]
    pub fn contains(&self, time: &str) -> bool {
        is_before_or_equal(&self.lower, time) && is_before_or_equal(time, &self.upper)
    }

    /// Like [`contains`](Self::contains) but rejects values that are not
    /// a valid fixed-width 24h `hh:mm:ss` time.
    pub fn matches(&self, time: &str) -> Result<bool, EngineError> {
        if parse_time_of_day(time).is_err() {
            return Err(EngineError::format("scheduledTime", time, "hh:mm:ss"));
        }
        Ok(self.contains(time))
    }
}
