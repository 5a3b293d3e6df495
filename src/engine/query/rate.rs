use tracing::{debug, warn};

use crate::engine::context::EngineContext;
use crate::engine::errors::EngineError;
use crate::engine::types::{FlightField, FlightRecord};
use crate::engine::window::TimeWindow;

/// Average number of flights per hour scheduled inside a time window.
#[derive(Debug, Clone)]
pub struct RateCalculator {
    window: TimeWindow,
}

impl RateCalculator {
    pub fn new(window: TimeWindow) -> Self {
        Self { window }
    }

    pub fn from_limits(lower: &str, upper: &str) -> Result<Self, EngineError> {
        Ok(Self::new(TimeWindow::new(lower, upper)?))
    }

    pub fn window(&self) -> &TimeWindow {
        &self.window
    }

    /// Records with a non-empty `scheduledTime` inside the window.
    pub fn count_in_window(
        &self,
        ctx: &EngineContext,
        records: &[FlightRecord],
    ) -> Result<u64, EngineError> {
        ctx.try_fold_partitions(
            records,
            |part| {
                let mut n = 0u64;
                for record in part {
                    let Some(time) = record.field(FlightField::ScheduledTime) else {
                        continue;
                    };
                    if self.window.matches(time)? {
                        n += 1;
                    }
                }
                Ok(n)
            },
            |a, b| a + b,
        )
    }

    /// Matching records divided by the window length in whole hours.
    /// A window shorter than one hour is rejected instead of dividing by
    /// zero.
    pub fn average_per_hour(
        &self,
        ctx: &EngineContext,
        records: &[FlightRecord],
    ) -> Result<f64, EngineError> {
        let hours = self.window.whole_hours();
        if hours == 0 {
            warn!(
                "Window {}..{} is shorter than one hour",
                self.window.lower(),
                self.window.upper()
            );
            return Err(EngineError::InvalidWindow(format!(
                "window {}..{} spans less than one whole hour",
                self.window.lower(),
                self.window.upper()
            )));
        }
        let count = self.count_in_window(ctx, records)?;
        debug!(
            "{} flights in {}..{} over {} hours",
            count,
            self.window.lower(),
            self.window.upper(),
            hours
        );
        Ok(count as f64 / hours as f64)
    }
}
