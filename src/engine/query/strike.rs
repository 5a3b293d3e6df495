use tracing::debug;

use crate::engine::aggregate::{GroupByCounter, Ranking};
use crate::engine::context::EngineContext;
use crate::engine::errors::EngineError;
use crate::engine::filter::Predicate;
use crate::engine::types::{FlightField, FlightRecord};

/// Finds the days on which an airline cancelled the most flights.
#[derive(Debug, Clone)]
pub struct StrikeDayDetector {
    airline: String,
    cancelled_status: String,
}

impl StrikeDayDetector {
    pub fn new(airline: impl Into<String>, cancelled_status: impl Into<String>) -> Self {
        Self {
            airline: airline.into(),
            cancelled_status: cancelled_status.into(),
        }
    }

    pub fn airline(&self) -> &str {
        &self.airline
    }

    fn counter(&self) -> GroupByCounter {
        let filter = Predicate::equals(FlightField::IataCode, self.airline.as_str())
            .and(Predicate::equals(FlightField::FlightStatus, self.cancelled_status.as_str()));
        GroupByCounter::new(FlightField::OriginDate).with_filter(filter)
    }

    /// Cancellation count per `originDate`, most cancellations first.
    /// Empty when the airline has no cancelled flights.
    pub fn rank(&self, ctx: &EngineContext, records: &[FlightRecord]) -> Ranking {
        let ranking = self.counter().count(ctx, records).into_ranking();
        debug!(
            "Airline {} has cancellations on {} days",
            self.airline,
            ranking.len()
        );
        ranking
    }

    /// Every date tied for the maximal cancellation count, ascending.
    pub fn strike_days(&self, ctx: &EngineContext, records: &[FlightRecord]) -> Vec<String> {
        self.rank(ctx, records)
            .tied_for_max()
            .iter()
            .map(|e| e.key.clone())
            .collect()
    }

    /// Earliest date tied for the maximum, or `EmptyResult` when the
    /// airline has no cancelled flights.
    pub fn strike_day(
        &self,
        ctx: &EngineContext,
        records: &[FlightRecord],
    ) -> Result<String, EngineError> {
        self.strike_days(ctx, records)
            .into_iter()
            .next()
            .ok_or_else(|| {
                EngineError::EmptyResult(format!("no cancelled flights for airline {}", self.airline))
            })
    }
}
