use std::collections::BTreeSet;

use crate::engine::context::EngineContext;
use crate::engine::filter::Predicate;
use crate::engine::types::{FlightField, FlightRecord};

/// Flights of one airline whose status is any of a set of codes.
#[derive(Debug, Clone)]
pub struct StatusSetFilter {
    airline_display_code: String,
    statuses: BTreeSet<String>,
}

impl StatusSetFilter {
    /// The status set is the union of `status` and `more`, so it is never
    /// empty.
    pub fn new<I, S>(airline_display_code: impl Into<String>, status: impl Into<String>, more: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut statuses: BTreeSet<String> = more.into_iter().map(Into::into).collect();
        statuses.insert(status.into());
        Self {
            airline_display_code: airline_display_code.into(),
            statuses,
        }
    }

    pub fn statuses(&self) -> &BTreeSet<String> {
        &self.statuses
    }

    pub fn predicate(&self) -> Predicate {
        Predicate::equals(FlightField::AirlineDisplayCode, self.airline_display_code.as_str()).and(
            Predicate::in_set(FlightField::FlightStatus, self.statuses.iter().cloned()),
        )
    }

    pub fn apply<'a>(
        &self,
        ctx: &EngineContext,
        records: &'a [FlightRecord],
    ) -> Vec<&'a FlightRecord> {
        self.predicate().filter(ctx, records)
    }
}
