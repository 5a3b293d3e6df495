use std::collections::HashMap;

use tracing::info;

use crate::engine::aggregate::{GroupByCounter, Ranking};
use crate::engine::context::EngineContext;
use crate::engine::errors::EngineError;
use crate::engine::filter::Predicate;
use crate::engine::query::rate::RateCalculator;
use crate::engine::query::status::StatusSetFilter;
use crate::engine::query::strike::StrikeDayDetector;
use crate::engine::types::{FlightField, FlightRecord};
use crate::shared::config::EngineConfig;
use crate::shared::datetime::time::parse_date;

/// Airport statistics over an in-memory slice of flight records.
///
/// Owns the execution context and the domain constants (cancellation
/// marker, strike airline, Berlin airport codes); every report passes the
/// same context down to the engine primitives.
#[derive(Debug, Clone)]
pub struct AirportStats {
    ctx: EngineContext,
    cancelled_status: String,
    strike_airline: String,
    berlin_airports: Vec<String>,
}

impl AirportStats {
    pub fn new(ctx: EngineContext) -> Self {
        Self::with_config(ctx, &EngineConfig::default())
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::with_config(EngineContext::from_config(config), config)
    }

    pub fn with_config(ctx: EngineContext, config: &EngineConfig) -> Self {
        Self {
            ctx,
            cancelled_status: config.cancelled_status.clone(),
            strike_airline: config.strike_airline.clone(),
            berlin_airports: config.berlin_airports.clone(),
        }
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    /// Arrival airports ranked by number of flights.
    pub fn most_common_destinations(&self, flights: &[FlightRecord]) -> Ranking {
        info!("Ranking destinations over {} flights", flights.len());
        GroupByCounter::new(FlightField::ArrivalAirport)
            .count(&self.ctx, flights)
            .into_ranking()
    }

    /// Departure gates ranked by number of flights to a Berlin airport.
    pub fn gates_with_flights_to_berlin(&self, flights: &[FlightRecord]) -> Ranking {
        info!(
            "Ranking gates for flights to {:?} over {} flights",
            self.berlin_airports,
            flights.len()
        );
        GroupByCounter::new(FlightField::Gate)
            .with_filter(Predicate::in_set(
                FlightField::ArrivalAirport,
                self.berlin_airports.iter().cloned(),
            ))
            .count(&self.ctx, flights)
            .into_ranking()
    }

    /// Flights per aircraft model on `origin_date` (`YYYY-MM-DD`).
    pub fn aircraft_count_on_date(
        &self,
        flights: &[FlightRecord],
        origin_date: &str,
    ) -> Result<HashMap<String, u64>, EngineError> {
        parse_date(origin_date)?;
        let counts = GroupByCounter::new(FlightField::ModelName)
            .with_filter(Predicate::equals(FlightField::OriginDate, origin_date))
            .count(&self.ctx, flights);
        Ok(counts.into_map())
    }

    /// Cancellation ranking of the configured strike airline.
    pub fn strike_ranking(&self, flights: &[FlightRecord]) -> Ranking {
        self.strike_detector(&self.strike_airline).rank(&self.ctx, flights)
    }

    /// Every day tied for the most cancellations of the strike airline
    /// (Ryanair unless configured otherwise); empty when nothing was
    /// cancelled.
    pub fn ryanair_strike(&self, flights: &[FlightRecord]) -> Vec<String> {
        self.strike_detector(&self.strike_airline)
            .strike_days(&self.ctx, flights)
    }

    pub fn strike_ranking_for(&self, flights: &[FlightRecord], airline: &str) -> Ranking {
        self.strike_detector(airline).rank(&self.ctx, flights)
    }

    /// Strike days for an arbitrary airline IATA code.
    pub fn strike_days_for(&self, flights: &[FlightRecord], airline: &str) -> Vec<String> {
        self.strike_detector(airline).strike_days(&self.ctx, flights)
    }

    fn strike_detector(&self, airline: &str) -> StrikeDayDetector {
        StrikeDayDetector::new(airline, self.cancelled_status.as_str())
    }

    /// Flights of `airline_display_code` whose status is `status` or any
    /// of `more`.
    pub fn flights_of_airline_with_status<'a>(
        &self,
        flights: &'a [FlightRecord],
        airline_display_code: &str,
        status: &str,
        more: &[&str],
    ) -> Vec<&'a FlightRecord> {
        StatusSetFilter::new(airline_display_code, status, more.iter().copied())
            .apply(&self.ctx, flights)
    }

    /// Average flights per hour scheduled between `lower` and `upper`
    /// (`hh:mm:ss`, both included).
    pub fn avg_number_of_flights_in_window(
        &self,
        flights: &[FlightRecord],
        lower: &str,
        upper: &str,
    ) -> Result<f64, EngineError> {
        RateCalculator::from_limits(lower, upper)?.average_per_hour(&self.ctx, flights)
    }

    /// Operating airlines ranked by flights that carry both an airline and
    /// an aircraft code.
    pub fn airline_counts(&self, flights: &[FlightRecord]) -> Ranking {
        GroupByCounter::new(FlightField::IataCode)
            .with_filter(Predicate::present(FlightField::IcaoCode))
            .count(&self.ctx, flights)
            .into_ranking()
    }

    /// ICAO aircraft codes flown by one airline, ranked by flights.
    pub fn aircraft_codes_for_airline(&self, flights: &[FlightRecord], airline: &str) -> Ranking {
        GroupByCounter::new(FlightField::IcaoCode)
            .with_filter(Predicate::equals(FlightField::IataCode, airline))
            .count(&self.ctx, flights)
            .into_ranking()
    }
}

impl Default for AirportStats {
    fn default() -> Self {
        Self::new(EngineContext::default())
    }
}
