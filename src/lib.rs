pub mod engine;
pub mod logging;
pub mod shared;

pub use engine::aggregate::{GroupByCounter, GroupCounts, RankedEntry, Ranking};
pub use engine::context::EngineContext;
pub use engine::errors::{EngineError, SourceError};
pub use engine::filter::Predicate;
pub use engine::query::{AirportStats, RateCalculator, StatusSetFilter, StrikeDayDetector};
pub use engine::source::{JsonFileSource, MemorySource, RecordSource};
pub use engine::types::{FlightField, FlightRecord};
pub use engine::window::TimeWindow;

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod test_helpers;
