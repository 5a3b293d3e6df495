pub mod json_file;

pub use json_file::JsonFileSource;

use crate::engine::errors::SourceError;
use crate::engine::types::FlightRecord;

/// Supplies an already-materialized sequence of flight records.
pub trait RecordSource {
    fn load(&self) -> Result<Vec<FlightRecord>, SourceError>;
}

/// Records held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: Vec<FlightRecord>,
}

impl MemorySource {
    pub fn new(records: Vec<FlightRecord>) -> Self {
        Self { records }
    }
}

impl RecordSource for MemorySource {
    fn load(&self) -> Result<Vec<FlightRecord>, SourceError> {
        Ok(self.records.clone())
    }
}
