use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use crate::engine::errors::SourceError;
use crate::engine::source::RecordSource;
use crate::engine::types::FlightRecord;

/// A record either bare or wrapped as `{"flight": {...}}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum RecordEnvelope {
    Wrapped { flight: FlightRecord },
    Bare(FlightRecord),
}

impl From<RecordEnvelope> for FlightRecord {
    fn from(envelope: RecordEnvelope) -> Self {
        match envelope {
            RecordEnvelope::Wrapped { flight } => flight,
            RecordEnvelope::Bare(flight) => flight,
        }
    }
}

/// Reads flight records from a file holding either one JSON array or one
/// JSON object per line.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn parse(content: &str) -> Result<Vec<FlightRecord>, SourceError> {
        if content.trim_start().starts_with('[') {
            let envelopes: Vec<RecordEnvelope> = serde_json::from_str(content)?;
            return Ok(envelopes.into_iter().map(FlightRecord::from).collect());
        }

        let mut records = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let envelope: RecordEnvelope = serde_json::from_str(line)
                .map_err(|source| SourceError::Line {
                    line: idx + 1,
                    source,
                })?;
            records.push(envelope.into());
        }
        Ok(records)
    }
}

impl RecordSource for JsonFileSource {
    fn load(&self) -> Result<Vec<FlightRecord>, SourceError> {
        debug!("Reading flight records from {:?}", self.path);
        let content = fs::read_to_string(&self.path)?;
        let records = Self::parse(&content)?;
        info!("Loaded {} flight records from {:?}", records.len(), self.path);
        Ok(records)
    }
}
