use std::io;
use thiserror::Error;
use tracing::{debug, error};

/// Errors raised by the aggregation engine.
///
/// Missing or empty record fields are never an error: they are excluded
/// from aggregation by the field predicates.
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("Invalid {field} '{value}', expected {expected}")]
    Format {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("Invalid time window: {0}")]
    InvalidWindow(String),

    #[error("No data: {0}")]
    EmptyResult(String),
}

impl EngineError {
    pub fn format(field: &'static str, value: &str, expected: &'static str) -> Self {
        EngineError::Format {
            field,
            value: value.to_string(),
            expected,
        }
    }

    pub fn log_error(&self) {
        match self {
            EngineError::Format { field, value, .. } => {
                error!("Malformed {} value: {}", field, value);
                debug!("Format error details: {:?}", self);
            }
            EngineError::InvalidWindow(e) => {
                error!("Invalid time window: {}", e);
                debug!("Time window error details: {}", e);
            }
            EngineError::EmptyResult(e) => {
                error!("Empty result: {}", e);
                debug!("Empty result details: {}", e);
            }
        }
    }
}

/// Errors raised while loading flight records from a source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse record on line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}
