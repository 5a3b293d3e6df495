use std::collections::BTreeSet;

use crate::engine::context::EngineContext;
use crate::engine::types::{FlightField, FlightRecord};

/// Structured filter over typed flight fields.
///
/// Every leaf that reads a field is false for absent or empty values, so a
/// predicate never lets a missing value through as its own group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Matches every record
    Always,
    /// Field is present and non-empty
    Present(FlightField),
    Equals {
        field: FlightField,
        value: String,
    },
    In {
        field: FlightField,
        values: BTreeSet<String>,
    },
    And(Box<Predicate>, Box<Predicate>),
    Or(Box<Predicate>, Box<Predicate>),
    Not(Box<Predicate>),
}

impl Predicate {
    pub fn present(field: FlightField) -> Self {
        Predicate::Present(field)
    }

    pub fn equals(field: FlightField, value: impl Into<String>) -> Self {
        Predicate::Equals {
            field,
            value: value.into(),
        }
    }

    pub fn in_set<I, S>(field: FlightField, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Predicate::In {
            field,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn and(self, other: Predicate) -> Self {
        match (self, other) {
            (Predicate::Always, p) | (p, Predicate::Always) => p,
            (a, b) => Predicate::And(Box::new(a), Box::new(b)),
        }
    }

    pub fn or(self, other: Predicate) -> Self {
        Predicate::Or(Box::new(self), Box::new(other))
    }

    pub fn negate(self) -> Self {
        Predicate::Not(Box::new(self))
    }

    pub fn evaluate(&self, record: &FlightRecord) -> bool {
        match self {
            Predicate::Always => true,
            Predicate::Present(field) => record.field(*field).is_some(),
            Predicate::Equals { field, value } => record.field(*field) == Some(value.as_str()),
            Predicate::In { field, values } => record
                .field(*field)
                .is_some_and(|v| values.contains(v)),
            Predicate::And(a, b) => a.evaluate(record) && b.evaluate(record),
            Predicate::Or(a, b) => a.evaluate(record) || b.evaluate(record),
            Predicate::Not(p) => !p.evaluate(record),
        }
    }

    /// Returns the matching records in input order.
    pub fn filter<'a>(
        &self,
        ctx: &EngineContext,
        records: &'a [FlightRecord],
    ) -> Vec<&'a FlightRecord> {
        ctx.fold_partitions(
            records,
            |part| part.iter().filter(|r| self.evaluate(r)).collect::<Vec<_>>(),
            |mut a, b| {
                a.extend(b);
                a
            },
        )
    }
}
