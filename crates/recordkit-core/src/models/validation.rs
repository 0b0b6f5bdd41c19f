//! Record shape validation.

use std::collections::HashSet;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Reasons a decoded record or collection is rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Record has an empty id")]
    EmptyId,

    #[error("Duplicate record id: {0}")]
    DuplicateId(String),

    #[error("Field `{field}` of record {id} is not a finite number")]
    NonFinite { id: String, field: &'static str },

    #[error("Field `{field}` of record {id} is negative")]
    Negative { id: String, field: &'static str },

    #[error("Scalar value is not a finite number")]
    NonFiniteScalar,
}

/// A domain entity stored inside a collection.
pub trait Record: Clone + PartialEq + Serialize + DeserializeOwned {
    /// Unique id within the record's collection.
    fn id(&self) -> &str;

    /// Check required fields beyond what deserialization enforces.
    fn validate(&self) -> Result<(), ValidationError> {
        check_id(self.id())
    }
}

/// Validate every record and the uniqueness of their ids.
pub fn validate_collection<R: Record>(records: &[R]) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        record.validate()?;
        if !seen.insert(record.id()) {
            return Err(ValidationError::DuplicateId(record.id().to_string()));
        }
    }
    Ok(())
}

pub(crate) fn check_id(id: &str) -> Result<(), ValidationError> {
    if id.trim().is_empty() {
        return Err(ValidationError::EmptyId);
    }
    Ok(())
}

/// Finite and `>= 0`.
pub(crate) fn check_amount(
    id: &str,
    field: &'static str,
    value: f64,
) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFinite {
            id: id.to_string(),
            field,
        });
    }
    if value < 0.0 {
        return Err(ValidationError::Negative {
            id: id.to_string(),
            field,
        });
    }
    Ok(())
}
