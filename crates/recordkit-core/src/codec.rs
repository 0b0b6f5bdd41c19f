//! Text encoding for stored values.
//!
//! Values are stored as JSON. Decoding is all-or-nothing: if the text does not
//! parse, or any record fails validation, the whole value is rejected. Records
//! carry denormalized copies of their parent's fields, so a partially salvaged
//! collection could not be trusted.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::models::{validate_collection, Record, ValidationError};

/// Codec errors.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid data: {0}")]
    Invalid(#[from] ValidationError),
}

pub type CodecResult<T> = Result<T, CodecError>;

/// A value that can live under a store key.
pub trait StoredValue: Clone + PartialEq + Serialize + DeserializeOwned {
    /// Check invariants that deserialization alone does not enforce.
    fn validate(&self) -> Result<(), ValidationError>;
}

impl<R: Record> StoredValue for Vec<R> {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_collection(self)
    }
}

impl StoredValue for u32 {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl StoredValue for f64 {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.is_finite() {
            Ok(())
        } else {
            Err(ValidationError::NonFiniteScalar)
        }
    }
}

/// Encode a value to its stored text.
///
/// Shipped record types never fail here; the `Result` only surfaces errors
/// from foreign `Serialize` impls.
pub fn encode<T: StoredValue>(value: &T) -> CodecResult<String> {
    Ok(serde_json::to_string(value)?)
}

/// Decode stored text, yielding `None` for anything malformed.
pub fn decode<T: StoredValue>(text: &str) -> Option<T> {
    decode_detailed(text).ok()
}

/// Decode stored text, reporting why it was rejected.
pub fn decode_detailed<T: StoredValue>(text: &str) -> CodecResult<T> {
    let value: T = serde_json::from_str(text)?;
    value.validate()?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Course, CourseLevel, Grade, Medication, MedicationType, PeakFlowReading, Zone,
    };
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    fn reading(id: &str, value: u32) -> PeakFlowReading {
        PeakFlowReading {
            id: id.to_string(),
            date: Utc.with_ymd_and_hms(2025, 1, 10, 8, 0, 0).unwrap(),
            reading: value,
            personal_best: 500,
            zone: Zone::Green,
            notes: String::new(),
        }
    }

    #[test]
    fn test_encode_decode_collection() {
        let readings = vec![reading("2", 420), reading("1", 450)];
        let text = encode(&readings).unwrap();

        let decoded: Vec<PeakFlowReading> = decode(&text).unwrap();
        assert_eq!(decoded, readings);
    }

    #[test]
    fn test_decode_empty_collection() {
        let decoded: Vec<Medication> = decode("[]").unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_decode_rejects_unparseable_text() {
        assert_eq!(decode::<Vec<Medication>>("not json"), None);
        assert_eq!(decode::<Vec<Medication>>(""), None);
        assert_eq!(decode::<Vec<Medication>>(r#"{"id": "1"}"#), None);
    }

    #[test]
    fn test_decode_rejects_whole_collection_on_one_bad_record() {
        let text = r#"[
            {"id": "1", "name": "Fluticasone", "type": "controller"},
            {"id": "2", "name": "Mystery", "type": "placebo"}
        ]"#;
        assert_eq!(decode::<Vec<Medication>>(text), None);

        let err = decode_detailed::<Vec<Medication>>(text).unwrap_err();
        assert!(matches!(err, CodecError::Json(_)));
    }

    #[test]
    fn test_decode_rejects_missing_required_field() {
        let text = r#"[{"id": "1", "type": "controller"}]"#;
        assert_eq!(decode::<Vec<Medication>>(text), None);
    }

    #[test]
    fn test_decode_rejects_duplicate_ids() {
        let duplicated = vec![
            Medication {
                id: "1".into(),
                ..Medication::new("A", "", "", MedicationType::Controller)
            },
            Medication {
                id: "1".into(),
                ..Medication::new("B", "", "", MedicationType::Rescue)
            },
        ];
        let text = encode(&duplicated).unwrap();

        let err = decode_detailed::<Vec<Medication>>(&text).unwrap_err();
        assert!(matches!(
            err,
            CodecError::Invalid(ValidationError::DuplicateId(id)) if id == "1"
        ));
    }

    #[test]
    fn test_decode_rejects_empty_id() {
        let text = r#"[{"id": "", "name": "A", "type": "other"}]"#;
        assert!(matches!(
            decode_detailed::<Vec<Medication>>(text),
            Err(CodecError::Invalid(ValidationError::EmptyId))
        ));
    }

    #[test]
    fn test_scalar_values() {
        assert_eq!(decode::<u32>("500"), Some(500));
        assert_eq!(decode::<u32>("-1"), None);
        assert_eq!(decode::<u32>("\"500\""), None);
        assert_eq!(decode::<f64>("412.5"), Some(412.5));
        assert_eq!(encode(&500u32).unwrap(), "500");
    }

    proptest! {
        #[test]
        fn prop_scores_round_trip_exactly(
            score in 0.0f64..1.0e6,
            max in 0.0f64..1.0e6,
            rating in 0.0f64..5.0,
            progress in 0.0f64..100.0,
        ) {
            let course = Course {
                rating,
                progress: Some(progress),
                ..Course::new("1", "Physics", CourseLevel::Intermediate)
            };
            let grades = vec![Grade::new(&course, "Lab", score, max, Utc::now())];

            let decoded: Vec<Grade> = decode(&encode(&grades).unwrap()).unwrap();
            prop_assert_eq!(decoded[0].grade.to_bits(), score.to_bits());
            prop_assert_eq!(decoded[0].max_grade.to_bits(), max.to_bits());
            prop_assert_eq!(&decoded, &grades);

            let courses = vec![course];
            let decoded: Vec<Course> = decode(&encode(&courses).unwrap()).unwrap();
            prop_assert_eq!(decoded, courses);
        }
    }
}
