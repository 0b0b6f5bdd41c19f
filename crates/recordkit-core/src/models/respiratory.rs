//! Respiratory-health tracker records: medications, symptom entries and
//! peak-flow readings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;
use super::validation::{Record, ValidationError};
use crate::metrics;

/// Role a medication plays in the treatment plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MedicationType {
    /// Daily maintenance
    Controller,
    /// Quick relief
    Rescue,
    Other,
}

impl MedicationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MedicationType::Controller => "controller",
            MedicationType::Rescue => "rescue",
            MedicationType::Other => "other",
        }
    }
}

fn default_active() -> bool {
    true
}

/// A medication in the user's plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Medication {
    pub id: String,
    pub name: String,
    /// Free-form dose (e.g., "2 puffs")
    #[serde(default)]
    pub dosage: String,
    /// Free-form schedule (e.g., "twice daily")
    #[serde(default)]
    pub frequency: String,
    #[serde(rename = "type")]
    pub kind: MedicationType,
    #[serde(default)]
    pub notes: String,
    /// Whether the medication is currently taken
    #[serde(default = "default_active")]
    pub active: bool,
}

impl Medication {
    /// Create an active medication.
    pub fn new(
        name: impl Into<String>,
        dosage: impl Into<String>,
        frequency: impl Into<String>,
        kind: MedicationType,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            dosage: dosage.into(),
            frequency: frequency.into(),
            kind,
            notes: String::new(),
            active: true,
        }
    }
}

impl Record for Medication {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Self-reported symptom severity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Mild, Severity::Moderate, Severity::Severe];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        }
    }
}

/// One symptom log entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SymptomEntry {
    pub id: String,
    #[serde(with = "timestamp")]
    pub date: DateTime<Utc>,
    /// Symptom labels experienced
    #[serde(default)]
    pub symptoms: Vec<String>,
    pub severity: Severity,
    /// Suspected trigger labels
    #[serde(default)]
    pub triggers: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

impl SymptomEntry {
    /// Create an entry logged at `at`.
    pub fn record(
        symptoms: Vec<String>,
        severity: Severity,
        triggers: Vec<String>,
        notes: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            date: at,
            symptoms,
            severity,
            triggers,
            notes: notes.into(),
        }
    }
}

impl Record for SymptomEntry {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Peak-flow zone relative to personal best.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    /// At least 80% of personal best
    Green,
    /// 50% up to 80% of personal best
    Yellow,
    /// Below 50% of personal best
    Red,
}

impl Zone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::Green => "green",
            Zone::Yellow => "yellow",
            Zone::Red => "red",
        }
    }

    /// Action message shown next to a reading.
    pub fn guidance(&self) -> &'static str {
        match self {
            Zone::Green => "Good control - continue current treatment",
            Zone::Yellow => "Caution - may need to adjust treatment",
            Zone::Red => "Alert - seek medical attention",
        }
    }
}

/// A single peak expiratory flow measurement (L/min).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PeakFlowReading {
    pub id: String,
    #[serde(with = "timestamp")]
    pub date: DateTime<Utc>,
    pub reading: u32,
    /// Personal best at the time of the reading
    pub personal_best: u32,
    /// Zone computed when the reading was taken
    pub zone: Zone,
    #[serde(default)]
    pub notes: String,
}

impl PeakFlowReading {
    /// Create a reading taken at `at`, classifying it against `personal_best`.
    pub fn record(
        reading: u32,
        personal_best: u32,
        notes: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            date: at,
            reading,
            personal_best,
            zone: metrics::zone_classification(f64::from(reading), f64::from(personal_best)),
            notes: notes.into(),
        }
    }
}

impl Record for PeakFlowReading {
    fn id(&self) -> &str {
        &self.id
    }
}
