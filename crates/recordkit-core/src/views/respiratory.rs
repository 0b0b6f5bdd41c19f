//! Respiratory-health tracker views.

use serde::{Deserialize, Serialize};

use crate::metrics::{self, Frequency, SeverityCounts};
use crate::models::{Medication, PeakFlowReading, SymptomEntry};
use crate::query;

/// Insert `record` at the front of a newest-first series.
pub fn with_prepended<R: Clone>(series: &[R], record: R) -> Vec<R> {
    let mut next = Vec::with_capacity(series.len() + 1);
    next.push(record);
    next.extend_from_slice(series);
    next
}

/// Newest entry of a newest-first series.
pub fn latest<R>(series: &[R]) -> Option<&R> {
    series.first()
}

/// Rounded average of the most recent readings.
pub fn recent_average(readings: &[PeakFlowReading]) -> u32 {
    metrics::rolling_average(
        readings.iter().map(|r| r.reading),
        metrics::RECENT_READINGS_WINDOW,
    )
}

/// Split medications into (active, inactive), preserving order.
pub fn partition_active(medications: &[Medication]) -> (Vec<&Medication>, Vec<&Medication>) {
    let active = query::filter(medications, |m| m.active);
    let inactive = query::filter(medications, |m| !m.active);
    (active, inactive)
}

/// Medications with `active` flipped on the record matching `id`.
pub fn with_toggled_active(medications: &[Medication], id: &str) -> Vec<Medication> {
    medications
        .iter()
        .map(|m| {
            if m.id == id {
                Medication {
                    active: !m.active,
                    ..m.clone()
                }
            } else {
                m.clone()
            }
        })
        .collect()
}

/// Aggregated symptom log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SymptomSummary {
    pub entries: usize,
    pub symptoms: Vec<Frequency>,
    pub triggers: Vec<Frequency>,
    pub severity: SeverityCounts,
}

pub fn symptom_summary(entries: &[SymptomEntry]) -> SymptomSummary {
    SymptomSummary {
        entries: entries.len(),
        symptoms: metrics::frequencies(
            entries
                .iter()
                .flat_map(|e| e.symptoms.iter().map(String::as_str)),
        ),
        triggers: metrics::frequencies(
            entries
                .iter()
                .flat_map(|e| e.triggers.iter().map(String::as_str)),
        ),
        severity: metrics::severity_counts(entries),
    }
}
