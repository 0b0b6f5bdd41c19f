//! Aggregates over record sequences.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::grades::percentage;
use crate::models::{Assignment, AssignmentStatus, Severity, SymptomEntry};

/// Score totals and average percentage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Aggregate {
    /// Mean of per-record percentages; `0` when empty
    pub average: f64,
    pub total_score: f64,
    pub total_max: f64,
    pub count: usize,
}

impl Aggregate {
    /// Percentage of total points earned.
    pub fn overall_percentage(&self) -> f64 {
        percentage(self.total_score, self.total_max)
    }
}

/// Aggregate a (possibly filtered) sequence of scored records.
pub fn aggregate<I, R, S, M>(records: I, score_of: S, max_of: M) -> Aggregate
where
    I: IntoIterator<Item = R>,
    S: Fn(&R) -> f64,
    M: Fn(&R) -> f64,
{
    let mut result = Aggregate::default();
    let mut percentage_sum = 0.0;

    for record in records {
        let score = score_of(&record);
        let max = max_of(&record);
        percentage_sum += percentage(score, max);
        result.total_score += score;
        result.total_max += max;
        result.count += 1;
    }

    if result.count > 0 {
        result.average = percentage_sum / result.count as f64;
    }
    result
}

/// Assignment counts per status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub pending: usize,
    pub submitted: usize,
    pub graded: usize,
}

impl StatusCounts {
    pub fn get(&self, status: AssignmentStatus) -> usize {
        match status {
            AssignmentStatus::Pending => self.pending,
            AssignmentStatus::Submitted => self.submitted,
            AssignmentStatus::Graded => self.graded,
        }
    }
}

pub fn status_counts<'a, I>(assignments: I) -> StatusCounts
where
    I: IntoIterator<Item = &'a Assignment>,
{
    let mut counts = StatusCounts::default();
    for assignment in assignments {
        match assignment.status {
            AssignmentStatus::Pending => counts.pending += 1,
            AssignmentStatus::Submitted => counts.submitted += 1,
            AssignmentStatus::Graded => counts.graded += 1,
        }
    }
    counts
}

/// Symptom entry counts per severity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SeverityCounts {
    pub mild: usize,
    pub moderate: usize,
    pub severe: usize,
}

pub fn severity_counts<'a, I>(entries: I) -> SeverityCounts
where
    I: IntoIterator<Item = &'a SymptomEntry>,
{
    let mut counts = SeverityCounts::default();
    for entry in entries {
        match entry.severity {
            Severity::Mild => counts.mild += 1,
            Severity::Moderate => counts.moderate += 1,
            Severity::Severe => counts.severe += 1,
        }
    }
    counts
}

/// How often a label occurs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Frequency {
    pub label: String,
    pub count: usize,
}

/// Occurrence counts, most frequent first; ties keep first-seen order.
pub fn frequencies<'a, I>(labels: I) -> Vec<Frequency>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut result: Vec<Frequency> = Vec::new();

    for label in labels {
        match index.get(label).copied() {
            Some(i) => result[i].count += 1,
            None => {
                index.insert(label, result.len());
                result.push(Frequency {
                    label: label.to_string(),
                    count: 1,
                });
            }
        }
    }

    // sort_by is stable, so equal counts stay in first-seen order
    result.sort_by(|a, b| b.count.cmp(&a.count));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, CourseLevel};
    use chrono::Utc;

    #[test]
    fn test_aggregate_empty() {
        let empty: Vec<(f64, f64)> = Vec::new();
        let result = aggregate(empty, |r| r.0, |r| r.1);
        assert_eq!(result.average, 0.0);
        assert!(!result.average.is_nan());
        assert_eq!(result.total_score, 0.0);
        assert_eq!(result.total_max, 0.0);
        assert_eq!(result.count, 0);
        assert_eq!(result.overall_percentage(), 0.0);
    }

    #[test]
    fn test_aggregate_mean_of_percentages() {
        let scores = [(88.0, 100.0), (45.0, 50.0), (0.0, 0.0)];
        let result = aggregate(scores.iter(), |r| r.0, |r| r.1);

        // (88 + 90 + 0) / 3
        assert!((result.average - 178.0 / 3.0).abs() < 1e-9);
        assert_eq!(result.total_score, 133.0);
        assert_eq!(result.total_max, 150.0);
        assert_eq!(result.count, 3);
    }

    #[test]
    fn test_status_counts() {
        let course = Course::new("1", "Physics", CourseLevel::Beginner);
        let mut a = Assignment::new("Lab", &course, Utc::now(), 100.0);
        let mut b = a.clone();
        let c = a.clone();
        a.status = AssignmentStatus::Graded;
        b.status = AssignmentStatus::Submitted;

        let counts = status_counts(&[a, b, c]);
        assert_eq!(counts.pending, 1);
        assert_eq!(counts.submitted, 1);
        assert_eq!(counts.graded, 1);
        assert_eq!(counts.get(AssignmentStatus::Pending), 1);
    }

    #[test]
    fn test_frequencies_order() {
        let labels = ["Cough", "Wheezing", "Fatigue", "Wheezing", "Cough", "Wheezing"];
        let result = frequencies(labels);

        assert_eq!(
            result,
            vec![
                Frequency { label: "Wheezing".into(), count: 3 },
                Frequency { label: "Cough".into(), count: 2 },
                Frequency { label: "Fatigue".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_frequencies_tie_keeps_first_seen() {
        let result = frequencies(["Smoke", "Exercise", "Cold air"]);
        let order: Vec<&str> = result.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(order, vec!["Smoke", "Exercise", "Cold air"]);
    }
}
