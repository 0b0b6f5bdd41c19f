//! Due-date urgency.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::AssignmentStatus;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Days inside which a pending assignment counts as due soon.
pub const DUE_SOON_DAYS: i64 = 2;

/// Urgency flags for one assignment at a given instant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DueUrgency {
    /// Whole days until due, rounded up; negative once past due
    pub days_until_due: i64,
    pub overdue: bool,
    pub due_soon: bool,
}

/// Compute urgency against an explicit `now`.
pub fn due_urgency(
    due_date: DateTime<Utc>,
    status: AssignmentStatus,
    now: DateTime<Utc>,
) -> DueUrgency {
    let days_until_due = ceil_days((due_date - now).num_milliseconds());
    let pending = match status {
        AssignmentStatus::Pending => true,
        AssignmentStatus::Submitted | AssignmentStatus::Graded => false,
    };

    DueUrgency {
        days_until_due,
        overdue: pending && days_until_due < 0,
        due_soon: pending && (0..=DUE_SOON_DAYS).contains(&days_until_due),
    }
}

fn ceil_days(millis: i64) -> i64 {
    let days = millis.div_euclid(MILLIS_PER_DAY);
    if millis.rem_euclid(MILLIS_PER_DAY) == 0 {
        days
    } else {
        days + 1
    }
}
