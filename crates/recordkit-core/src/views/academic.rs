//! Academic dashboard views.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::metrics::{self, Aggregate, DueUrgency, GradeBand, LetterGrade};
use crate::models::{Assignment, AssignmentStatus, Course, Grade};
use crate::query;

/// Course selector for the grades view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseFilter {
    All,
    Course(String),
}

/// Status selector for the assignments view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Only(AssignmentStatus),
}

/// Summary cards for a set of grades.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GradeSummary {
    pub aggregate: Aggregate,
    pub letter: LetterGrade,
    pub band: GradeBand,
}

pub fn grades_for<'a>(grades: &'a [Grade], course: &CourseFilter) -> Vec<&'a Grade> {
    match course {
        CourseFilter::All => grades.iter().collect(),
        CourseFilter::Course(id) => query::filter(grades, |g| g.course_id == *id),
    }
}

pub fn grade_summary<'a, I>(grades: I) -> GradeSummary
where
    I: IntoIterator<Item = &'a Grade>,
{
    let aggregate = metrics::aggregate(grades, |g| g.grade, |g| g.max_grade);
    GradeSummary {
        aggregate,
        letter: metrics::letter_grade(aggregate.average),
        band: metrics::grade_band(aggregate.average),
    }
}

/// Percentage, letter and band for a single grade.
pub fn grade_score(grade: &Grade) -> (f64, LetterGrade, GradeBand) {
    let pct = metrics::percentage(grade.grade, grade.max_grade);
    (pct, metrics::letter_grade(pct), metrics::grade_band(pct))
}

/// Most recent first; equal dates keep stored order.
pub fn grades_newest_first<'a, I>(grades: I) -> Vec<&'a Grade>
where
    I: IntoIterator<Item = &'a Grade>,
{
    query::sort(grades, |a, b| b.date.cmp(&a.date))
}

/// Distinct course names referenced by grades, in first-seen order.
pub fn course_names(grades: &[Grade]) -> Vec<&str> {
    query::distinct_by(grades, |g| g.course_name.as_str())
}

pub fn assignments_for(assignments: &[Assignment], status: StatusFilter) -> Vec<&Assignment> {
    match status {
        StatusFilter::All => assignments.iter().collect(),
        StatusFilter::Only(wanted) => query::filter(assignments, |a| a.status == wanted),
    }
}

/// Score percentage for a graded assignment with a recorded score.
pub fn assignment_score(assignment: &Assignment) -> Option<f64> {
    match (assignment.status, assignment.grade) {
        (AssignmentStatus::Graded, Some(grade)) => {
            Some(metrics::percentage(grade, assignment.max_grade))
        }
        _ => None,
    }
}

pub fn assignment_urgency(assignment: &Assignment, now: DateTime<Utc>) -> DueUrgency {
    metrics::due_urgency(assignment.due_date, assignment.status, now)
}

/// Pending assignments due within the due-soon window, soonest first.
pub fn upcoming(assignments: &[Assignment], now: DateTime<Utc>) -> Vec<&Assignment> {
    let due_soon = query::filter(assignments, |a| assignment_urgency(a, now).due_soon);
    query::sort(due_soon, |a, b| a.due_date.cmp(&b.due_date))
}

/// Enrolled courses with `course` appended at zero progress.
///
/// Already-enrolled ids are left unchanged.
pub fn with_enrolled(courses: &[Course], course: &Course) -> Vec<Course> {
    let mut next = courses.to_vec();
    if !courses.iter().any(|c| c.id == course.id) {
        next.push(Course {
            progress: Some(0.0),
            ..course.clone()
        });
    }
    next
}

/// Catalog entries not yet enrolled.
pub fn available_courses<'a>(catalog: &'a [Course], enrolled: &[Course]) -> Vec<&'a Course> {
    query::filter(catalog, |c| !enrolled.iter().any(|e| e.id == c.id))
}
