//! Well-known store keys.
//!
//! Key names match the entries the dashboard and tracker already write, so
//! existing local data is picked up unchanged.

/// Enrolled courses (`Vec<Course>`).
pub const ENROLLED_COURSES: &str = "enrolledCourses";
/// Assignments (`Vec<Assignment>`).
pub const ASSIGNMENTS: &str = "assignments";
/// Grades (`Vec<Grade>`).
pub const GRADES: &str = "grades";
/// Medications (`Vec<Medication>`).
pub const MEDICATIONS: &str = "medications";
/// Symptom log, newest first (`Vec<SymptomEntry>`).
pub const SYMPTOMS: &str = "symptoms";
/// Peak-flow readings, newest first (`Vec<PeakFlowReading>`).
pub const PEAK_FLOW: &str = "peakflow";
/// Personal-best peak flow (`u32`).
pub const PERSONAL_BEST: &str = "personalBest";

/// Personal best used until the user records one.
pub const DEFAULT_PERSONAL_BEST: u32 = 500;
