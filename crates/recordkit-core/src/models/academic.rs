//! Academic dashboard records: courses, assignments and grades.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;
use super::validation::{check_amount, check_id, Record, ValidationError};

/// Course difficulty level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl CourseLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseLevel::Beginner => "Beginner",
            CourseLevel::Intermediate => "Intermediate",
            CourseLevel::Advanced => "Advanced",
        }
    }
}

/// A course the student is enrolled in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Unique course ID
    pub id: String,
    /// Display title
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub instructor: String,
    /// Free-form duration (e.g., "16 weeks")
    #[serde(default)]
    pub duration: String,
    /// Difficulty level
    pub level: CourseLevel,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub enrolled_students: u32,
    /// Average rating (0-5)
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub thumbnail: String,
    /// Completion percentage; absent for catalog entries not yet enrolled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
}

impl Course {
    /// Create a course with required fields.
    pub fn new(id: impl Into<String>, title: impl Into<String>, level: CourseLevel) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            instructor: String::new(),
            duration: String::new(),
            level,
            category: String::new(),
            enrolled_students: 0,
            rating: 0.0,
            thumbnail: String::new(),
            progress: None,
        }
    }
}

impl Record for Course {
    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        check_id(&self.id)?;
        check_amount(&self.id, "rating", self.rating)?;
        if let Some(progress) = self.progress {
            check_amount(&self.id, "progress", progress)?;
        }
        Ok(())
    }
}

/// Assignment workflow status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStatus {
    /// Not yet handed in
    Pending,
    /// Handed in, awaiting a grade
    Submitted,
    /// Grade recorded
    Graded,
}

impl AssignmentStatus {
    pub const ALL: [AssignmentStatus; 3] = [
        AssignmentStatus::Pending,
        AssignmentStatus::Submitted,
        AssignmentStatus::Graded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentStatus::Pending => "pending",
            AssignmentStatus::Submitted => "submitted",
            AssignmentStatus::Graded => "graded",
        }
    }
}

/// A piece of coursework with a due date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// Unique assignment ID
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Parent course ID
    pub course_id: String,
    /// Parent course title, copied at creation
    pub course_name: String,
    #[serde(with = "timestamp")]
    pub due_date: DateTime<Utc>,
    pub status: AssignmentStatus,
    /// Score, present once graded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<f64>,
    pub max_grade: f64,
    #[serde(
        default,
        with = "timestamp::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub submission_date: Option<DateTime<Utc>>,
}

impl Assignment {
    /// Create a pending assignment for a course.
    pub fn new(
        title: impl Into<String>,
        course: &Course,
        due_date: DateTime<Utc>,
        max_grade: f64,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            description: String::new(),
            course_id: course.id.clone(),
            course_name: course.title.clone(),
            due_date,
            status: AssignmentStatus::Pending,
            grade: None,
            max_grade,
            submission_date: None,
        }
    }

    /// Check if the assignment still needs to be handed in.
    pub fn is_pending(&self) -> bool {
        self.status == AssignmentStatus::Pending
    }
}

impl Record for Assignment {
    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        check_id(&self.id)?;
        check_amount(&self.id, "maxGrade", self.max_grade)?;
        if let Some(grade) = self.grade {
            check_amount(&self.id, "grade", grade)?;
        }
        Ok(())
    }
}

/// A recorded score for one piece of coursework.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    /// Unique grade ID
    pub id: String,
    #[serde(default)]
    pub student_id: String,
    /// Parent course ID
    pub course_id: String,
    /// Parent course title, copied at creation
    pub course_name: String,
    pub assignment_title: String,
    /// Points earned
    pub grade: f64,
    /// Points possible
    pub max_grade: f64,
    #[serde(with = "timestamp")]
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

impl Grade {
    /// Create a grade for a course.
    pub fn new(
        course: &Course,
        assignment_title: impl Into<String>,
        grade: f64,
        max_grade: f64,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            student_id: String::new(),
            course_id: course.id.clone(),
            course_name: course.title.clone(),
            assignment_title: assignment_title.into(),
            grade,
            max_grade,
            date,
            feedback: None,
        }
    }
}

impl Record for Grade {
    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        check_id(&self.id)?;
        check_amount(&self.id, "grade", self.grade)?;
        check_amount(&self.id, "maxGrade", self.max_grade)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn course() -> Course {
        Course::new("1", "Advanced Mathematics", CourseLevel::Advanced)
    }

    #[test]
    fn test_new_assignment_copies_course_name() {
        let due = Utc.with_ymd_and_hms(2025, 1, 20, 23, 59, 0).unwrap();
        let assignment = Assignment::new("Quiz 5", &course(), due, 100.0);

        assert_eq!(assignment.course_id, "1");
        assert_eq!(assignment.course_name, "Advanced Mathematics");
        assert!(assignment.is_pending());
        assert_eq!(assignment.id.len(), 36); // UUID format
    }

    #[test]
    fn test_grade_wire_format() {
        let json = r#"{
            "id": "1",
            "studentId": "student1",
            "courseId": "1",
            "courseName": "Advanced Mathematics",
            "assignmentTitle": "Quiz Chapter 4",
            "grade": 88,
            "maxGrade": 100,
            "date": "2025-01-10",
            "feedback": "Good understanding of polynomial functions."
        }"#;

        let grade: Grade = serde_json::from_str(json).unwrap();
        assert_eq!(grade.grade, 88.0);
        assert_eq!(grade.date, Utc.with_ymd_and_hms(2025, 1, 10, 0, 0, 0).unwrap());

        let encoded = serde_json::to_value(&grade).unwrap();
        assert_eq!(encoded["assignmentTitle"], "Quiz Chapter 4");
        assert_eq!(encoded["date"], "2025-01-10T00:00:00Z");
    }

    #[test]
    fn test_assignment_optional_fields_missing() {
        let json = r#"{
            "id": "1",
            "title": "Math Quiz Chapter 5",
            "courseId": "1",
            "courseName": "Advanced Mathematics",
            "dueDate": "2025-01-20T23:59:00",
            "status": "pending",
            "maxGrade": 100
        }"#;

        let assignment: Assignment = serde_json::from_str(json).unwrap();
        assert_eq!(assignment.description, "");
        assert_eq!(assignment.grade, None);
        assert_eq!(assignment.submission_date, None);

        let encoded = serde_json::to_value(&assignment).unwrap();
        assert!(encoded.get("grade").is_none());
    }

    #[test]
    fn test_unknown_status_rejected() {
        let json = r#"{
            "id": "1", "title": "t", "courseId": "1", "courseName": "c",
            "dueDate": "2025-01-20", "status": "late", "maxGrade": 100
        }"#;
        assert!(serde_json::from_str::<Assignment>(json).is_err());
    }

    #[test]
    fn test_grade_validation() {
        let mut grade = Grade::new(&course(), "Quiz", 88.0, 100.0, Utc::now());
        assert!(grade.validate().is_ok());

        grade.max_grade = -5.0;
        assert!(matches!(
            grade.validate(),
            Err(ValidationError::Negative { field: "maxGrade", .. })
        ));
    }

    #[test]
    fn test_course_level_wire_format() {
        assert_eq!(
            serde_json::to_string(&CourseLevel::Intermediate).unwrap(),
            "\"Intermediate\""
        );
        assert!(serde_json::from_str::<CourseLevel>("\"intermediate\"").is_err());
    }
}
