//! Structural validation of schedule trees and command payloads.
//!
//! The processor keeps its uniqueness invariants for every command except
//! ADD_SEMESTER, which installs the supplied semester verbatim. Hosts that
//! receive semesters from outside (initial load, imports) validate them
//! here first. Detects:
//! - Semester map keys that differ from the stored semester's id
//! - Empty identifiers
//! - Duplicate course codes within a semester
//! - Duplicate `(day, start_time)` keys within a course
//! - Lectures with an out-of-range day or, when an end is given, a
//!   non-positive duration

use crate::command::ScheduleCommand;
use crate::models::{Course, Lecture, ScheduleState, Semester};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// Highest valid `Lecture::day` (Sunday).
pub const MAX_DAY: u8 = 6;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two siblings share the same key.
    DuplicateKey,
    /// A semester is stored under a key other than its own id.
    KeyMismatch,
    /// A semester id or course code is empty.
    EmptyId,
    /// A lecture ends at or before it starts.
    InvalidInterval,
    /// A lecture day is outside `0..=MAX_DAY`.
    InvalidDay,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

/// Validates a whole state tree.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_state(state: &ScheduleState) -> ValidationResult {
    let mut errors = Vec::new();
    for (key, semester) in state.semesters() {
        if key != semester.id {
            errors.push(ValidationError::new(
                ValidationErrorKind::KeyMismatch,
                format!("Semester '{}' stored under key '{key}'", semester.id),
            ));
        }
        check_semester(semester, &mut errors);
    }
    finish(errors)
}

/// Validates the payload a command would install.
///
/// Remove commands carry no payload and always pass.
pub fn validate_command(command: &ScheduleCommand) -> ValidationResult {
    let mut errors = Vec::new();
    match command {
        ScheduleCommand::AddSemester { semester } => check_semester(semester, &mut errors),
        ScheduleCommand::AddCourse { course, .. } => check_course(course, &mut errors),
        ScheduleCommand::AddLecture {
            course_code,
            lecture,
            ..
        } => check_lecture(course_code, lecture, &mut errors),
        ScheduleCommand::RemoveCourse { .. } | ScheduleCommand::RemoveLecture { .. } => {}
    }
    finish(errors)
}

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_semester(semester: &Semester, errors: &mut Vec<ValidationError>) {
    if semester.id.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyId,
            "Semester has an empty id",
        ));
    }

    let mut codes = HashSet::new();
    for course in &semester.courses {
        if !codes.insert(course.code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateKey,
                format!(
                    "Duplicate course code '{}' in semester '{}'",
                    course.code, semester.id
                ),
            ));
        }
        check_course(course, errors);
    }
}

fn check_course(course: &Course, errors: &mut Vec<ValidationError>) {
    if course.code.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyId,
            "Course has an empty code",
        ));
    }

    let mut keys = HashSet::new();
    for lecture in &course.lectures {
        if !keys.insert(lecture.key()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateKey,
                format!(
                    "Duplicate lecture (day {}, start {}) in course '{}'",
                    lecture.day, lecture.start_time, course.code
                ),
            ));
        }
        check_lecture(&course.code, lecture, errors);
    }
}

fn check_lecture(course_code: &str, lecture: &Lecture, errors: &mut Vec<ValidationError>) {
    if lecture.day > MAX_DAY {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidDay,
            format!("Lecture in '{course_code}' has day {}", lecture.day),
        ));
    }
    if let Some(end_time) = lecture.end_time {
        if end_time <= lecture.start_time {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidInterval,
                format!(
                    "Lecture in '{course_code}' ends at {end_time} but starts at {}",
                    lecture.start_time
                ),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(result: ValidationResult) -> Vec<ValidationErrorKind> {
        result
            .unwrap_err()
            .into_iter()
            .map(|e| e.kind)
            .collect()
    }

    fn valid_semester() -> Semester {
        Semester::new("s1")
            .with_course(
                Course::new("c1")
                    .with_lecture(Lecture::new(0, 510, 590))
                    .with_lecture(Lecture::new(2, 510, 590)),
            )
            .with_course(Course::new("c2"))
    }

    #[test]
    fn test_valid_state() {
        let state: ScheduleState = [valid_semester(), Semester::new("s2")].into_iter().collect();
        assert!(validate_state(&state).is_ok());
        assert!(validate_state(&ScheduleState::new()).is_ok());
    }

    #[test]
    fn test_duplicate_course_code() {
        let s = valid_semester().with_course(Course::new("c1"));
        let cmd = ScheduleCommand::add_semester(s);
        assert_eq!(kinds(validate_command(&cmd)), vec![ValidationErrorKind::DuplicateKey]);
    }

    #[test]
    fn test_duplicate_lecture_key() {
        let course = Course::new("c1")
            .with_lecture(Lecture::new(1, 600, 680))
            .with_lecture(Lecture::new(1, 600, 700));
        let cmd = ScheduleCommand::add_course("s1", course);
        let errors = validate_command(&cmd).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateKey);
        assert!(errors[0].message.contains("c1"));
    }

    #[test]
    fn test_bad_lecture() {
        let cmd = ScheduleCommand::add_lecture("s1", "c1", Lecture::new(7, 600, 600));
        assert_eq!(
            kinds(validate_command(&cmd)),
            vec![
                ValidationErrorKind::InvalidDay,
                ValidationErrorKind::InvalidInterval
            ]
        );
    }

    #[test]
    fn test_open_ended_lecture_is_valid() {
        let cmd = ScheduleCommand::add_lecture("s1", "c1", Lecture::at(1, 0));
        assert!(validate_command(&cmd).is_ok());
    }

    #[test]
    fn test_empty_ids() {
        let cmd = ScheduleCommand::add_semester(Semester::new("").with_course(Course::new("")));
        assert_eq!(
            kinds(validate_command(&cmd)),
            vec![ValidationErrorKind::EmptyId, ValidationErrorKind::EmptyId]
        );
    }

    #[test]
    fn test_key_mismatch() {
        let state: ScheduleState =
            serde_json::from_str(r#"{"fall":{"id":"winter","courses":[]}}"#).unwrap();
        assert_eq!(kinds(validate_state(&state)), vec![ValidationErrorKind::KeyMismatch]);
    }

    #[test]
    fn test_remove_commands_always_pass() {
        assert!(validate_command(&ScheduleCommand::remove_course("", "")).is_ok());
        assert!(validate_command(&ScheduleCommand::remove_lecture("s1", "c1", 99, 0)).is_ok());
    }

    #[test]
    fn test_reports_all_errors() {
        let s = Semester::new("s1")
            .with_course(Course::new("c1").with_lecture(Lecture::new(9, 100, 50)))
            .with_course(Course::new("c1"));
        let errors = validate_command(&ScheduleCommand::add_semester(s)).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().all(|e| !e.to_string().is_empty()));
    }
}
