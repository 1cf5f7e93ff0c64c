//! Command vocabulary.
//!
//! Hosts dispatch one of five commands into the processor. On the wire a
//! command is a JSON object tagged by `"type"` with camelCase fields:
//!
//! ```
//! use u_timetable::ScheduleCommand;
//!
//! let cmd = ScheduleCommand::from_json(
//!     r#"{"type":"REMOVE_COURSE","semester":"s1","courseCode":"c2"}"#,
//! ).unwrap();
//! assert_eq!(cmd, ScheduleCommand::remove_course("s1", "c2"));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Course, Lecture, Semester};

/// An update command for the schedule tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum ScheduleCommand {
    /// Insert or replace a whole semester.
    AddSemester {
        /// The semester, carrying its own id.
        semester: Semester,
    },
    /// Upsert a course and promote it to the front.
    AddCourse {
        /// Target semester id.
        semester: String,
        /// The course.
        course: Course,
    },
    /// Remove a course by code.
    RemoveCourse {
        /// Target semester id.
        semester: String,
        /// Code of the course to remove.
        course_code: String,
    },
    /// Upsert a lecture and promote it to the front of its course.
    AddLecture {
        /// Target semester id.
        semester: String,
        /// Target course code.
        course_code: String,
        /// The lecture.
        lecture: Lecture,
    },
    /// Remove a lecture by `(day, start_time)`.
    RemoveLecture {
        /// Target semester id.
        semester: String,
        /// Target course code.
        course_code: String,
        /// Lecture day.
        day: u8,
        /// Lecture start time.
        start_time: u32,
    },
}

/// A command payload that could not be decoded.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Unknown tag, missing field, or wrong field type.
    #[error("malformed command: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ScheduleCommand {
    /// Creates an ADD_SEMESTER command.
    pub fn add_semester(semester: Semester) -> Self {
        Self::AddSemester { semester }
    }

    /// Creates an ADD_COURSE command.
    pub fn add_course(semester: impl Into<String>, course: Course) -> Self {
        Self::AddCourse {
            semester: semester.into(),
            course,
        }
    }

    /// Creates a REMOVE_COURSE command.
    pub fn remove_course(semester: impl Into<String>, course_code: impl Into<String>) -> Self {
        Self::RemoveCourse {
            semester: semester.into(),
            course_code: course_code.into(),
        }
    }

    /// Creates an ADD_LECTURE command.
    pub fn add_lecture(
        semester: impl Into<String>,
        course_code: impl Into<String>,
        lecture: Lecture,
    ) -> Self {
        Self::AddLecture {
            semester: semester.into(),
            course_code: course_code.into(),
            lecture,
        }
    }

    /// Creates a REMOVE_LECTURE command.
    pub fn remove_lecture(
        semester: impl Into<String>,
        course_code: impl Into<String>,
        day: u8,
        start_time: u32,
    ) -> Self {
        Self::RemoveLecture {
            semester: semester.into(),
            course_code: course_code.into(),
            day,
            start_time,
        }
    }

    /// Decodes a command from its JSON wire shape.
    pub fn from_json(json: &str) -> Result<Self, CommandError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Wire tag (e.g. `"ADD_COURSE"`).
    pub fn tag(&self) -> &'static str {
        match self {
            Self::AddSemester { .. } => "ADD_SEMESTER",
            Self::AddCourse { .. } => "ADD_COURSE",
            Self::RemoveCourse { .. } => "REMOVE_COURSE",
            Self::AddLecture { .. } => "ADD_LECTURE",
            Self::RemoveLecture { .. } => "REMOVE_LECTURE",
        }
    }

    /// Id of the semester this command targets.
    pub fn semester_id(&self) -> &str {
        match self {
            Self::AddSemester { semester } => &semester.id,
            Self::AddCourse { semester, .. }
            | Self::RemoveCourse { semester, .. }
            | Self::AddLecture { semester, .. }
            | Self::RemoveLecture { semester, .. } => semester,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_every_tag() {
        let cases = [
            (
                r#"{"type":"ADD_SEMESTER","semester":{"id":"s1","courses":[]}}"#,
                ScheduleCommand::add_semester(Semester::new("s1")),
            ),
            (
                r#"{"type":"ADD_COURSE","semester":"s1","course":{"code":"c1"}}"#,
                ScheduleCommand::add_course("s1", Course::new("c1")),
            ),
            (
                r#"{"type":"REMOVE_COURSE","semester":"s1","courseCode":"c1"}"#,
                ScheduleCommand::remove_course("s1", "c1"),
            ),
            (
                r#"{"type":"ADD_LECTURE","semester":"s1","courseCode":"c1",
                    "lecture":{"day":1,"startTime":0,"endTime":80}}"#,
                ScheduleCommand::add_lecture("s1", "c1", Lecture::new(1, 0, 80)),
            ),
            (
                r#"{"type":"REMOVE_LECTURE","semester":"s1","courseCode":"c1",
                    "day":2,"startTime":270}"#,
                ScheduleCommand::remove_lecture("s1", "c1", 2, 270),
            ),
        ];

        for (json, expected) in cases {
            let cmd = ScheduleCommand::from_json(json).unwrap();
            assert_eq!(cmd, expected, "decoding {json}");
            assert_eq!(cmd.semester_id(), "s1");
        }
    }

    #[test]
    fn test_encode_uses_wire_tag() {
        let cmd = ScheduleCommand::remove_lecture("s1", "c1", 2, 270);
        let json = serde_json::to_value(&cmd).unwrap();
        assert_eq!(json["type"], cmd.tag());
        assert_eq!(json["courseCode"], "c1");
        assert_eq!(json["startTime"], 270);
    }

    #[test]
    fn test_missing_field_is_decode_error() {
        let err = ScheduleCommand::from_json(r#"{"type":"REMOVE_COURSE","semester":"s1"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("courseCode"));
    }

    #[test]
    fn test_unknown_tag_is_decode_error() {
        assert!(ScheduleCommand::from_json(r#"{"type":"RENAME_SEMESTER","semester":"s1"}"#)
            .is_err());
    }
}
