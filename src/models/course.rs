//! Course model.
//!
//! A course is keyed by `code` within its semester and owns an ordered
//! sequence of lectures. Lectures are held behind `Arc` so that a new
//! course version can share every untouched lecture with the old one.
//!
//! Fields other than `code`, `name`, and `lectures` are collected into
//! `attributes` and written back out unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

use super::{Lecture, LectureKey};

/// A course within a semester.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Course code, unique within the owning semester.
    pub code: String,
    /// Human-readable title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Weekly sessions, most recently touched first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lectures: Vec<Arc<Lecture>>,
    /// Any other fields (section, instructor, credits, ...), kept verbatim.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Course {
    /// Creates a course with no lectures.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: None,
            lectures: Vec::new(),
            attributes: Map::new(),
        }
    }

    /// Sets the course title.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Appends a lecture.
    pub fn with_lecture(mut self, lecture: Lecture) -> Self {
        self.lectures.push(Arc::new(lecture));
        self
    }

    /// Adds a domain-specific attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Looks up a domain-specific attribute.
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Finds the lecture at `(day, start_time)`.
    pub fn lecture(&self, day: u8, start_time: u32) -> Option<&Lecture> {
        self.lectures
            .iter()
            .map(Arc::as_ref)
            .find(|l| l.is_at(day, start_time))
    }

    /// Lecture keys in sequence order.
    pub fn lecture_keys(&self) -> Vec<LectureKey> {
        self.lectures.iter().map(|l| l.key()).collect()
    }

    /// Number of lectures.
    pub fn lecture_count(&self) -> usize {
        self.lectures.len()
    }

    /// Sum of lecture durations over one week (minutes).
    pub fn total_weekly_minutes(&self) -> u32 {
        self.lectures.iter().map(|l| l.duration_minutes()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_builder() {
        let c = Course::new("CSI2110")
            .with_name("Data Structures")
            .with_attribute("section", "A")
            .with_lecture(Lecture::new(1, 600, 680))
            .with_lecture(Lecture::new(3, 600, 680));

        assert_eq!(c.code, "CSI2110");
        assert_eq!(c.name.as_deref(), Some("Data Structures"));
        assert_eq!(c.attribute("section"), Some(&Value::from("A")));
        assert_eq!(c.lecture_count(), 2);
        assert_eq!(c.lecture_keys(), vec![(1, 600), (3, 600)]);
        assert_eq!(c.total_weekly_minutes(), 160);
    }

    #[test]
    fn test_course_lecture_lookup() {
        let c = Course::new("MAT1341").with_lecture(Lecture::new(2, 270, 350));
        assert_eq!(c.lecture(2, 270).and_then(|l| l.end_time), Some(350));
        assert!(c.lecture(2, 0).is_none());
    }

    #[test]
    fn test_course_minimal_json() {
        let c: Course = serde_json::from_str(r#"{"code":"c1"}"#).unwrap();
        assert_eq!(c, Course::new("c1"));
        assert_eq!(
            serde_json::to_value(&c).unwrap(),
            serde_json::json!({"code": "c1"})
        );
    }

    #[test]
    fn test_course_json_keeps_unknown_fields() {
        let json = serde_json::json!({
            "code": "c1",
            "lectures": [{"day": 1, "startTime": 0}],
            "section": "A",
            "instructor": "Roque",
            "credits": 3,
            "attributes": {"credits": 3},
        });
        let c: Course = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(c.attribute("credits"), Some(&Value::from(3)));
        assert_eq!(c.lecture(1, 0).and_then(|l| l.end_time), None);
        assert_eq!(serde_json::to_value(&c).unwrap(), json);
    }
}
