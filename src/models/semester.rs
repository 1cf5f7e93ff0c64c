//! Semester model.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::Course;

/// A scheduling period holding an ordered sequence of courses.
///
/// The course sequence is significant: the processor surfaces new and
/// updated courses at the front.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Semester {
    /// Unique semester identifier (e.g. `"2024-fall"`).
    pub id: String,
    /// Display name. Never read by the processor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<SemesterName>,
    /// Courses, most recently touched first.
    #[serde(default)]
    pub courses: Vec<Arc<Course>>,
}

/// Semester display name: a single name or one name per locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SemesterName {
    /// Locale-independent name.
    Single(String),
    /// English and French names.
    Localized {
        /// English name.
        en: String,
        /// French name.
        fr: String,
    },
}

impl SemesterName {
    /// Name for `locale` (`"fr"` or anything else for English).
    ///
    /// A single name is returned for every locale.
    pub fn display(&self, locale: &str) -> &str {
        match self {
            Self::Single(name) => name,
            Self::Localized { fr, .. } if locale.starts_with("fr") => fr,
            Self::Localized { en, .. } => en,
        }
    }
}

impl Semester {
    /// Creates an empty semester.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            courses: Vec::new(),
        }
    }

    /// Sets a single display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(SemesterName::Single(name.into()));
        self
    }

    /// Sets per-locale display names.
    pub fn with_localized_name(mut self, en: impl Into<String>, fr: impl Into<String>) -> Self {
        self.name = Some(SemesterName::Localized {
            en: en.into(),
            fr: fr.into(),
        });
        self
    }

    /// Appends a course.
    pub fn with_course(mut self, course: Course) -> Self {
        self.courses.push(Arc::new(course));
        self
    }

    /// Display name for `locale`, if the semester has one.
    pub fn display_name(&self, locale: &str) -> Option<&str> {
        self.name.as_ref().map(|n| n.display(locale))
    }

    /// Finds a course by code.
    pub fn course(&self, code: &str) -> Option<&Course> {
        self.courses
            .iter()
            .map(Arc::as_ref)
            .find(|c| c.code == code)
    }

    /// Course codes in sequence order.
    pub fn course_codes(&self) -> Vec<&str> {
        self.courses.iter().map(|c| c.code.as_str()).collect()
    }

    /// Number of courses.
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }
}
