//! Lecture (session) model.
//!
//! A lecture is a single weekly meeting of a course. It is keyed by
//! `(day, start_time)` within its course; the remaining fields are
//! payload the processor carries through untouched, including any
//! fields this crate does not know about.
//!
//! # Time Model
//! `day` is 0-indexed from Monday (0 = Monday, 6 = Sunday).
//! `start_time` and `end_time` are minutes since midnight.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Composite lecture key: `(day, start_time)`.
pub type LectureKey = (u8, u32);

/// A scheduled weekly session of a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lecture {
    /// Day of week (0 = Monday).
    pub day: u8,
    /// Start time (minutes since midnight, inclusive).
    pub start_time: u32,
    /// End time (minutes since midnight, exclusive). `None` = open-ended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<u32>,
    /// Teaching format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<LectureFormat>,
    /// Any other fields (room, instructor, ...), kept verbatim.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// Teaching format of a lecture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LectureFormat {
    /// Regular lecture.
    Lecture,
    /// Laboratory session.
    Lab,
    /// Tutorial / discussion group.
    Tutorial,
    /// Seminar.
    Seminar,
    /// Domain-specific format.
    Custom(String),
}

impl Lecture {
    /// Creates a lecture spanning `[start_time, end_time)`.
    pub fn new(day: u8, start_time: u32, end_time: u32) -> Self {
        Self::at(day, start_time).with_end(end_time)
    }

    /// Creates a lecture with only its key set.
    pub fn at(day: u8, start_time: u32) -> Self {
        Self {
            day,
            start_time,
            end_time: None,
            format: None,
            attributes: Map::new(),
        }
    }

    /// Sets the end time.
    pub fn with_end(mut self, end_time: u32) -> Self {
        self.end_time = Some(end_time);
        self
    }

    /// Sets the teaching format.
    pub fn with_format(mut self, format: LectureFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Adds a domain-specific attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// The `(day, start_time)` key.
    #[inline]
    pub fn key(&self) -> LectureKey {
        (self.day, self.start_time)
    }

    /// Whether this lecture is keyed at `(day, start_time)`.
    #[inline]
    pub fn is_at(&self, day: u8, start_time: u32) -> bool {
        self.day == day && self.start_time == start_time
    }

    /// Length in minutes. Zero for open-ended or inverted intervals.
    #[inline]
    pub fn duration_minutes(&self) -> u32 {
        self.end_time
            .map_or(0, |end| end.saturating_sub(self.start_time))
    }

    /// Whether two lectures share a day and their [start, end) intervals intersect.
    ///
    /// Open-ended lectures never overlap anything.
    pub fn overlaps(&self, other: &Self) -> bool {
        match (self.end_time, other.end_time) {
            (Some(self_end), Some(other_end)) => {
                self.day == other.day
                    && self.start_time < other_end
                    && other.start_time < self_end
            }
            _ => false,
        }
    }
}
