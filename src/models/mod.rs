//! Timetable domain models.
//!
//! The state is a three-level tree. Every node below the root is held
//! behind `Arc`, so versions of the tree share unchanged branches.
//!
//! # Hierarchy
//!
//! | Level | Type | Key (unique within parent) |
//! |-------|------|----------------------------|
//! | Root | `ScheduleState` | — |
//! | 1 | `Semester` | `id` |
//! | 2 | `Course` | `code` |
//! | 3 | `Lecture` | `(day, start_time)` |

mod course;
mod lecture;
mod semester;
mod state;

pub use course::Course;
pub use lecture::{Lecture, LectureFormat, LectureKey};
pub use semester::{Semester, SemesterName};
pub use state::{AppState, ScheduleState};
