//! Academic timetable state engine for the U-Engine ecosystem.
//!
//! Holds a user's schedule as an immutable tree of semesters, courses, and
//! lectures, and applies update commands to produce new versions of it.
//! Rendering, persistence, and synchronization are left to consumers of
//! the tree.
//!
//! # Modules
//!
//! - **`models`**: Tree types — `ScheduleState`, `Semester`, `Course`, `Lecture`
//! - **`command`**: The five update commands and their JSON wire shape
//! - **`processor`**: `apply(state, command)`, a pure and total transition function
//! - **`validation`**: Uniqueness and interval checks for trees and payloads
//! - **`store`**: `ScheduleStore`, a host-side holder of the current state
//!
//! # Structural Sharing
//!
//! Every node below the root is behind `Arc`. A transition rebuilds only
//! the path from the root to the changed node; all other branches are
//! shared with the previous version, which stays valid and unchanged.

pub mod command;
pub mod models;
pub mod processor;
pub mod store;
pub mod validation;

pub use command::{CommandError, ScheduleCommand};
pub use models::{
    AppState, Course, Lecture, LectureFormat, LectureKey, ScheduleState, Semester, SemesterName,
};
pub use processor::apply;
pub use store::{ScheduleStore, StoreError};
