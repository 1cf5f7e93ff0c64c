//! Schedule state (root of the tree).
//!
//! `ScheduleState` maps semester identifiers to semesters. Every level of
//! the tree is reference-counted, so a transition rebuilds only the path
//! from the root to the branch it touches and shares everything else.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use super::Semester;

/// Immutable schedule state: semester id → semester.
///
/// Map order carries no meaning; lookups are always by id.
/// Cloning is O(1).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduleState {
    semesters: Arc<HashMap<String, Arc<Semester>>>,
}

/// Host-facing root shape: `{ "schedule": { ... } }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    /// The schedule tree.
    #[serde(default)]
    pub schedule: ScheduleState,
}

impl ScheduleState {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds a semester by id.
    pub fn semester(&self, id: &str) -> Option<&Semester> {
        self.semesters.get(id).map(Arc::as_ref)
    }

    /// Shared handle to a semester, for callers that keep it past this state.
    pub fn semester_arc(&self, id: &str) -> Option<&Arc<Semester>> {
        self.semesters.get(id)
    }

    /// Whether a semester with `id` exists.
    pub fn contains(&self, id: &str) -> bool {
        self.semesters.contains_key(id)
    }

    /// Iterates over `(id, semester)` pairs in arbitrary order.
    pub fn semesters(&self) -> impl Iterator<Item = (&str, &Semester)> {
        self.semesters
            .iter()
            .map(|(id, s)| (id.as_str(), s.as_ref()))
    }

    /// Number of semesters.
    pub fn len(&self) -> usize {
        self.semesters.len()
    }

    /// Whether there are no semesters.
    pub fn is_empty(&self) -> bool {
        self.semesters.is_empty()
    }

    /// Whether both values are the same tree (not merely equal).
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.semesters, &other.semesters)
    }

    /// New root with `semester` stored at `id`. Other entries are shared.
    pub(crate) fn with_semester(&self, id: String, semester: Arc<Semester>) -> Self {
        let mut semesters = HashMap::clone(&self.semesters);
        semesters.insert(id, semester);
        Self {
            semesters: Arc::new(semesters),
        }
    }
}

impl FromIterator<Semester> for ScheduleState {
    /// Builds a state keyed by each semester's own id. Later duplicates win.
    fn from_iter<I: IntoIterator<Item = Semester>>(iter: I) -> Self {
        let semesters = iter
            .into_iter()
            .map(|s| (s.id.clone(), Arc::new(s)))
            .collect();
        Self {
            semesters: Arc::new(semesters),
        }
    }
}

impl AppState {
    /// Wraps an existing schedule.
    pub fn new(schedule: ScheduleState) -> Self {
        Self { schedule }
    }
}
