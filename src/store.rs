//! Host-side holder for the current schedule state.
//!
//! The processor is a pure function; hosts that serialize commands through
//! one current value can use `ScheduleStore` instead of threading the state
//! by hand. The store keeps no history: each dispatch replaces the current
//! value and drops the old one unless a caller still holds a snapshot.

use thiserror::Error;
use tracing::{debug, warn};

use crate::command::{CommandError, ScheduleCommand};
use crate::models::ScheduleState;
use crate::processor::apply;
use crate::validation::{validate_command, ValidationError};

/// Errors from the checked dispatch paths.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The command JSON could not be decoded.
    #[error(transparent)]
    Command(#[from] CommandError),
    /// The command payload would break a structural invariant.
    #[error("{tag} rejected: {} validation error(s)", errors.len())]
    Invalid {
        /// Wire tag of the rejected command.
        tag: &'static str,
        /// Every problem found.
        errors: Vec<ValidationError>,
    },
}

/// Owns the current `ScheduleState` and applies commands to it.
#[derive(Debug, Clone, Default)]
pub struct ScheduleStore {
    state: ScheduleState,
}

impl ScheduleStore {
    /// Creates a store holding the empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store starting from `state`.
    pub fn with_state(state: ScheduleState) -> Self {
        Self { state }
    }

    /// The current state.
    pub fn state(&self) -> &ScheduleState {
        &self.state
    }

    /// Cheap handle to the current state that survives later dispatches.
    pub fn snapshot(&self) -> ScheduleState {
        self.state.clone()
    }

    /// Consumes the store, returning the current state.
    pub fn into_state(self) -> ScheduleState {
        self.state
    }

    /// Applies `command` unconditionally and returns the new state.
    pub fn dispatch(&mut self, command: ScheduleCommand) -> &ScheduleState {
        let tag = command.tag();
        let semester = command.semester_id().to_owned();
        let next = apply(Some(&self.state), command);
        let changed = !next.ptr_eq(&self.state);
        debug!(command = tag, semester = %semester, changed, "dispatch");
        self.state = next;
        &self.state
    }

    /// Validates the command payload, then dispatches it.
    ///
    /// On error the current state is left untouched.
    pub fn try_dispatch(&mut self, command: ScheduleCommand) -> Result<&ScheduleState, StoreError> {
        if let Err(errors) = validate_command(&command) {
            let tag = command.tag();
            warn!(command = tag, errors = errors.len(), "dispatch rejected");
            return Err(StoreError::Invalid { tag, errors });
        }
        Ok(self.dispatch(command))
    }

    /// Decodes a JSON command and dispatches it through `try_dispatch`.
    pub fn dispatch_json(&mut self, json: &str) -> Result<&ScheduleState, StoreError> {
        let command = ScheduleCommand::from_json(json)?;
        self.try_dispatch(command)
    }
}
