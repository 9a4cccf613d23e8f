//! Edit session for staging changes to an existing workout.
//!
//! A session is either idle or has exactly one workout selected. Committing
//! rebuilds the workout from new form values and puts it back in place under
//! its original id.

use super::store::{StoreError, WorkoutStore};
use super::types::{Workout, WorkoutError, WorkoutInput};
use thiserror::Error;

/// Current state of the edit session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditState {
    /// Nothing is being edited
    #[default]
    Idle,
    /// A workout is staged for editing
    Selected { id: String, index: usize },
}

/// Tracks the workout currently being edited.
#[derive(Debug, Default)]
pub struct EditSession {
    state: EditState,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage the workout with `id` for editing.
    ///
    /// Returns the values to pre-fill the edit form with, or `None` (leaving
    /// the session as it was) when no such workout exists.
    pub fn select(&mut self, store: &WorkoutStore, id: &str) -> Option<WorkoutInput> {
        let (index, workout) = store.find_by_id(id)?;

        self.state = EditState::Selected {
            id: workout.id().to_string(),
            index,
        };

        tracing::debug!("Editing workout {} at index {}", id, index);
        Some(WorkoutInput::from(workout))
    }

    /// Replace the staged workout with one built from `input`.
    ///
    /// Does nothing while idle. A rejected input leaves both the store and the
    /// selection as they were, so the form can be corrected and resubmitted.
    /// The rebuilt workout keeps the original id and location; its date and
    /// description are regenerated.
    pub fn commit(
        &mut self,
        store: &mut WorkoutStore,
        input: &WorkoutInput,
    ) -> Result<Option<Workout>, EditError> {
        let EditState::Selected { id, index } = &self.state else {
            return Ok(None);
        };

        // The staged index goes stale if the store was reordered meanwhile.
        let index = match store.get(*index) {
            Some(workout) if workout.id() == id => *index,
            _ => match store.find_by_id(id) {
                Some((index, _)) => index,
                None => {
                    tracing::warn!("Edited workout {} no longer exists", id);
                    self.state = EditState::Idle;
                    return Ok(None);
                }
            },
        };

        let original = store
            .get(index)
            .ok_or(EditError::Store(StoreError::IndexOutOfBounds {
                index,
                len: store.len(),
            }))?;

        // TODO: keep the original date once edits should not relabel the entry
        let replacement = Workout::from_input(original.coords(), input)?.with_id(id.clone());

        store.replace_at(index, replacement.clone())?;
        tracing::info!("Committed edit of workout {}", replacement.id());

        self.state = EditState::Idle;
        Ok(Some(replacement))
    }

    /// Drop the staged workout without touching the store.
    pub fn cancel(&mut self) {
        if self.is_editing() {
            tracing::debug!("Edit cancelled");
        }
        self.state = EditState::Idle;
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, EditState::Selected { .. })
    }

    /// Id of the staged workout, if any.
    pub fn selected_id(&self) -> Option<&str> {
        match &self.state {
            EditState::Selected { id, .. } => Some(id),
            EditState::Idle => None,
        }
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }
}

/// Errors from committing an edit.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EditError {
    /// New values failed validation
    #[error(transparent)]
    Workout(#[from] WorkoutError),

    /// Store rejected the replacement
    #[error(transparent)]
    Store(#[from] StoreError),
}
