//! Application context tying the store, edit session, views and storage together.
//!
//! Every user request is one method call. A request either fails before
//! touching anything, or mutates the store, redraws both views and saves the
//! whole collection before it returns.

use crate::geolocation::{GeolocationError, PositionProvider};
use crate::storage::config::AppConfig;
use crate::storage::gateway::PersistenceGateway;
use crate::ui::list::ListView;
use crate::ui::map::{MapView, Padding};
use crate::ui::sync::ViewSync;
use crate::workouts::edit::{EditError, EditSession};
use crate::workouts::store::{StoreError, WorkoutStore};
use crate::workouts::types::{Coords, Workout, WorkoutError, WorkoutInput};
use thiserror::Error;

/// What a successful submit did.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// A new workout was logged
    Created(Workout),
    /// An existing workout was replaced
    Edited(Workout),
    /// The edited workout disappeared before the commit
    Discarded,
}

/// Main application state.
pub struct App<M: MapView, L: ListView> {
    /// Workout collection
    store: WorkoutStore,
    /// In-flight edit, if any
    edit_session: EditSession,
    /// List and map views
    view: ViewSync<M, L>,
    /// Storage slot
    gateway: PersistenceGateway,
    /// Location of the last map click, consumed by the next creation
    pending_location: Option<Coords>,
    /// Direction of the last sort, insertion order counts as ascending
    sort_ascending: bool,
}

impl<M: MapView, L: ListView> App<M, L> {
    /// Load saved workouts and render the list.
    ///
    /// Markers are drawn once the map is initialised with `init_map`.
    pub fn new(config: &AppConfig, gateway: PersistenceGateway, map: M, list: L) -> Self {
        let store = WorkoutStore::from_workouts(gateway.load());
        let view = ViewSync::new(
            map,
            list,
            config.map.zoom_level,
            Padding::uniform(config.map.overview_padding),
        );

        let mut app = Self {
            store,
            edit_session: EditSession::new(),
            view,
            gateway,
            pending_location: None,
            sort_ascending: true,
        };
        app.view.render_all(app.store.as_slice());

        tracing::info!("Workout log started with {} workouts", app.store.len());
        app
    }

    /// Center the map on the user's position and draw every marker.
    ///
    /// On failure the map stays detached; list operations keep working.
    pub fn init_map(&mut self, provider: &mut impl PositionProvider) -> Result<(), AppError> {
        let position = provider.current_position().map_err(|e| {
            tracing::warn!("Could not get position: {}", e);
            AppError::Geolocation(e)
        })?;

        self.view.attach_map(position);
        self.view.render_all(self.store.as_slice());
        self.view.overview();
        Ok(())
    }

    /// Record a click on the map as the location of the next workout.
    pub fn map_clicked(&mut self, coords: Coords) {
        self.pending_location = Some(coords);
    }

    /// Submit the workout form.
    ///
    /// While an edit is in progress this commits the edit, otherwise it logs a
    /// new workout at the last clicked location.
    pub fn submit(&mut self, input: &WorkoutInput) -> Result<SubmitOutcome, AppError> {
        if self.edit_session.is_editing() {
            return self.commit_edit(input);
        }

        let coords = self.pending_location.ok_or(AppError::NoPendingLocation)?;
        let workout = Workout::from_input(coords, input)?;

        tracing::info!("Logged {} workout {}", workout.workout_type(), workout.id());
        self.store.add(workout.clone());
        self.pending_location = None;
        self.sync();

        Ok(SubmitOutcome::Created(workout))
    }

    fn commit_edit(&mut self, input: &WorkoutInput) -> Result<SubmitOutcome, AppError> {
        match self.edit_session.commit(&mut self.store, input) {
            Ok(Some(workout)) => {
                self.sync();
                Ok(SubmitOutcome::Edited(workout))
            }
            Ok(None) => Ok(SubmitOutcome::Discarded),
            Err(EditError::Workout(e)) => Err(AppError::Validation(e)),
            Err(EditError::Store(e)) => {
                contract_violation(&e);
                self.edit_session.cancel();
                Ok(SubmitOutcome::Discarded)
            }
        }
    }

    /// Start editing the workout with `id`.
    ///
    /// Returns the values to pre-fill the form with, or `None` if there is no
    /// such workout.
    pub fn begin_edit(&mut self, id: &str) -> Option<WorkoutInput> {
        self.edit_session.select(&self.store, id)
    }

    /// Abandon the current edit.
    pub fn cancel_edit(&mut self) {
        self.edit_session.cancel();
    }

    /// Delete the workout with `id`. Unknown ids are ignored.
    pub fn delete(&mut self, id: &str) -> Option<Workout> {
        let (index, _) = self.store.find_by_id(id)?;
        self.edit_session.cancel();

        let removed = match self.store.remove_at(index) {
            Ok(removed) => removed,
            Err(e) => {
                contract_violation(&e);
                return None;
            }
        };

        tracing::info!("Deleted workout {}", removed.id());
        self.sync();
        self.view.overview();
        Some(removed)
    }

    /// Delete every workout.
    pub fn clear(&mut self) {
        self.edit_session.cancel();
        self.store.clear();
        tracing::info!("Cleared all workouts");
        self.sync();
    }

    /// Sort by distance, alternating between descending and ascending.
    ///
    /// Returns the direction applied, or `None` when there is nothing to sort.
    pub fn toggle_sort(&mut self) -> Option<bool> {
        if self.store.is_empty() {
            return None;
        }

        let ascending = !self.sort_ascending;
        self.store.sort_by_distance(ascending);
        self.sort_ascending = ascending;

        tracing::debug!(
            "Sorted workouts by distance, {}",
            if ascending { "ascending" } else { "descending" }
        );
        self.sync();
        Some(ascending)
    }

    /// Fit the map to every workout marker.
    pub fn overview(&mut self) {
        self.view.overview();
    }

    /// Pan the map to the workout with `id` and count the click.
    pub fn focus(&mut self, id: &str) -> bool {
        let Some((index, _)) = self.store.find_by_id(id) else {
            return false;
        };
        let Some(workout) = self.store.get_mut(index) else {
            return false;
        };

        workout.click();
        let coords = workout.coords();
        self.view.focus(coords);
        true
    }

    /// Drop the storage slot and every workout in memory.
    pub fn reset(&mut self) {
        self.edit_session.cancel();
        self.store.clear();
        if let Err(e) = self.gateway.reset() {
            tracing::error!("Failed to remove saved workouts: {}", e);
        }
        self.view.render_all(self.store.as_slice());
    }

    /// Redraw both views and save the collection.
    fn sync(&mut self) {
        self.view.render_all(self.store.as_slice());
        if let Err(e) = self.gateway.save(self.store.as_slice()) {
            tracing::error!("Failed to save workouts: {}", e);
        }
    }

    pub fn workouts(&self) -> &[Workout] {
        self.store.as_slice()
    }

    pub fn store(&self) -> &WorkoutStore {
        &self.store
    }

    pub fn edit_session(&self) -> &EditSession {
        &self.edit_session
    }

    pub fn is_editing(&self) -> bool {
        self.edit_session.is_editing()
    }

    pub fn pending_location(&self) -> Option<Coords> {
        self.pending_location
    }

    pub fn view(&self) -> &ViewSync<M, L> {
        &self.view
    }

    pub fn gateway(&self) -> &PersistenceGateway {
        &self.gateway
    }
}

/// A store index error means the caller's bookkeeping is broken.
fn contract_violation(error: &StoreError) {
    tracing::error!("Store contract violated: {}", error);
    debug_assert!(false, "store contract violated: {}", error);
}

/// Errors surfaced to the user.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AppError {
    /// Form values were rejected
    #[error(transparent)]
    Validation(#[from] WorkoutError),

    /// Submit without clicking the map first
    #[error("Click on the map to choose where the workout took place")]
    NoPendingLocation,

    /// Position could not be determined
    #[error("Could not get your position")]
    Geolocation(GeolocationError),
}
