//! Workout model, collection and edit session.

pub mod edit;
pub mod store;
pub mod types;

pub use edit::{EditError, EditSession, EditState};
pub use store::{StoreError, WorkoutStore};
pub use types::{
    Coords, RecordDetails, Workout, WorkoutDetails, WorkoutError, WorkoutInput, WorkoutRecord,
    WorkoutType, VALIDATION_MESSAGE,
};
