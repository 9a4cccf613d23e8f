//! WorkoutMap - Map-based workout log
//!
//! Logs running and cycling workouts at map locations, keeps a workout list
//! and a set of map markers in step with the in-memory collection, supports
//! editing, deleting, sorting and clearing, and persists the collection to a
//! local key-value slot so it survives a restart.

pub mod app;
pub mod command;
pub mod geolocation;
pub mod storage;
pub mod ui;
pub mod workouts;

// Re-export commonly used types
pub use app::{App, AppError, SubmitOutcome};
pub use storage::config::AppConfig;
pub use storage::gateway::PersistenceGateway;
pub use ui::sync::ViewSync;
pub use workouts::{Coords, EditSession, Workout, WorkoutInput, WorkoutStore};
