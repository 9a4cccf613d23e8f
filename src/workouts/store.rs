//! Ordered in-memory workout collection.

use super::types::Workout;
use thiserror::Error;

/// Ordered collection of all current workouts.
///
/// Insertion order is the default display order. Every mutation either fully
/// applies or leaves the collection untouched.
#[derive(Debug, Clone, Default)]
pub struct WorkoutStore {
    workouts: Vec<Workout>,
}

impl WorkoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `workouts` in the given order.
    pub fn from_workouts(workouts: Vec<Workout>) -> Self {
        Self { workouts }
    }

    /// Append a workout.
    pub fn add(&mut self, workout: Workout) {
        self.workouts.push(workout);
    }

    /// Overwrite the workout at `index`.
    pub fn replace_at(&mut self, index: usize, workout: Workout) -> Result<(), StoreError> {
        let len = self.workouts.len();
        let slot = self
            .workouts
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfBounds { index, len })?;
        *slot = workout;
        Ok(())
    }

    /// Remove and return the workout at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<Workout, StoreError> {
        if index >= self.workouts.len() {
            return Err(StoreError::IndexOutOfBounds {
                index,
                len: self.workouts.len(),
            });
        }
        Ok(self.workouts.remove(index))
    }

    pub fn clear(&mut self) {
        self.workouts.clear();
    }

    /// Find a workout and its position by id.
    pub fn find_by_id(&self, id: &str) -> Option<(usize, &Workout)> {
        self.workouts
            .iter()
            .enumerate()
            .find(|(_, workout)| workout.id() == id)
    }

    /// Stable in-place sort by distance.
    pub fn sort_by_distance(&mut self, ascending: bool) {
        if ascending {
            self.workouts
                .sort_by(|a, b| a.distance().total_cmp(&b.distance()));
        } else {
            self.workouts
                .sort_by(|a, b| b.distance().total_cmp(&a.distance()));
        }
    }

    pub fn get(&self, index: usize) -> Option<&Workout> {
        self.workouts.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Workout> {
        self.workouts.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Workout> {
        self.workouts.iter()
    }

    pub fn as_slice(&self) -> &[Workout] {
        &self.workouts
    }
}

/// Errors from store operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Index does not address an existing workout
    #[error("Index {index} out of bounds for {len} workouts")]
    IndexOutOfBounds { index: usize, len: usize },
}
