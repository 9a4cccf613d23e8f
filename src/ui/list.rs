//! Workout list collaborator interface and entry layout.

use crate::workouts::types::{Workout, WorkoutDetails, WorkoutType};

/// One row of workout details, e.g. `5 km`.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailRow {
    /// Icon shown before the value
    pub icon: &'static str,
    /// Formatted value
    pub value: String,
    /// Unit label
    pub unit: &'static str,
}

impl DetailRow {
    fn new(icon: &'static str, value: String, unit: &'static str) -> Self {
        Self { icon, value, unit }
    }
}

impl std::fmt::Display for DetailRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.icon, self.value, self.unit)
    }
}

/// A rendered workout list entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    /// Id of the workout the entry shows
    pub id: String,
    /// Workout type
    pub workout_type: WorkoutType,
    /// Style class, `workout--running` or `workout--cycling`
    pub style_class: String,
    /// Entry title (the workout description)
    pub title: String,
    /// Distance, duration and the two type-specific rows
    pub details: Vec<DetailRow>,
}

impl From<&Workout> for ListEntry {
    fn from(workout: &Workout) -> Self {
        let workout_type = workout.workout_type();

        let mut details = vec![
            DetailRow::new(workout_type.icon(), workout.distance().to_string(), "km"),
            DetailRow::new("⏱", workout.duration().to_string(), "min"),
        ];

        match *workout.details() {
            WorkoutDetails::Running { cadence } => {
                let pace = workout.pace().unwrap_or_default();
                details.push(DetailRow::new("⚡️", format!("{:.1}", pace), "min/km"));
                details.push(DetailRow::new("🦶🏼", cadence.to_string(), "spm"));
            }
            WorkoutDetails::Cycling { elevation_gain } => {
                let speed = workout.speed().unwrap_or_default();
                details.push(DetailRow::new("⚡️", format!("{:.1}", speed), "km/h"));
                details.push(DetailRow::new("⛰", elevation_gain.to_string(), "m"));
            }
        }

        Self {
            id: workout.id().to_string(),
            workout_type,
            style_class: format!("workout--{}", workout_type),
            title: workout.description().to_string(),
            details,
        }
    }
}

/// Trait for workout list implementations
pub trait ListView {
    /// Remove every rendered entry
    fn clear(&mut self);

    /// Render one entry after the ones already rendered
    fn render_entry(&mut self, entry: &ListEntry);
}
