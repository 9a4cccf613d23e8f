//! Keeps the workout list and the map markers in step with the store.
//!
//! Every render clears both views and redraws them from scratch in store
//! order, so neither view can drift after a sort or a removal.

use super::list::{ListEntry, ListView};
use super::map::{MapView, MarkerHandle, Padding};
use crate::workouts::types::{Coords, Workout};

/// Renders workouts into a list view and a map.
pub struct ViewSync<M: MapView, L: ListView> {
    map: M,
    list: L,
    /// Markers currently on the map, in store order
    markers: Vec<MarkerHandle>,
    /// Whether the map has been given an initial viewport
    map_attached: bool,
    zoom_level: f64,
    padding: Padding,
}

impl<M: MapView, L: ListView> ViewSync<M, L> {
    /// Create a view sync. The map stays detached until `attach_map`.
    pub fn new(map: M, list: L, zoom_level: f64, padding: Padding) -> Self {
        Self {
            map,
            list,
            markers: Vec::new(),
            map_attached: false,
            zoom_level,
            padding,
        }
    }

    /// Give the map its initial viewport. Markers are placed from the next render on.
    pub fn attach_map(&mut self, center: Coords) {
        self.map.set_viewport(center, self.zoom_level);
        self.map_attached = true;
        tracing::info!("Map attached at {}", center);
    }

    /// Clear both views and redraw them from `workouts`.
    pub fn render_all(&mut self, workouts: &[Workout]) {
        self.list.clear();
        for handle in self.markers.drain(..) {
            self.map.remove_marker(handle);
        }

        for workout in workouts {
            self.list.render_entry(&ListEntry::from(workout));

            if self.map_attached {
                let handle = self.map.place_marker(
                    workout.coords(),
                    &popup_content(workout),
                    &popup_class(workout),
                );
                self.markers.push(handle);
            }
        }

        tracing::debug!(
            "Rendered {} entries and {} markers",
            workouts.len(),
            self.markers.len()
        );
    }

    /// Fit the map to all markers. Does nothing without markers.
    pub fn overview(&mut self) {
        if self.markers.is_empty() {
            return;
        }
        self.map.fit_bounds(&self.markers, self.padding);
    }

    /// Pan the map to `coords` at the configured zoom level.
    pub fn focus(&mut self, coords: Coords) {
        if !self.map_attached {
            return;
        }
        self.map.set_viewport(coords, self.zoom_level);
    }

    pub fn is_map_attached(&self) -> bool {
        self.map_attached
    }

    pub fn markers(&self) -> &[MarkerHandle] {
        &self.markers
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn list(&self) -> &L {
        &self.list
    }
}

/// Marker popup text, e.g. `🏃‍♂️ Running on April 5`.
pub fn popup_content(workout: &Workout) -> String {
    format!(
        "{} {}",
        workout.workout_type().icon(),
        workout.description()
    )
}

/// Marker popup style class, e.g. `running-popup`.
pub fn popup_class(workout: &Workout) -> String {
    format!("{}-popup", workout.workout_type())
}
