//! Map collaborator interface.

use crate::workouts::types::Coords;

/// Opaque handle to a marker placed on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerHandle(pub u64);

/// Padding in pixels applied when fitting the viewport to markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    pub x: u32,
    pub y: u32,
}

impl Padding {
    /// Same padding on both axes.
    pub fn uniform(pixels: u32) -> Self {
        Self {
            x: pixels,
            y: pixels,
        }
    }
}

/// Trait for map implementations
pub trait MapView {
    /// Place a marker with an open popup, returning its handle
    fn place_marker(&mut self, coords: Coords, popup_content: &str, style_class: &str)
        -> MarkerHandle;

    /// Remove a previously placed marker
    fn remove_marker(&mut self, handle: MarkerHandle);

    /// Center the viewport on `coords` at `zoom`
    fn set_viewport(&mut self, coords: Coords, zoom: f64);

    /// Fit the viewport so every marker in `markers` is visible
    fn fit_bounds(&mut self, markers: &[MarkerHandle], padding: Padding);
}
