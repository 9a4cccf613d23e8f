//! Text renderers used by the command-line front end.

use std::collections::HashMap;
use std::io::Write;

use super::list::{ListEntry, ListView};
use super::map::{MapView, MarkerHandle, Padding};
use crate::workouts::types::Coords;

/// Bounding box of a set of coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south_west: Coords,
    pub north_east: Coords,
}

impl Bounds {
    /// Smallest box containing every point, `None` for no points.
    pub fn around(points: impl IntoIterator<Item = Coords>) -> Option<Self> {
        points.into_iter().fold(None, |bounds, p| {
            Some(match bounds {
                None => Bounds {
                    south_west: p,
                    north_east: p,
                },
                Some(b) => Bounds {
                    south_west: Coords::new(b.south_west.lat.min(p.lat), b.south_west.lng.min(p.lng)),
                    north_east: Coords::new(b.north_east.lat.max(p.lat), b.north_east.lng.max(p.lng)),
                },
            })
        })
    }
}

/// Map that reports its state as lines of text.
pub struct ConsoleMap<W: Write> {
    out: W,
    next_handle: u64,
    markers: HashMap<MarkerHandle, Coords>,
}

impl<W: Write> ConsoleMap<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            next_handle: 1,
            markers: HashMap::new(),
        }
    }

    /// Number of markers currently on the map.
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    fn line(&mut self, text: std::fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            tracing::warn!("Failed to write map output: {}", e);
        }
    }
}

impl<W: Write> MapView for ConsoleMap<W> {
    fn place_marker(&mut self, coords: Coords, popup_content: &str, style_class: &str) -> MarkerHandle {
        let handle = MarkerHandle(self.next_handle);
        self.next_handle += 1;
        self.markers.insert(handle, coords);
        self.line(format_args!("[map] marker #{} at {} [{}] {}", handle.0, coords, style_class, popup_content));
        handle
    }

    fn remove_marker(&mut self, handle: MarkerHandle) {
        self.markers.remove(&handle);
    }

    fn set_viewport(&mut self, coords: Coords, zoom: f64) {
        self.line(format_args!("[map] view {} zoom {}", coords, zoom));
    }

    fn fit_bounds(&mut self, markers: &[MarkerHandle], padding: Padding) {
        let points: Vec<Coords> = markers.iter().filter_map(|h| self.markers.get(h).copied()).collect();
        if let Some(bounds) = Bounds::around(points) {
            self.line(format_args!(
                "[map] fit ({}) to ({}) padding {}x{}",
                bounds.south_west, bounds.north_east, padding.x, padding.y
            ));
        }
    }
}

/// Workout list printed as text.
pub struct ConsoleList<W: Write> {
    out: W,
    rendered: usize,
}

impl<W: Write> ConsoleList<W> {
    pub fn new(out: W) -> Self {
        Self { out, rendered: 0 }
    }

    /// Number of entries rendered since the last clear.
    pub fn rendered(&self) -> usize {
        self.rendered
    }
}

impl<W: Write> ListView for ConsoleList<W> {
    fn clear(&mut self) {
        self.rendered = 0;
    }

    fn render_entry(&mut self, entry: &ListEntry) {
        self.rendered += 1;
        let details: Vec<String> = entry.details.iter().map(ToString::to_string).collect();
        let result = writeln!(
            self.out,
            "{:>3}. {}  {}  ({})",
            self.rendered,
            entry.title,
            details.join(" | "),
            entry.id
        );
        if let Err(e) = result {
            tracing::warn!("Failed to write list output: {}", e);
        }
    }
}
