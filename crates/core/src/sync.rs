//! Map synchronization: keeps an external map widget consistent with the
//! visible destination set and the selection/hover/geolocation state.
//!
//! The widget is an opaque capability behind [`MapPort`]; this layer owns
//! the marker registry and hands the widget nothing but add/remove/center
//! commands. Reconciliation is diff-based so markers that stay visible are
//! never torn down and re-added.

use std::collections::{HashMap, HashSet};

use crate::location::{Coordinates, Location};
use crate::style::MarkerStyle;

/// Default viewport center (approximate center of Colombia).
pub const HOME_CENTER: Coordinates = Coordinates::new(4.5709, -74.2973);
/// Zoom used when the map first opens.
pub const HOME_ZOOM: f64 = 6.0;
/// Zoom used when centering on a selected destination.
pub const FOCUS_ZOOM: f64 = 10.0;
/// Zoom used when centering on the user's own position.
pub const NEARBY_ZOOM: f64 = 12.0;

/// What the map widget must be able to do. Commands are fire-and-forget:
/// a later `center_on` supersedes any in-flight animation.
pub trait MapPort {
    fn add_marker(&mut self, id: &str, coordinates: Coordinates, style: MarkerStyle);
    fn remove_marker(&mut self, id: &str);
    fn center_on(&mut self, coordinates: Coordinates, zoom: f64);
}

/// Detail-panel selection state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Closed,
    Open(String),
}

/// The marker currently under the pointer, with its screen-projected
/// position for tooltip placement. At most one at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct Hover {
    pub id: String,
    pub screen: (f32, f32),
}

/// Owns the marker registry and the selection/hover/geolocation state.
#[derive(Default)]
pub struct MapSync {
    /// Marker registry: id → coordinates of the rendered marker. Only this
    /// layer mutates it; the widget is never asked to track diffs.
    rendered: HashMap<String, Coordinates>,
    selection: Selection,
    hover: Option<Hover>,
    user_location: Option<Coordinates>,
    show_nearby: bool,
}

impl MapSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconcile the widget's marker set against the visible set.
    ///
    /// Markers whose id left the visible set are removed, new ids are
    /// added, and markers in the intersection are left untouched. Always
    /// call with the latest visible set; intermediate states may be
    /// skipped.
    pub fn reconcile(&mut self, visible: &[&Location], port: &mut dyn MapPort) {
        let keep: HashSet<&str> = visible.iter().map(|l| l.id.as_str()).collect();

        let stale: Vec<String> = self
            .rendered
            .keys()
            .filter(|id| !keep.contains(id.as_str()))
            .cloned()
            .collect();
        for id in stale {
            self.rendered.remove(&id);
            port.remove_marker(&id);
        }

        for location in visible {
            if !self.rendered.contains_key(&location.id) {
                self.rendered
                    .insert(location.id.clone(), location.coordinates);
                port.add_marker(
                    &location.id,
                    location.coordinates,
                    MarkerStyle::for_category(location.category),
                );
            }
        }

        // A hovered marker that just disappeared can no longer be hovered.
        if let Some(hover) = &self.hover {
            if !self.rendered.contains_key(&hover.id) {
                self.hover = None;
            }
        }
    }

    /// Open the detail panel for a destination and center the viewport on
    /// it. Selecting while already open switches directly to the new id.
    pub fn select(&mut self, location: &Location, port: &mut dyn MapPort) {
        self.selection = Selection::Open(location.id.clone());
        port.center_on(location.coordinates, FOCUS_ZOOM);
    }

    /// Close the detail panel. Closing an already-closed panel is a no-op.
    pub fn close(&mut self) {
        self.selection = Selection::Closed;
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_id(&self) -> Option<&str> {
        match &self.selection {
            Selection::Closed => None,
            Selection::Open(id) => Some(id.as_str()),
        }
    }

    pub fn hover_enter(&mut self, id: &str, screen: (f32, f32)) {
        self.hover = Some(Hover {
            id: id.to_string(),
            screen,
        });
    }

    pub fn hover_leave(&mut self) {
        self.hover = None;
    }

    pub fn hover(&self) -> Option<&Hover> {
        self.hover.as_ref()
    }

    /// Record a successful one-shot geolocation fix: remember the position,
    /// enable the decorative nearby overlay and center the viewport. The
    /// overlay never feeds any filtering decision.
    pub fn set_user_location(&mut self, coordinates: Coordinates, port: &mut dyn MapPort) {
        self.user_location = Some(coordinates);
        self.show_nearby = true;
        port.center_on(coordinates, NEARBY_ZOOM);
    }

    pub fn user_location(&self) -> Option<Coordinates> {
        self.user_location
    }

    pub fn show_nearby(&self) -> bool {
        self.show_nearby
    }

    /// Number of markers currently rendered.
    pub fn marker_count(&self) -> usize {
        self.rendered.len()
    }

    pub fn is_rendered(&self, id: &str) -> bool {
        self.rendered.contains_key(id)
    }
}
