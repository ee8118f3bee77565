//! Marker layer: draws the rendered marker set, hit-tests pointer events
//! and shows the decorative user-position overlay.

use std::collections::BTreeMap;

use egui::{Align2, Color32, FontId, Stroke, Ui};
use explora_core::{Coordinates, MarkerStyle};
use walkers::{Plugin, Position, Projector};

/// Screen radius of a marker pin.
const MARKER_RADIUS: f32 = 10.0;
/// Pointer-to-pin distance that counts as hovering.
const HIT_RADIUS: f32 = 12.0;
/// Radius of the decorative nearby circle, in meters.
const NEARBY_RADIUS_M: f64 = 2_000.0;

/// One rendered marker, keyed by location id in the layer's store.
#[derive(Debug, Clone)]
pub struct Marker {
    pub coordinates: Coordinates,
    pub style: MarkerStyle,
}

/// Pointer events reported by the marker layer, keyed by location id.
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    Clicked(String),
    /// A click that hit no marker (used to dismiss the detail panel).
    BackgroundClicked,
    HoverEntered { id: String, screen: (f32, f32) },
    HoverLeft,
}

/// Plugin that draws all markers and reports the pointer hit of this
/// frame through `hit` (nearest marker under the cursor, if any).
pub struct MarkerPlugin<'a> {
    pub markers: &'a BTreeMap<String, Marker>,
    pub selected: Option<&'a str>,
    pub hit: &'a mut Option<(String, egui::Pos2)>,
    pub clicked: &'a mut Option<String>,
    pub background_clicked: &'a mut bool,
}

impl<'a> Plugin for MarkerPlugin<'a> {
    fn run(
        self: Box<Self>,
        ui: &mut Ui,
        response: &egui::Response,
        projector: &Projector,
    ) {
        let painter = ui.painter();
        let hover_pos = response.hover_pos();

        let mut nearest: Option<(f32, String, egui::Pos2)> = None;

        for (id, marker) in self.markers {
            let p = projector.project(Position::from_lon_lat(marker.coordinates.lng, marker.coordinates.lat));
            let pos = egui::pos2(p.x, p.y);

            let color = Color32::from_rgb(
                marker.style.color.r,
                marker.style.color.g,
                marker.style.color.b,
            );

            let is_selected = self.selected == Some(id.as_str());
            let radius = if is_selected {
                MARKER_RADIUS + 3.0
            } else {
                MARKER_RADIUS
            };

            painter.circle_filled(pos, radius, color);
            painter.circle_stroke(pos, radius, Stroke::new(2.0, Color32::WHITE));
            painter.text(
                pos,
                Align2::CENTER_CENTER,
                marker.style.glyph,
                FontId::proportional(11.0),
                Color32::WHITE,
            );

            if let Some(cursor) = hover_pos {
                let distance = cursor.distance(pos);
                if distance <= HIT_RADIUS
                    && nearest.as_ref().map_or(true, |(d, _, _)| distance < *d)
                {
                    nearest = Some((distance, id.clone(), pos));
                }
            }
        }

        match nearest {
            Some((_, id, pos)) => {
                if response.clicked() {
                    *self.clicked = Some(id.clone());
                }
                *self.hit = Some((id, pos));
            }
            None => {
                if response.clicked() {
                    *self.background_clicked = true;
                }
            }
        }
    }
}

/// Plugin for the user's own position: a dot plus, when enabled, a
/// translucent circle of fixed geographic radius. Display only.
pub struct PositionPlugin {
    pub position: Coordinates,
    pub show_nearby: bool,
}

impl Plugin for PositionPlugin {
    fn run(
        self: Box<Self>,
        ui: &mut Ui,
        _response: &egui::Response,
        projector: &Projector,
    ) {
        let painter = ui.painter();

        let p = projector.project(Position::from_lon_lat(self.position.lng, self.position.lat));
        let center = egui::pos2(p.x, p.y);

        if self.show_nearby {
            // Project a point NEARBY_RADIUS_M north of the position to get
            // the circle radius in screen pixels.
            let dlat = NEARBY_RADIUS_M / 111_320.0;
            let edge = projector.project(Position::from_lon_lat(self.position.lng, self.position.lat + dlat));
            let radius = (egui::pos2(edge.x, edge.y) - center).length();

            painter.circle_filled(center, radius, Color32::from_rgba_unmultiplied(37, 99, 235, 24));
            painter.circle_stroke(
                center,
                radius,
                Stroke::new(1.0, Color32::from_rgb(37, 99, 235)),
            );
        }

        painter.circle_filled(center, 6.0, Color32::from_rgb(37, 99, 235));
        painter.circle_stroke(center, 6.0, Stroke::new(2.0, Color32::WHITE));
    }
}
