//! The map view: walkers basemap plus marker, outline and position layers.
//!
//! Implements [`MapPort`], so the core's `MapSync` drives this widget the
//! same way the tests drive their recording port.

pub mod markers;
pub mod outline;

use std::collections::BTreeMap;

use egui::Ui;
use explora_core::sync::{HOME_CENTER, HOME_ZOOM};
use explora_core::{Coordinates, MapPort, MarkerStyle};
use walkers::sources::OpenStreetMap;
use walkers::{HttpTiles, Map, MapMemory, Position};

use markers::{MapEvent, Marker, MarkerPlugin, PositionPlugin};
use outline::{CountryOutline, OutlinePlugin};

/// Persistent map state: tile cache, viewport memory and the marker store
/// the sync layer populates through `MapPort`.
pub struct MapView {
    /// Lazily created on the first frame (needs the egui context).
    tiles: Option<HttpTiles>,
    memory: MapMemory,
    center: Position,
    markers: BTreeMap<String, Marker>,
    outline: Option<CountryOutline>,
    /// Center command from the sync layer, applied on the next frame. A
    /// newer command simply replaces an unapplied one.
    pending_center: Option<(Coordinates, f64)>,
    /// Marker hovered in the previous frame, for enter/leave detection.
    hovered: Option<String>,
}

impl Default for MapView {
    fn default() -> Self {
        Self::new()
    }
}

impl MapView {
    pub fn new() -> Self {
        Self {
            tiles: None,
            memory: MapMemory::default(),
            center: Position::from_lon_lat(HOME_CENTER.lng, HOME_CENTER.lat),
            markers: BTreeMap::new(),
            outline: None,
            pending_center: Some((HOME_CENTER, HOME_ZOOM)),
            hovered: None,
        }
    }

    pub fn set_outline(&mut self, outline: CountryOutline) {
        self.outline = Some(outline);
    }

    /// Render one frame and report id-keyed pointer events.
    pub fn show(
        &mut self,
        ui: &mut Ui,
        ctx: &egui::Context,
        selected: Option<&str>,
        user_location: Option<Coordinates>,
        show_nearby: bool,
    ) -> Vec<MapEvent> {
        if let Some((coordinates, zoom)) = self.pending_center.take() {
            let position = Position::from_lon_lat(coordinates.lng, coordinates.lat);
            self.center = position;
            self.memory.center_at(position);
            let _ = self.memory.set_zoom(zoom);
        }

        let mut hit: Option<(String, egui::Pos2)> = None;
        let mut clicked: Option<String> = None;
        let mut background_clicked = false;

        let tiles = self
            .tiles
            .get_or_insert_with(|| HttpTiles::new(OpenStreetMap, ctx.clone()));
        let mut map = Map::new(Some(tiles), &mut self.memory, self.center);

        if let Some(outline) = &self.outline {
            map = map.with_plugin(OutlinePlugin { outline });
        }
        if let Some(position) = user_location {
            map = map.with_plugin(PositionPlugin {
                position,
                show_nearby,
            });
        }
        map = map.with_plugin(MarkerPlugin {
            markers: &self.markers,
            selected,
            hit: &mut hit,
            clicked: &mut clicked,
            background_clicked: &mut background_clicked,
        });

        ui.add(map);

        let mut events = Vec::new();

        let hit_id = hit.as_ref().map(|(id, _)| id.clone());
        if hit_id != self.hovered {
            if self.hovered.is_some() {
                events.push(MapEvent::HoverLeft);
            }
            if let Some((id, pos)) = &hit {
                events.push(MapEvent::HoverEntered {
                    id: id.clone(),
                    screen: (pos.x, pos.y),
                });
            }
            self.hovered = hit_id;
        }

        if let Some(id) = clicked {
            events.push(MapEvent::Clicked(id));
        } else if background_clicked {
            events.push(MapEvent::BackgroundClicked);
        }

        events
    }
}

impl MapPort for MapView {
    fn add_marker(&mut self, id: &str, coordinates: Coordinates, style: MarkerStyle) {
        self.markers
            .insert(id.to_string(), Marker { coordinates, style });
    }

    fn remove_marker(&mut self, id: &str) {
        self.markers.remove(id);
    }

    fn center_on(&mut self, coordinates: Coordinates, zoom: f64) {
        self.pending_center = Some((coordinates, zoom));
    }
}

/// Tooltip shown next to the hovered marker.
pub fn draw_tooltip(ui: &Ui, screen: (f32, f32), title: &str, subtitle: &str) {
    let painter = ui.painter();
    let anchor = egui::pos2(screen.0, screen.1 - 18.0);

    let title_font = egui::FontId::proportional(13.0);
    let subtitle_font = egui::FontId::proportional(11.0);

    let title_galley = painter.layout_no_wrap(title.to_string(), title_font.clone(), egui::Color32::WHITE);
    let subtitle_galley = painter.layout_no_wrap(
        subtitle.to_string(),
        subtitle_font.clone(),
        egui::Color32::from_gray(200),
    );

    let width = title_galley.size().x.max(subtitle_galley.size().x) + 16.0;
    let height = title_galley.size().y + subtitle_galley.size().y + 12.0;
    let rect = egui::Rect::from_min_size(
        egui::pos2(anchor.x - width / 2.0, anchor.y - height),
        egui::vec2(width, height),
    );

    painter.rect_filled(rect, 4.0, egui::Color32::from_black_alpha(190));
    painter.text(
        egui::pos2(rect.center().x, rect.top() + 6.0),
        egui::Align2::CENTER_TOP,
        title,
        title_font,
        egui::Color32::WHITE,
    );
    painter.text(
        egui::pos2(rect.center().x, rect.bottom() - 6.0),
        egui::Align2::CENTER_BOTTOM,
        subtitle,
        subtitle_font,
        egui::Color32::from_gray(200),
    );
}
