//! Country outline overlay: one-shot GeoJSON fetch, drawn as polygon rings.

use std::time::Duration;

use crossbeam_channel::Sender;
use egui::{Color32, Stroke, Ui};
use serde::Deserialize;
use walkers::{Plugin, Position, Projector};

use crate::state::AppMessage;

/// Colombia outline from the world.geo.json collection.
const OUTLINE_URL: &str =
    "https://raw.githubusercontent.com/johan/world.geo.json/master/countries/COL.geo.json";

const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Parsed outline: polygon rings as (lng, lat) vertex lists.
#[derive(Debug, Clone)]
pub struct CountryOutline {
    pub rings: Vec<Vec<(f64, f64)>>,
}

// Just enough GeoJSON to read a Feature(Collection) of (Multi)Polygons.
#[derive(Deserialize)]
struct GeoJson {
    #[serde(default)]
    features: Vec<Feature>,
    #[serde(default)]
    geometry: Option<Geometry>,
}

#[derive(Deserialize)]
struct Feature {
    geometry: Geometry,
}

#[derive(Deserialize)]
struct Geometry {
    #[serde(rename = "type")]
    kind: String,
    coordinates: serde_json::Value,
}

impl CountryOutline {
    /// Extract rings from a GeoJSON document. Unsupported geometry kinds
    /// simply contribute nothing.
    pub fn from_geojson(json: &str) -> Result<Self, serde_json::Error> {
        let doc: GeoJson = serde_json::from_str(json)?;
        let mut rings = Vec::new();

        let geometries = doc
            .features
            .into_iter()
            .map(|f| f.geometry)
            .chain(doc.geometry);

        for geometry in geometries {
            match geometry.kind.as_str() {
                "Polygon" => {
                    let polygon: Vec<Vec<[f64; 2]>> =
                        serde_json::from_value(geometry.coordinates)?;
                    rings.extend(polygon.into_iter().map(to_ring));
                }
                "MultiPolygon" => {
                    let polygons: Vec<Vec<Vec<[f64; 2]>>> =
                        serde_json::from_value(geometry.coordinates)?;
                    for polygon in polygons {
                        rings.extend(polygon.into_iter().map(to_ring));
                    }
                }
                _ => {}
            }
        }

        Ok(Self { rings })
    }
}

fn to_ring(vertices: Vec<[f64; 2]>) -> Vec<(f64, f64)> {
    vertices.into_iter().map(|[lng, lat]| (lng, lat)).collect()
}

/// Download the outline in a background thread. Fire-and-forget: if the
/// receiver is gone by the time the fetch finishes, the result is dropped.
pub fn fetch_outline(tx: Sender<AppMessage>) {
    std::thread::spawn(move || {
        let result = reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| e.to_string())
            .and_then(|client| {
                client
                    .get(OUTLINE_URL)
                    .send()
                    .and_then(|resp| resp.error_for_status())
                    .and_then(|resp| resp.text())
                    .map_err(|e| e.to_string())
            })
            .and_then(|body| CountryOutline::from_geojson(&body).map_err(|e| e.to_string()));

        let message = match result {
            Ok(outline) => AppMessage::OutlineLoaded(outline),
            Err(message) => AppMessage::OutlineFailed { message },
        };
        let _ = tx.send(message);
    });
}

/// Plugin that draws the outline rings on top of the basemap tiles.
pub struct OutlinePlugin<'a> {
    pub outline: &'a CountryOutline,
}

impl<'a> Plugin for OutlinePlugin<'a> {
    fn run(
        self: Box<Self>,
        ui: &mut Ui,
        _response: &egui::Response,
        projector: &Projector,
    ) {
        let stroke = Stroke::new(2.0, Color32::from_rgb(37, 99, 235));
        let painter = ui.painter();

        for ring in &self.outline.rings {
            let points: Vec<egui::Pos2> = ring
                .iter()
                .map(|&(lng, lat)| {
                    let p = projector.project(Position::from_lon_lat(lng, lat));
                    egui::pos2(p.x, p.y)
                })
                .collect();
            painter.add(egui::Shape::closed_line(points, stroke));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_feature_collection_of_polygons() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": { "name": "Colombia" },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[-75.0, 10.0], [-74.0, 10.0], [-74.0, 11.0], [-75.0, 10.0]]]
                }
            }]
        }"#;
        let outline = CountryOutline::from_geojson(json).unwrap();
        assert_eq!(outline.rings.len(), 1);
        assert_eq!(outline.rings[0][0], (-75.0, 10.0));
    }

    #[test]
    fn parses_multipolygons_into_flat_rings() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [
                        [[[-81.7, 12.5], [-81.6, 12.5], [-81.6, 12.6]]],
                        [[[-75.5, 10.4], [-75.4, 10.4], [-75.4, 10.5]]]
                    ]
                }
            }]
        }"#;
        let outline = CountryOutline::from_geojson(json).unwrap();
        assert_eq!(outline.rings.len(), 2);
    }

    #[test]
    fn point_geometry_contributes_nothing() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [-74.0, 4.6] }
            }]
        }"#;
        let outline = CountryOutline::from_geojson(json).unwrap();
        assert!(outline.rings.is_empty());
    }
}
