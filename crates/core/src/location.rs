//! Destination records: the static data the whole application revolves around.
//!
//! A `Location` is one entry of the bundled catalog. Records are authored as
//! JSON, deserialised once at startup and treated as read-only afterwards;
//! validation rejects malformed records instead of silently dropping them.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// WGS-84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Both components finite and within WGS-84 bounds.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Destination category. Closed enumeration: an unknown tag in the
/// catalog data is a load error, not a fifth category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Beaches,
    Mountains,
    Cultural,
    Ecotourism,
}

impl Category {
    /// All categories, useful for filter toggles and legends.
    pub const ALL: &[Category] = &[
        Self::Beaches,
        Self::Mountains,
        Self::Cultural,
        Self::Ecotourism,
    ];

    /// Canonical tag as it appears in the data (and in search matching).
    pub fn name(&self) -> &'static str {
        match self {
            Self::Beaches => "beaches",
            Self::Mountains => "mountains",
            Self::Cultural => "cultural",
            Self::Ecotourism => "ecotourism",
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Beaches => "Playas",
            Self::Mountains => "Montañas",
            Self::Cultural => "Sitios Culturales",
            Self::Ecotourism => "Ecoturismo",
        }
    }

    /// Marker glyph shown on the map and in the legend.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Beaches => "🏖",
            Self::Mountains => "⛰",
            Self::Cultural => "🏛",
            Self::Ecotourism => "🌿",
        }
    }
}

/// Category of a local business attached to a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessCategory {
    Comida,
    Alojamiento,
    Guia,
    Tienda,
}

impl BusinessCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Comida => "Comida",
            Self::Alojamiento => "Alojamiento",
            Self::Guia => "Guía",
            Self::Tienda => "Tienda",
        }
    }
}

/// A business near a destination. Distances are pre-authored display
/// data, never an input to any filtering decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalBusiness {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub category: BusinessCategory,
    pub rating: f32,
    /// Distance from the destination in meters.
    pub distance: u32,
    pub description: String,
    pub image: String,
    pub hours: String,
    #[serde(default)]
    pub reviews_url: Option<String>,
    #[serde(default)]
    pub accepts_reservations: Option<bool>,
    #[serde(default)]
    pub accepts_digital_payments: Option<bool>,
    #[serde(default)]
    pub badges: Vec<String>,
}

/// One catalog record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Image URL; referenced, never fetched or validated for reachability.
    pub image: String,
    pub coordinates: Coordinates,
    #[serde(rename = "type")]
    pub category: Category,
    pub address: String,
    /// Free-text labels used only for search matching, not for filtering.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub businesses: Vec<LocalBusiness>,
}

impl Location {
    /// Validate one record. Malformed data is an authoring error and is
    /// rejected at load time with the offending id.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::EmptyField {
                id: self.id.clone(),
                field: "id",
            });
        }
        for (field, value) in [
            ("title", &self.title),
            ("address", &self.address),
        ] {
            if value.trim().is_empty() {
                return Err(Error::EmptyField {
                    id: self.id.clone(),
                    field,
                });
            }
        }
        if !self.coordinates.lat.is_finite() || !(-90.0..=90.0).contains(&self.coordinates.lat) {
            return Err(Error::InvalidLatitude {
                id: self.id.clone(),
                lat: self.coordinates.lat,
            });
        }
        if !self.coordinates.lng.is_finite() || !(-180.0..=180.0).contains(&self.coordinates.lng) {
            return Err(Error::InvalidLongitude {
                id: self.id.clone(),
                lng: self.coordinates.lng,
            });
        }
        for business in &self.businesses {
            if !(0.0..=5.0).contains(&business.rating) {
                return Err(Error::InvalidRating {
                    id: self.id.clone(),
                    business: business.name.clone(),
                    rating: business.rating,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Location {
        Location {
            id: "cartagena".into(),
            title: "Cartagena".into(),
            description: "Ciudad histórica con arquitectura colonial".into(),
            image: "https://example.com/cartagena.jpg".into(),
            coordinates: Coordinates::new(10.3932, -75.4832),
            category: Category::Cultural,
            address: "Cartagena, Bolívar".into(),
            tags: vec!["Cultural".into(), "Historia".into()],
            businesses: Vec::new(),
        }
    }

    #[test]
    fn valid_record_passes() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn latitude_out_of_range_rejected() {
        let mut loc = sample();
        loc.coordinates.lat = 91.0;
        let err = loc.validate().unwrap_err();
        assert!(err.to_string().contains("cartagena"));
        assert!(err.to_string().contains("latitude"));
    }

    #[test]
    fn non_finite_longitude_rejected() {
        let mut loc = sample();
        loc.coordinates.lng = f64::NAN;
        assert!(loc.validate().is_err());
    }

    #[test]
    fn empty_title_rejected() {
        let mut loc = sample();
        loc.title = "  ".into();
        let err = loc.validate().unwrap_err();
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn bad_business_rating_rejected() {
        let mut loc = sample();
        loc.businesses.push(LocalBusiness {
            id: "r1".into(),
            name: "Restaurante Sabor Caribeño".into(),
            category: BusinessCategory::Comida,
            rating: 5.5,
            distance: 350,
            description: String::new(),
            image: String::new(),
            hours: "10:00-22:00".into(),
            reviews_url: None,
            accepts_reservations: Some(true),
            accepts_digital_payments: Some(true),
            badges: vec![],
        });
        let err = loc.validate().unwrap_err();
        assert!(err.to_string().contains("Sabor Caribeño"));
    }

    #[test]
    fn category_deserializes_from_lowercase_tag() {
        let json = r#""ecotourism""#;
        let cat: Category = serde_json::from_str(json).unwrap();
        assert_eq!(cat, Category::Ecotourism);
        assert!(serde_json::from_str::<Category>(r#""nature""#).is_err());
    }

    #[test]
    fn location_deserializes_from_catalog_json() {
        let json = r#"{
            "id": "tayrona",
            "title": "Parque Tayrona",
            "description": "Parque nacional con playas vírgenes",
            "image": "https://example.com/tayrona.jpg",
            "coordinates": { "lat": 11.3147, "lng": -74.0307 },
            "type": "beaches",
            "address": "Santa Marta, Magdalena",
            "tags": ["Playas", "Naturaleza"]
        }"#;
        let loc: Location = serde_json::from_str(json).unwrap();
        assert_eq!(loc.category, Category::Beaches);
        assert!(loc.businesses.is_empty());
    }
}
