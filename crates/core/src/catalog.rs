//! The destination catalog: bundled static data, loaded once, read-only.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::location::Location;

/// Catalog JSON bundled with the application.
const BUNDLED: &str = include_str!("../data/locations.json");

/// The static list of destinations. Order is authoring order and is
/// preserved by every operation that derives from it.
#[derive(Debug, Clone)]
pub struct Catalog {
    locations: Vec<Location>,
}

impl Catalog {
    /// Load the bundled catalog. Fails fast on any malformed record.
    pub fn load() -> Result<Self> {
        Self::from_json(BUNDLED)
    }

    /// Parse and validate a catalog from JSON.
    ///
    /// Each record is deserialised individually so that structural errors
    /// (missing field, unknown category tag) can name the offending id.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: Vec<serde_json::Value> = serde_json::from_str(json)?;

        let mut locations = Vec::with_capacity(raw.len());
        let mut seen: HashSet<String> = HashSet::with_capacity(raw.len());

        for value in raw {
            let id = value
                .get("id")
                .and_then(|v| v.as_str())
                .unwrap_or("<missing id>")
                .to_string();

            let location: Location =
                serde_json::from_value(value).map_err(|e| Error::Record {
                    id: id.clone(),
                    reason: e.to_string(),
                })?;
            location.validate()?;

            if !seen.insert(location.id.clone()) {
                return Err(Error::DuplicateId { id: location.id });
            }
            locations.push(location);
        }

        Ok(Self { locations })
    }

    /// All destinations in authoring order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Look up a destination by id.
    pub fn get(&self, id: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == id)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}
