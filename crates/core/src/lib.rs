//! # Explora Core
//!
//! Catalog, filter engine and map-state core for Colombia Explorer.
//!
//! This crate provides:
//! - `Catalog` / `Location`: the bundled, read-only destination data
//! - Pure filter/search functions deriving the visible destination set
//! - `MapSync`: diff-based marker reconciliation, selection and hover
//!   state against an abstract `MapPort` widget
//! - Session state: favorites list and traveller preferences
//!
//! Everything here is headless and synchronous; the GUI crate wires it to
//! a real map widget.

pub mod catalog;
pub mod error;
pub mod favorites;
pub mod filter;
pub mod location;
pub mod preferences;
pub mod style;
pub mod sync;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use favorites::Favorites;
pub use filter::{compute_visible, suggest, FilterState, SUGGESTION_LIMIT};
pub use location::{BusinessCategory, Category, Coordinates, LocalBusiness, Location};
pub use preferences::{Preferences, PreferencesError};
pub use style::{MarkerStyle, Rgb};
pub use sync::{Hover, MapPort, MapSync, Selection};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::catalog::Catalog;
    pub use crate::error::{Error, Result};
    pub use crate::filter::{compute_visible, suggest, FilterState};
    pub use crate::location::{Category, Coordinates, Location};
    pub use crate::sync::{MapPort, MapSync, Selection};
}
