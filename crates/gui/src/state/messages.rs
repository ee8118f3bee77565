//! Application messages: the single bus between background work, the
//! navigation bar and the map view.

use crate::map::outline::CountryOutline;

/// Messages delivered to the main UI loop. Cross-component requests (a
/// suggestion click asking the map to open a destination) travel the same
/// bus as background-thread results, so there is exactly one consumer.
pub enum AppMessage {
    /// Open a destination's detail panel and center the map on it.
    OpenLocation { id: String },
    /// One-shot geolocation succeeded.
    GeolocationFix { lat: f64, lng: f64 },
    /// One-shot geolocation failed (denied, unreachable, timed out).
    GeolocationFailed { reason: String },
    /// The country outline overlay finished downloading.
    OutlineLoaded(CountryOutline),
    /// The outline fetch failed. Cosmetic only; the map works without it.
    OutlineFailed { message: String },
}

/// Severity of a user-visible notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
    Success,
}

/// A notice for the status strip.
#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(msg: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: msg.into(),
        }
    }

    pub fn warning(msg: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: msg.into(),
        }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: msg.into(),
        }
    }

    pub fn success(msg: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: msg.into(),
        }
    }
}
