//! One-shot geolocation via IP lookup.
//!
//! A desktop machine has no GPS to ask, so the position comes from a
//! geo-IP service. Requested once per click, never watched; a failure is
//! reported and left alone.

use std::time::Duration;

use crossbeam_channel::Sender;
use serde::Deserialize;

use crate::state::AppMessage;

const LOOKUP_URL: &str = "https://ipapi.co/json/";
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Deserialize)]
struct IpLocation {
    latitude: f64,
    longitude: f64,
}

/// Request the current position in a background thread. Sends exactly one
/// `GeolocationFix` or `GeolocationFailed`; if the app was torn down in
/// the meantime the dropped receiver discards the late message.
pub fn request_position(tx: Sender<AppMessage>) {
    std::thread::spawn(move || {
        let message = match lookup() {
            Ok((lat, lng)) => AppMessage::GeolocationFix { lat, lng },
            Err(reason) => AppMessage::GeolocationFailed { reason },
        };
        let _ = tx.send(message);
    });
}

fn lookup() -> Result<(f64, f64), String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(LOOKUP_TIMEOUT)
        .build()
        .map_err(|e| e.to_string())?;

    let location: IpLocation = client
        .get(LOOKUP_URL)
        .send()
        .and_then(|resp| resp.error_for_status())
        .and_then(|resp| resp.json())
        .map_err(|e| {
            if e.is_timeout() {
                "tiempo de espera agotado".to_string()
            } else {
                e.to_string()
            }
        })?;

    if !location.latitude.is_finite()
        || !location.longitude.is_finite()
        || !(-90.0..=90.0).contains(&location.latitude)
        || !(-180.0..=180.0).contains(&location.longitude)
    {
        return Err("respuesta de ubicación inválida".to_string());
    }

    Ok((location.latitude, location.longitude))
}
