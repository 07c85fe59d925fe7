//types.rs
use serde::Serialize;

/// A single catalog event, normalized from the GeoJSON feature document.
///
/// `magnitude` and `depth_km` stay `None` when the catalog omits them;
/// they are never coerced to zero. `event_id` always echoes the caller's
/// input, not anything embedded in the document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuakeEvent {
    pub event_id: String,
    pub time_ms: i64,
    pub magnitude: Option<f64>,
    pub place: String,
    pub latitude: f64,
    pub longitude: f64,
    pub depth_km: Option<f64>,
}
