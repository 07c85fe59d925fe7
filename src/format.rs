// format.rs
use std::fmt::Write as _;

use chrono::{DateTime, TimeZone, Utc};

use crate::types::QuakeEvent;

/// Render epoch milliseconds as `YYYY-MM-DD HH:MM:SS UTC`.
pub fn utc_timestamp(time_ms: i64) -> String {
    let t = Utc
        .timestamp_millis_opt(time_ms)
        .single()
        .unwrap_or(DateTime::UNIX_EPOCH);
    t.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Human-readable event block for stdout.
pub fn render_event(ev: &QuakeEvent) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== USGS Event ===");
    let _ = writeln!(out, "Event ID : {}", ev.event_id);
    let _ = writeln!(out, "Time     : {}", utc_timestamp(ev.time_ms));
    let _ = writeln!(out, "Place    : {}", ev.place);
    let _ = writeln!(out, "Mag      : {}", optional(ev.magnitude));
    let _ = writeln!(out, "Lat/Lon  : {:.5}, {:.5}", ev.latitude, ev.longitude);
    let _ = writeln!(out, "Depth km : {}", optional(ev.depth_km));
    out
}

fn optional(v: Option<f64>) -> String {
    v.map_or_else(|| "n/a".to_string(), |x| x.to_string())
}
