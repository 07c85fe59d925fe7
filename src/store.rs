// store.rs
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::format::utc_timestamp;
use crate::types::QuakeEvent;

/// Shape of the on-disk summary artifact. Field order is the file's key
/// order; `time_utc` is derived from the record's `time_ms` at write time.
#[derive(Serialize)]
struct EventSummary<'a> {
    event_id: &'a str,
    time_utc: String,
    place: &'a str,
    magnitude: Option<f64>,
    latitude: f64,
    longitude: f64,
    depth_km: Option<f64>,
}

impl<'a> From<&'a QuakeEvent> for EventSummary<'a> {
    fn from(ev: &'a QuakeEvent) -> Self {
        Self {
            event_id: &ev.event_id,
            time_utc: utc_timestamp(ev.time_ms),
            place: &ev.place,
            magnitude: ev.magnitude,
            latitude: ev.latitude,
            longitude: ev.longitude,
            depth_km: ev.depth_km,
        }
    }
}

/// Write the event summary as pretty-printed JSON, creating parent
/// directories as needed.
pub fn write_summary(path: &Path, ev: &QuakeEvent) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            create_dir_all(dir)
                .with_context(|| format!("could not create output directory {}", dir.display()))?;
        }
    }

    let file = File::create(path)
        .with_context(|| format!("could not create output file {}", path.display()))?;
    let mut out = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut out, &EventSummary::from(ev))
        .context("could not serialize event summary")?;
    out.flush()?;
    Ok(())
}
