// normalize.rs
use serde_json::Value;

use crate::error::{QuakeError, Result};
use crate::types::QuakeEvent;

/// Normalize a raw GeoJSON feature document into a [`QuakeEvent`].
///
/// Geometry is strict: the coordinate pair `[longitude, latitude]` must be
/// present and numeric or the whole document is rejected. Properties are
/// lenient: a missing or oddly-typed `properties` object never fails on its
/// own, each field just falls back to its default (`time` → 0, `mag` and
/// the depth coordinate → none, `place` → empty).
pub fn normalize_event(event_id: &str, doc: &Value) -> Result<QuakeEvent> {
    let coords: &[Value] = doc
        .get("geometry")
        .and_then(|g| g.get("coordinates"))
        .and_then(Value::as_array)
        .map_or(&[], Vec::as_slice);

    // GeoJSON order: [lon, lat, depth_km], depth may be null or absent.
    let longitude = required_coord(coords, 0, "longitude")?;
    let latitude = required_coord(coords, 1, "latitude")?;
    let depth_km = coords.get(2).and_then(Value::as_f64);

    let props = doc.get("properties");
    let time_ms = prop(props, "time")
        .and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f as i64)))
        .unwrap_or(0);
    let magnitude = prop(props, "mag").and_then(Value::as_f64);
    let place = prop(props, "place")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();

    Ok(QuakeEvent {
        event_id: event_id.to_string(),
        time_ms,
        magnitude,
        place,
        latitude,
        longitude,
        depth_km,
    })
}

fn required_coord(coords: &[Value], idx: usize, name: &str) -> Result<f64> {
    coords.get(idx).and_then(Value::as_f64).ok_or_else(|| {
        QuakeError::MalformedEvent(format!(
            "geometry coordinate {idx} ({name}) is missing or not a number"
        ))
    })
}

fn prop<'a>(props: Option<&'a Value>, key: &str) -> Option<&'a Value> {
    props.and_then(Value::as_object).and_then(|m| m.get(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn full_doc() -> Value {
        json!({
            "properties": {
                "time": 1_577_836_800_000_i64,
                "mag": 6.4,
                "place": "10km SW of Nowhere"
            },
            "geometry": {
                "coordinates": [-122.4, 37.8, 10.5]
            }
        })
    }

    #[test]
    fn full_document_maps_every_field() {
        let ev = normalize_event("us1234", &full_doc()).unwrap();
        assert_eq!(
            ev,
            QuakeEvent {
                event_id: "us1234".to_string(),
                time_ms: 1_577_836_800_000,
                magnitude: Some(6.4),
                place: "10km SW of Nowhere".to_string(),
                latitude: 37.8,
                longitude: -122.4,
                depth_km: Some(10.5),
            }
        );
    }

    #[test]
    fn two_element_coordinates_leave_depth_unset() {
        let mut doc = full_doc();
        doc["geometry"]["coordinates"] = json!([-122.4, 37.8]);
        let ev = normalize_event("us1234", &doc).unwrap();
        assert_eq!(ev.depth_km, None);
        assert_eq!(ev.latitude, 37.8);
        assert_eq!(ev.longitude, -122.4);
    }

    #[test]
    fn explicit_null_depth_is_treated_as_absent() {
        let mut doc = full_doc();
        doc["geometry"]["coordinates"] = json!([-122.4, 37.8, null]);
        let ev = normalize_event("us1234", &doc).unwrap();
        assert_eq!(ev.depth_km, None);
    }

    #[test]
    fn non_numeric_depth_is_treated_as_absent() {
        let mut doc = full_doc();
        doc["geometry"]["coordinates"] = json!([-122.4, 37.8, "10.5"]);
        let ev = normalize_event("us1234", &doc).unwrap();
        assert_eq!(ev.depth_km, None);
    }

    #[test]
    fn integer_coordinates_are_accepted() {
        let mut doc = full_doc();
        doc["geometry"]["coordinates"] = json!([-122, 37, 10]);
        let ev = normalize_event("us1234", &doc).unwrap();
        assert_eq!(ev.longitude, -122.0);
        assert_eq!(ev.latitude, 37.0);
        assert_eq!(ev.depth_km, Some(10.0));
    }

    #[test]
    fn empty_coordinates_fail() {
        let mut doc = full_doc();
        doc["geometry"]["coordinates"] = json!([]);
        let err = normalize_event("us1234", &doc).unwrap_err();
        assert!(matches!(err, QuakeError::MalformedEvent(_)), "got {err:?}");
    }

    #[test]
    fn missing_geometry_fails() {
        let doc = json!({"properties": {"mag": 5.0}});
        let err = normalize_event("us1234", &doc).unwrap_err();
        assert!(matches!(err, QuakeError::MalformedEvent(_)), "got {err:?}");
    }

    #[test]
    fn non_numeric_latitude_fails() {
        let mut doc = full_doc();
        doc["geometry"]["coordinates"] = json!([-122.4, "37.8"]);
        let err = normalize_event("us1234", &doc).unwrap_err();
        assert!(matches!(err, QuakeError::MalformedEvent(_)), "got {err:?}");
    }

    #[test]
    fn missing_properties_defaults_time_mag_place() {
        let doc = json!({"geometry": {"coordinates": [-122.4, 37.8]}});
        let ev = normalize_event("us1234", &doc).unwrap();
        assert_eq!(ev.time_ms, 0);
        assert_eq!(ev.magnitude, None);
        assert_eq!(ev.place, "");
    }

    #[test]
    fn non_object_properties_is_tolerated() {
        let mut doc = full_doc();
        doc["properties"] = json!(["not", "an", "object"]);
        let ev = normalize_event("us1234", &doc).unwrap();
        assert_eq!(ev.time_ms, 0);
        assert_eq!(ev.magnitude, None);
        assert_eq!(ev.place, "");
    }

    #[test]
    fn missing_mag_stays_unset_not_zero() {
        let mut doc = full_doc();
        doc["properties"].as_object_mut().unwrap().remove("mag");
        let ev = normalize_event("us1234", &doc).unwrap();
        assert_eq!(ev.magnitude, None);
    }

    #[test]
    fn missing_time_defaults_to_zero() {
        let mut doc = full_doc();
        doc["properties"].as_object_mut().unwrap().remove("time");
        let ev = normalize_event("us1234", &doc).unwrap();
        assert_eq!(ev.time_ms, 0);
    }

    #[test]
    fn float_time_truncates_toward_zero() {
        let mut doc = full_doc();
        doc["properties"]["time"] = json!(1_577_836_800_000.9);
        let ev = normalize_event("us1234", &doc).unwrap();
        assert_eq!(ev.time_ms, 1_577_836_800_000);
    }

    #[test]
    fn non_numeric_time_defaults_to_zero() {
        let mut doc = full_doc();
        doc["properties"]["time"] = json!("1577836800000");
        let ev = normalize_event("us1234", &doc).unwrap();
        assert_eq!(ev.time_ms, 0);
    }

    #[test]
    fn non_string_place_normalizes_to_empty() {
        let mut doc = full_doc();
        doc["properties"]["place"] = json!(0);
        let ev = normalize_event("us1234", &doc).unwrap();
        assert_eq!(ev.place, "");
    }

    #[test]
    fn null_place_normalizes_to_empty() {
        let mut doc = full_doc();
        doc["properties"]["place"] = json!(null);
        let ev = normalize_event("us1234", &doc).unwrap();
        assert_eq!(ev.place, "");
    }

    #[test]
    fn event_id_is_echoed_regardless_of_document_content() {
        let mut doc = full_doc();
        doc["id"] = json!("something-else-entirely");
        let ev = normalize_event("ci-37389218", &doc).unwrap();
        assert_eq!(ev.event_id, "ci-37389218");
    }
}
