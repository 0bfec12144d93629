use super::*;

// =============================================================
// TimeInterval
// =============================================================

#[test]
fn time_interval_decodes_from_pair() {
    let interval: TimeInterval = serde_json::from_str(r#"["09:00","10:00"]"#).unwrap();
    assert_eq!(interval, TimeInterval::new("09:00", "10:00"));
}

#[test]
fn time_interval_encodes_as_pair() {
    let json = serde_json::to_value(TimeInterval::new("13:30:00", "15:00:00")).unwrap();
    assert_eq!(json, serde_json::json!(["13:30:00", "15:00:00"]));
}

#[test]
fn time_interval_rejects_three_elements() {
    let result = serde_json::from_str::<TimeInterval>(r#"["09:00","10:00","11:00"]"#);
    assert!(result.is_err());
}

#[test]
fn time_interval_rejects_object_form() {
    let result = serde_json::from_str::<TimeInterval>(r#"{"start":"09:00","end":"10:00"}"#);
    assert!(result.is_err());
}

#[test]
fn time_interval_strings_are_opaque() {
    let interval: TimeInterval = serde_json::from_str(r#"["not a time","??"]"#).unwrap();
    assert_eq!(interval.start, "not a time");
    assert_eq!(interval.end, "??");
}

// =============================================================
// Directory
// =============================================================

#[test]
fn directory_ignores_coordinates() {
    let dir: Directory = serde_json::from_value(serde_json::json!({
        "MC": { "name": "Mathematics & Computer", "latitude": 43.47, "longitude": -80.54 }
    }))
    .unwrap();
    assert_eq!(dir["MC"].name, "Mathematics & Computer");
}

#[test]
fn directory_rejects_non_string_name() {
    let result = serde_json::from_value::<Directory>(serde_json::json!({ "MC": { "name": 7 } }));
    assert!(result.is_err());
}

#[test]
fn directory_keeps_document_order() {
    let dir: Directory = serde_json::from_str(r#"{"RCH":{"name":"J.R. Coutts"},"DC":{"name":"Davis Centre"},"AL":{"name":"Arts Lecture Hall"}}"#).unwrap();
    let codes: Vec<&str> = dir.keys().map(String::as_str).collect();
    assert_eq!(codes, vec!["RCH", "DC", "AL"]);
}

#[test]
fn directory_entry_with_null_name_decodes_to_empty_name() {
    let dir: Directory =
        serde_json::from_str(r#"{"MC":{"name":null,"latitude":43.47,"longitude":-80.54},"DC":{"name":"Davis Centre"}}"#).unwrap();
    assert_eq!(dir["MC"].name, "");
    assert_eq!(dir["DC"].name, "Davis Centre");
}

#[test]
fn directory_entry_without_name_decodes_to_empty_name() {
    let dir: Directory = serde_json::from_str(r#"{"PAC":{"latitude":43.4722,"longitude":-80.5463}}"#).unwrap();
    assert_eq!(dir["PAC"].name, "");
}

// =============================================================
// BuildingAvailability
// =============================================================

#[test]
fn availability_decodes_nested_shape() {
    let data: BuildingAvailability =
        serde_json::from_str(r#"{"MC":{"MC2017":[["09:00","10:00"],["11:00","12:00"]]}}"#).unwrap();
    let rooms = &data["MC"];
    assert_eq!(rooms["MC2017"], vec![TimeInterval::new("09:00", "10:00"), TimeInterval::new("11:00", "12:00")]);
}

#[test]
fn availability_keeps_building_order_from_response() {
    let data: BuildingAvailability = serde_json::from_str(r#"{"QNC":{},"MC":{},"DC":{}}"#).unwrap();
    let codes: Vec<&str> = data.keys().map(String::as_str).collect();
    assert_eq!(codes, vec!["QNC", "MC", "DC"]);
}

#[test]
fn availability_empty_object_is_valid() {
    let data: BuildingAvailability = serde_json::from_str("{}").unwrap();
    assert!(data.is_empty());
}

#[test]
fn availability_rejects_array_body() {
    let result = serde_json::from_str::<BuildingAvailability>("[]");
    assert!(result.is_err());
}
