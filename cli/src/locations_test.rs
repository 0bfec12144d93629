use super::*;

#[test]
fn keeps_entries_with_latitude_in_order() {
    let json = serde_json::json!([
        { "buildingCode": "MC", "buildingName": "Mathematics & Computer", "latitude": 43.47209, "longitude": -80.54396 },
        { "buildingCode": "OFF", "buildingName": "Off campus", "latitude": null, "longitude": null },
        { "buildingCode": "DC", "buildingName": "Davis Centre", "latitude": 43.47281, "longitude": -80.54201 }
    ]);
    let buildings = parse_locations(&json.to_string()).unwrap();

    assert_eq!(buildings.keys().collect::<Vec<_>>(), vec!["MC", "DC"]);
    assert_eq!(buildings["DC"].name.as_deref(), Some("Davis Centre"));
    assert_eq!(buildings["MC"].longitude, Some(-80.54396));
}

#[test]
fn entry_without_code_is_skipped() {
    let json = r#"[{ "buildingName": "Mystery", "latitude": 43.4, "longitude": -80.5 }]"#;
    assert!(parse_locations(json).unwrap().is_empty());
}

#[test]
fn extra_fields_are_ignored() {
    let json = r#"[{ "buildingCode": "RCH", "buildingName": "J.R. Coutts", "latitude": 43.47, "longitude": -80.54, "alternateBuildingNames": [] }]"#;
    assert_eq!(parse_locations(json).unwrap().len(), 1);
}

#[test]
fn written_shape_matches_server_file() {
    let json = r#"[{ "buildingCode": "AL", "buildingName": "Arts Lecture Hall", "latitude": 43.4695, "longitude": -80.5422 }]"#;
    let value = serde_json::to_value(parse_locations(json).unwrap()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "AL": { "name": "Arts Lecture Hall", "latitude": 43.4695, "longitude": -80.5422 } })
    );
}

#[test]
fn non_array_body_is_error() {
    assert!(parse_locations(r#"{"data": []}"#).is_err());
}
