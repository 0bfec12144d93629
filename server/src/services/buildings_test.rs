use super::*;

#[test]
fn parse_directory_reads_records_in_order() {
    let dir = parse_directory(
        r#"{
            "MC": { "name": "Mathematics & Computer", "latitude": 43.4721, "longitude": -80.5440 },
            "DC": { "name": "Davis Centre", "latitude": 43.4728, "longitude": -80.5421 }
        }"#,
    )
    .unwrap();
    assert_eq!(dir.keys().collect::<Vec<_>>(), vec!["MC", "DC"]);
    assert_eq!(dir["MC"].name.as_deref(), Some("Mathematics & Computer"));
}

#[test]
fn parse_directory_allows_null_fields() {
    let dir = parse_directory(r#"{ "X1": { "name": null, "latitude": null, "longitude": null } }"#).unwrap();
    assert_eq!(dir["X1"].name, None);
    assert_eq!(dir["X1"].coordinates(), None);
}

#[test]
fn parse_directory_rejects_array() {
    assert!(parse_directory("[]").is_err());
}

#[test]
fn coordinates_need_both_axes() {
    let record = BuildingRecord { name: None, latitude: Some(43.47), longitude: None };
    assert_eq!(record.coordinates(), None);

    let record = BuildingRecord { name: None, latitude: Some(43.47), longitude: Some(-80.54) };
    assert_eq!(record.coordinates(), Some(Coordinates { latitude: 43.47, longitude: -80.54 }));
}

#[test]
fn record_serializes_all_fields() {
    let record = BuildingRecord { name: Some("Davis Centre".into()), latitude: Some(43.4728), longitude: Some(-80.5421) };
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json, serde_json::json!({ "name": "Davis Centre", "latitude": 43.4728, "longitude": -80.5421 }));
}

#[tokio::test]
async fn load_directory_missing_file_is_read_error() {
    let err = load_directory(Path::new("/nonexistent/watclassroom/buildings.json")).await.unwrap_err();
    assert!(matches!(err, BuildingsError::Read { .. }));
}

#[tokio::test]
async fn load_directory_reads_bundled_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("buildings.json");
    let dir = load_directory(&path).await.unwrap();
    assert!(dir.contains_key("MC"));
    assert!(dir.values().all(|record| record.name.is_some()));
}

#[test]
fn record_without_name_omits_key() {
    let record = BuildingRecord { name: None, latitude: Some(43.4722), longitude: Some(-80.5463) };
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json, serde_json::json!({ "latitude": 43.4722, "longitude": -80.5463 }));
}
