use super::*;
use crate::state::test_helpers::{MockSource, test_app_state};
use std::sync::Arc;

#[tokio::test]
async fn all_buildings_returns_directory_in_file_order() {
    let source = Arc::new(MockSource::ok(watclassroom::BuildingAvailability::new()));
    let Json(dir) = all_buildings(State(test_app_state(source.clone()))).await;

    assert_eq!(dir.keys().collect::<Vec<_>>(), vec!["MC", "QNC", "REN"]);
    assert_eq!(dir["MC"].name.as_deref(), Some("Mathematics & Computer Building"));
    assert_eq!(source.calls(), 0);
}

#[tokio::test]
async fn all_buildings_serializes_as_code_keyed_object() {
    let source = Arc::new(MockSource::ok(watclassroom::BuildingAvailability::new()));
    let Json(dir) = all_buildings(State(test_app_state(source))).await;
    let value = serde_json::to_value(&dir).unwrap();

    assert_eq!(value["QNC"]["latitude"], serde_json::json!(43.47103));
    assert!(value["REN"]["name"].is_string());
}
