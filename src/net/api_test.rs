use super::*;

// =============================================================
// ApiConfig
// =============================================================

#[test]
fn api_config_default_points_at_deployed_backend() {
    let config = ApiConfig::default();
    assert_eq!(config.base_url, DEFAULT_BACKEND_URL);
    assert_eq!(config.request_timeout, None);
    assert_eq!(config.connect_timeout, None);
}

#[test]
fn api_config_trims_trailing_slashes() {
    let config = ApiConfig::new("http://localhost:8000//");
    assert_eq!(config.base_url, "http://localhost:8000");
}

#[test]
fn api_config_builders_set_timeouts() {
    let config = ApiConfig::new("http://localhost:8000")
        .with_request_timeout(Duration::from_secs(15))
        .with_connect_timeout(Duration::from_secs(3));
    assert_eq!(config.request_timeout, Some(Duration::from_secs(15)));
    assert_eq!(config.connect_timeout, Some(Duration::from_secs(3)));
}

#[test]
fn http_api_keeps_normalized_base_url() {
    let api = HttpBuildingApi::new(ApiConfig::new("http://localhost:8000/")).unwrap();
    assert_eq!(api.base_url(), "http://localhost:8000");
}

// =============================================================
// Endpoints
// =============================================================

#[test]
fn directory_endpoint_has_trailing_slash() {
    assert_eq!(directory_endpoint("http://api.test"), "http://api.test/all_buildings/");
}

#[test]
fn result_endpoint_appends_building_code() {
    assert_eq!(result_endpoint("http://api.test", "MC").unwrap().as_str(), "http://api.test/result/MC");
}

#[test]
fn result_endpoint_keeps_base_path() {
    assert_eq!(result_endpoint("http://api.test/v1", "MC").unwrap().as_str(), "http://api.test/v1/result/MC");
}

#[test]
fn result_endpoint_encodes_code_as_single_segment() {
    let url = result_endpoint("http://api.test", "../all_buildings").unwrap();
    assert_eq!(url.as_str(), "http://api.test/result/..%2Fall_buildings");

    let url = result_endpoint("http://api.test", "MC 2017?x=1").unwrap();
    assert_eq!(url.as_str(), "http://api.test/result/MC%202017%3Fx=1");
}

#[test]
fn result_endpoint_rejects_unparseable_base() {
    assert!(matches!(result_endpoint("not a url", "MC"), Err(ApiError::InvalidUrl(_))));
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn parse_directory_accepts_name_mapping() {
    let dir = parse_directory(r#"{"MC":{"name":"Mathematics & Computer"}}"#).unwrap();
    assert_eq!(dir.len(), 1);
    assert_eq!(dir["MC"].name, "Mathematics & Computer");
}

#[test]
fn parse_directory_rejects_list_body() {
    let err = parse_directory(r#"[{"code":"MC"}]"#).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn parse_directory_rejects_garbage() {
    let err = parse_directory("<html>502 Bad Gateway</html>").unwrap_err();
    assert!(err.to_string().starts_with("response decode failed"));
}

#[test]
fn parse_availability_accepts_foreign_buildings() {
    let data = parse_availability(r#"{"MC":{},"DC":{"DC1350":[["10:00:00","11:30:00"]]}}"#).unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data["DC"]["DC1350"][0].end, "11:30:00");
}

#[test]
fn parse_availability_rejects_bad_interval() {
    let err = parse_availability(r#"{"MC":{"MC2017":[["09:00"]]}}"#).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn status_error_message_includes_code() {
    let err = ApiError::Status { status: 502 };
    assert_eq!(err.to_string(), "unexpected response status 502");
}
