//! In-memory `BuildingApi` for state tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::net::api::BuildingApi;
use crate::net::types::{ApiError, BuildingAvailability, Directory};

#[derive(Default)]
pub(crate) struct FakeApi {
    directory: Option<Directory>,
    results: HashMap<String, Result<BuildingAvailability, u16>>,
    directory_calls: AtomicUsize,
    result_calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_directory(mut self, json: serde_json::Value) -> Self {
        self.directory = Some(serde_json::from_value(json).unwrap());
        self
    }

    pub(crate) fn respond(mut self, code: &str, json: serde_json::Value) -> Self {
        self.results.insert(code.to_owned(), Ok(availability(json)));
        self
    }

    pub(crate) fn fail(mut self, code: &str, status: u16) -> Self {
        self.results.insert(code.to_owned(), Err(status));
        self
    }

    pub(crate) fn directory_calls(&self) -> usize {
        self.directory_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn result_calls(&self) -> Vec<String> {
        self.result_calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl BuildingApi for FakeApi {
    async fn all_buildings(&self) -> Result<Directory, ApiError> {
        self.directory_calls.fetch_add(1, Ordering::SeqCst);
        self.directory
            .clone()
            .ok_or_else(|| ApiError::Request("connection refused".into()))
    }

    async fn result(&self, building_code: &str) -> Result<BuildingAvailability, ApiError> {
        self.result_calls.lock().unwrap().push(building_code.to_owned());
        match self.results.get(building_code) {
            Some(Ok(data)) => Ok(data.clone()),
            Some(Err(status)) => Err(ApiError::Status { status: *status }),
            None => Err(ApiError::Status { status: 400 }),
        }
    }
}

pub(crate) fn availability(json: serde_json::Value) -> BuildingAvailability {
    serde_json::from_value(json).unwrap()
}

pub(crate) fn mc_directory() -> serde_json::Value {
    serde_json::json!({
        "MC": { "name": "Mathematics & Computer" },
        "REN": { "name": "Renison University College" },
        "DC": { "name": "William G. Davis Computer Research Centre" }
    })
}
