//! Building directory route.

use axum::Json;
use axum::extract::State;

use crate::services::buildings::BuildingDirectory;
use crate::state::AppState;

/// `GET /all_buildings`: the cached location file, in file order.
pub async fn all_buildings(State(state): State<AppState>) -> Json<BuildingDirectory> {
    Json(state.buildings.as_ref().clone())
}

#[cfg(test)]
#[path = "buildings_test.rs"]
mod tests;
