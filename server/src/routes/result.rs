//! Nearby open classroom route.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use watclassroom::BuildingAvailability;

use crate::services::availability::{self, ResultError};
use crate::state::AppState;

/// `GET /result/{building_code}`: rooms open now or within the lookahead,
/// nearest building first.
pub async fn result(
    State(state): State<AppState>,
    Path(building_code): Path<String>,
) -> Result<Json<BuildingAvailability>, StatusCode> {
    tracing::info!(building_code = %building_code, "availability request");
    let data = availability::nearby_availability(
        state.portal.as_ref(),
        &state.buildings,
        &building_code,
        state.campus_now(),
        state.lookahead,
    )
    .await
    .map_err(result_error_to_status)?;
    Ok(Json(data))
}

pub(crate) fn result_error_to_status(err: ResultError) -> StatusCode {
    match err {
        ResultError::UnknownBuilding(_) => StatusCode::BAD_REQUEST,
        ResultError::Upstream(e) => {
            tracing::error!(error = %e, "open classroom portal failed");
            StatusCode::BAD_GATEWAY
        }
    }
}

#[cfg(test)]
#[path = "result_test.rs"]
mod tests;
