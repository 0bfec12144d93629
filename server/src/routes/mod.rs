//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two read-only JSON endpoints consumed by the classroom finder clients:
//! the building directory and the per-building availability result. Both
//! accept an optional trailing slash to match how existing clients call them.

pub mod buildings;
pub mod result;

use axum::Router;
use axum::http::{HeaderValue, StatusCode};
use axum::routing::get;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router.
///
/// `cors_origin` of `None` allows any origin.
pub fn app(state: AppState, cors_origin: Option<HeaderValue>) -> Router {
    let origin = match cors_origin {
        Some(origin) => AllowOrigin::exact(origin),
        None => AllowOrigin::from(Any),
    };
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/all_buildings", get(buildings::all_buildings))
        .route("/all_buildings/", get(buildings::all_buildings))
        .route("/result/{building_code}", get(result::result))
        .route("/result/{building_code}/", get(result::result))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
