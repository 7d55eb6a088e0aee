use axum::{Router, routing::get, routing::post};
use tower_http::trace::TraceLayer;

use passgate_core::health::{healthz, readyz};
use passgate_core::middleware::request_id_layer;

use crate::handlers::validate::validate_code;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Validation — POST only; axum answers 405 for other methods
        .route("/validate", post(validate_code))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
