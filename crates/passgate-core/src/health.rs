use axum::http::StatusCode;

/// Handler for `GET /healthz` — liveness check.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Handler for `GET /readyz` — readiness check.
///
/// The gate service has no connections to warm up (its store is re-read per
/// request), so readiness equals liveness here.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}
