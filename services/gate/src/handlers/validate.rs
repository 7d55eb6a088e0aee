use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

use crate::domain::types::SessionClaim;
use crate::error::GateServiceError;
use crate::state::AppState;
use crate::usecase::validate::{ValidateCodeInput, ValidateCodeUseCase};

#[derive(Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub user: SessionClaim,
}

// ── POST /validate ────────────────────────────────────────────────────────────

pub async fn validate_code(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, GateServiceError> {
    // A missing, non-string, or unreadable `code` all collapse into the same
    // 400 "Code required" surface; the usecase rejects empty-after-trim.
    let code = body
        .ok()
        .and_then(|Json(v)| v.get("code").and_then(Value::as_str).map(str::to_owned));

    let usecase = ValidateCodeUseCase {
        store: state.code_store(),
    };
    let claim = usecase
        .execute(ValidateCodeInput { code }, Utc::now())
        .await?;

    Ok((
        StatusCode::OK,
        Json(ValidateResponse {
            valid: true,
            user: claim,
        }),
    ))
}
