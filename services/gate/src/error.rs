use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Gate service error variants.
///
/// Expected authentication outcomes (missing/invalid/expired code) are
/// ordinary typed results; only store and other infrastructure faults carry
/// an error chain.
#[derive(Debug, thiserror::Error)]
pub enum GateServiceError {
    #[error("Code required")]
    MissingCode,
    #[error("Invalid code")]
    InvalidCode,
    #[error("Code expired")]
    CodeExpired,
    #[error("Server error")]
    StoreUnavailable(#[source] anyhow::Error),
    #[error("Server error")]
    Internal(#[from] anyhow::Error),
}

impl GateServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingCode => "MISSING_CODE",
            Self::InvalidCode => "INVALID_CODE",
            Self::CodeExpired => "CODE_EXPIRED",
            Self::StoreUnavailable(_) => "STORE_UNAVAILABLE",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for GateServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingCode => StatusCode::BAD_REQUEST,
            Self::InvalidCode | Self::CodeExpired => StatusCode::UNAUTHORIZED,
            Self::StoreUnavailable(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status
        // for all requests, and 4xx are expected client outcomes. Store faults
        // must keep their chain in the logs while the body stays generic.
        match &self {
            Self::StoreUnavailable(e) | Self::Internal(e) => {
                tracing::error!(error = %e, kind = self.kind(), "server error");
            }
            _ => {}
        }
        let body = serde_json::json!({
            "valid": false,
            "error": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
