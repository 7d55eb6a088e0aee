#![allow(async_fn_in_trait)]

use crate::domain::types::IssuedCode;
use crate::error::GateServiceError;

/// Port for the read-only source of issued codes.
///
/// Implementations return the full current snapshot in store order; the
/// validator never mutates anything through this port. Failure to read or
/// parse the underlying source is `StoreUnavailable`.
pub trait CodeStore: Send + Sync {
    async fn list_issued_codes(&self) -> Result<Vec<IssuedCode>, GateServiceError>;
}
