use chrono::{DateTime, Utc};

use crate::domain::repository::CodeStore;
use crate::domain::types::{SessionClaim, normalize_code};
use crate::error::GateServiceError;

pub struct ValidateCodeInput {
    /// Submitted code as received, if the request carried a usable string at all.
    pub code: Option<String>,
}

/// Validates a submitted access code against the issued-code store.
///
/// Stateless and read-only: every call is independent, a still-valid code
/// validates successfully any number of times. `now` is injected so expiry
/// is testable without the wall clock.
pub struct ValidateCodeUseCase<S>
where
    S: CodeStore,
{
    pub store: S,
}

impl<S> ValidateCodeUseCase<S>
where
    S: CodeStore,
{
    pub async fn execute(
        &self,
        input: ValidateCodeInput,
        now: DateTime<Utc>,
    ) -> Result<SessionClaim, GateServiceError> {
        // 1. No usable code → 400, without ever touching the store
        let raw = input.code.ok_or(GateServiceError::MissingCode)?;
        if raw.trim().is_empty() {
            return Err(GateServiceError::MissingCode);
        }

        // 2. Canonical comparison form for both sides
        let normalized = normalize_code(&raw);

        // 3. Snapshot of issued codes, in store order
        let issued = self.store.list_issued_codes().await?;

        // 4. First record whose normalized code matches wins; ties between
        //    duplicate codes are resolved by store order, even if the first
        //    occurrence is expired.
        let matched = issued
            .iter()
            .find(|c| normalize_code(&c.code) == normalized)
            .ok_or(GateServiceError::InvalidCode)?;

        // 5. Expired at or after the expiry instant
        if matched.is_expired(now) {
            return Err(GateServiceError::CodeExpired);
        }

        // 6. Claim carries identity and entitlement only, never the code
        Ok(SessionClaim::from(matched))
    }
}
