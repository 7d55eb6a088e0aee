use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A time-limited shared-secret login code, as stored in the code store.
///
/// Entries are created and revoked entirely by the external issuing process;
/// this service only reads them.
#[derive(Debug, Clone, Deserialize)]
pub struct IssuedCode {
    /// Shared-secret code, compared case-insensitively.
    pub code: String,
    /// Opaque identity the code authenticates.
    pub subject_id: String,
    /// Human-readable name for the subject.
    pub display_name: String,
    /// Entitlement tier associated with the subject.
    pub plan: String,
    /// Absolute expiry instant.
    pub expires_at: DateTime<Utc>,
}

impl IssuedCode {
    /// A code is expired at the exact expiry instant and after it.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Authenticated identity returned on successful validation. Never carries
/// the code itself or expiry internals.
#[derive(Debug, Clone, Serialize)]
pub struct SessionClaim {
    pub subject_id: String,
    pub display_name: String,
    pub plan: String,
}

impl From<&IssuedCode> for SessionClaim {
    fn from(code: &IssuedCode) -> Self {
        Self {
            subject_id: code.subject_id.clone(),
            display_name: code.display_name.clone(),
            plan: code.plan.clone(),
        }
    }
}

/// Canonical comparison form: surrounding whitespace stripped, uppercased.
/// Applied to both submitted and stored codes before comparison.
pub fn normalize_code(raw: &str) -> String {
    raw.trim().to_uppercase()
}
