use std::path::PathBuf;

use anyhow::Context as _;
use serde::Deserialize;

use crate::domain::repository::CodeStore;
use crate::domain::types::IssuedCode;
use crate::error::GateServiceError;

/// Wire format of the code-store document.
#[derive(Deserialize)]
struct CodeDocument {
    /// Issued codes in store order. A document without the key reads as empty.
    #[serde(default)]
    codes: Vec<IssuedCode>,
}

/// File-backed code store.
///
/// Re-reads and re-parses the document on every call, so issuance-side
/// updates to the file are visible to the next validation without a restart.
#[derive(Clone)]
pub struct FileCodeStore {
    pub path: PathBuf,
}

impl CodeStore for FileCodeStore {
    async fn list_issued_codes(&self) -> Result<Vec<IssuedCode>, GateServiceError> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("read code store at {}", self.path.display()))
            .map_err(GateServiceError::StoreUnavailable)?;
        let document: CodeDocument = serde_json::from_str(&contents)
            .with_context(|| format!("parse code store at {}", self.path.display()))
            .map_err(GateServiceError::StoreUnavailable)?;
        Ok(document.codes)
    }
}
