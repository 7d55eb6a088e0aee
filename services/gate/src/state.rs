use std::path::PathBuf;

use crate::infra::file::FileCodeStore;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub codes_path: PathBuf,
}

impl AppState {
    pub fn code_store(&self) -> FileCodeStore {
        FileCodeStore {
            path: self.codes_path.clone(),
        }
    }
}
