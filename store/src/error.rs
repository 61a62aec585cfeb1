use std::path::PathBuf;

use thiserror::Error;

use crate::Table;

#[derive(Error, Debug)]
pub enum StoreError {
    /// The table was never created; reopen the store with it requested
    #[error("Store not initialized: table '{table}' does not exist")]
    NotInitialized { table: Table },

    #[error("Invalid record key: {0:?}")]
    InvalidKey(String),

    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt record at {}: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported store schema version {found} (this build reads up to {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| StoreError::Io { path, source }
    }
}
