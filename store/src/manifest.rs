use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::{StoreError, Table, write_atomic};

/// Current on-disk layout. Migrations only ever add tables.
pub const SCHEMA_VERSION: u32 = 1;

const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Manifest {
    pub version: u32,
    pub tables: BTreeSet<Table>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            version: SCHEMA_VERSION,
            tables: BTreeSet::new(),
        }
    }
}

impl Manifest {
    fn path(root: &Path) -> PathBuf {
        root.join(MANIFEST_FILE)
    }

    pub async fn exists(root: &Path) -> bool {
        fs::try_exists(Self::path(root)).await.unwrap_or(false)
    }

    pub async fn load(root: &Path) -> Result<Option<Self>, StoreError> {
        let path = Self::path(root);
        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::Io { path, source: e }),
        };

        let manifest: Manifest = serde_json::from_slice(&bytes)
            .map_err(|source| StoreError::Corrupt {
                path: path.clone(),
                source,
            })?;

        if manifest.version > SCHEMA_VERSION {
            return Err(StoreError::UnsupportedVersion {
                found: manifest.version,
                supported: SCHEMA_VERSION,
            });
        }
        Ok(Some(manifest))
    }

    pub async fn save(&self, root: &Path) -> Result<(), StoreError> {
        let path = Self::path(root);
        let bytes = serde_json::to_vec_pretty(self).map_err(|source| StoreError::Corrupt {
            path: path.clone(),
            source,
        })?;
        write_atomic(&path, &bytes).await
    }
}
