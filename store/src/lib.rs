//! Durable local store for catalog records.
//!
//! Layout under the store root:
//!
//! ```text
//! <root>/manifest.json        schema version + initialized tables
//! <root>/types/<name>.json    one TypeRecord per file
//! <root>/species/<name>.json  one SpeciesRecord per file
//! <root>/roster/<name>.json   one RosterEntry per file
//! ```
//!
//! Every write replaces a whole record atomically (temp file + rename), so
//! a record is either the previous version or the new one, never a mix.

mod error;
mod manifest;
mod record;

use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures_util::stream::{self, BoxStream, StreamExt, TryStreamExt};
use tokio::fs;
use tracing::{debug, info};

pub use error::StoreError;
pub use manifest::SCHEMA_VERSION;
pub use record::{Record, Table};

use manifest::Manifest;

const RECORD_EXT: &str = "json";

/// Lazy stream of records from one table
pub type RecordStream<R> = BoxStream<'static, Result<R, StoreError>>;

/// Handle to an opened store. Cheap to clone; clones share the same root.
#[derive(Debug, Clone)]
pub struct Store {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    root: PathBuf,
    tables: BTreeSet<Table>,
}

impl Store {
    /// Open (or create) a store at `root` with every known table
    pub async fn open(root: impl AsRef<Path>) -> Result<Self, StoreError> {
        Self::open_with_tables(root, &Table::ALL).await
    }

    /// Open (or create) a store, adding any of `tables` that are missing.
    ///
    /// Tables created by an earlier open stay available even when not listed.
    pub async fn open_with_tables(
        root: impl AsRef<Path>,
        tables: &[Table],
    ) -> Result<Self, StoreError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)
            .await
            .map_err(StoreError::io(&root))?;

        let mut manifest = Manifest::load(&root).await?.unwrap_or_default();
        let mut added = Vec::new();

        for table in tables {
            let dir = root.join(table.as_str());
            fs::create_dir_all(&dir).await.map_err(StoreError::io(&dir))?;
            if manifest.tables.insert(*table) {
                added.push(table.as_str());
            }
        }

        if !added.is_empty() || !Manifest::exists(&root).await {
            manifest.save(&root).await?;
        }
        if !added.is_empty() {
            info!(root = %root.display(), tables = ?added, "Added missing store tables");
        }

        debug!(root = %root.display(), tables = ?manifest.tables, "Opened local store");

        Ok(Self {
            inner: Arc::new(Inner {
                root,
                tables: manifest.tables,
            }),
        })
    }

    pub fn root(&self) -> &Path {
        &self.inner.root
    }

    /// Whether `table` has been initialized
    pub fn has_table(&self, table: Table) -> bool {
        self.inner.tables.contains(&table)
    }

    fn table_dir(&self, table: Table) -> Result<PathBuf, StoreError> {
        if !self.has_table(table) {
            return Err(StoreError::NotInitialized { table });
        }
        Ok(self.inner.root.join(table.as_str()))
    }

    fn record_path(&self, table: Table, key: &str) -> Result<PathBuf, StoreError> {
        let dir = self.table_dir(table)?;
        validate_key(key)?;
        Ok(dir.join(format!("{}.{}", key, RECORD_EXT)))
    }

    /// Insert or replace `record` under its key
    pub async fn put<R: Record>(&self, record: &R) -> Result<(), StoreError> {
        let path = self.record_path(R::TABLE, record.key())?;
        let bytes = serde_json::to_vec_pretty(record).map_err(|source| StoreError::Corrupt {
            path: path.clone(),
            source,
        })?;

        write_atomic(&path, &bytes).await?;
        debug!(table = %R::TABLE, key = record.key(), "Stored record");
        Ok(())
    }

    /// Fetch the record stored under `key`, or `None` when absent
    pub async fn get<R: Record>(&self, key: &str) -> Result<Option<R>, StoreError> {
        let path = self.record_path(R::TABLE, key)?;
        read_record(&path).await
    }

    /// Remove the record under `key`. Returns whether one existed.
    pub async fn delete<R: Record>(&self, key: &str) -> Result<bool, StoreError> {
        let path = self.record_path(R::TABLE, key)?;
        match fs::remove_file(&path).await {
            Ok(()) => {
                debug!(table = %R::TABLE, key, "Deleted record");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StoreError::Io { path, source: e }),
        }
    }

    /// Stream every record of `R`'s table, in unspecified order.
    ///
    /// The directory is re-read on every call, so each stream reflects the
    /// table as of when it is polled.
    pub async fn scan_all<R: Record>(&self) -> Result<RecordStream<R>, StoreError> {
        let dir = self.table_dir(R::TABLE)?;
        let entries = fs::read_dir(&dir).await.map_err(StoreError::io(&dir))?;

        let records = stream::unfold((Some(entries), dir), |(entries, dir)| async move {
            let mut entries = entries?;
            loop {
                match entries.next_entry().await {
                    Ok(Some(entry)) => {
                        let path = entry.path();
                        if !is_record_file(&path) {
                            continue;
                        }
                        match read_record::<R>(&path).await {
                            Ok(Some(record)) => return Some((Ok(record), (Some(entries), dir))),
                            // Removed between listing and reading
                            Ok(None) => continue,
                            Err(e) => return Some((Err(e), (Some(entries), dir))),
                        }
                    }
                    Ok(None) => return None,
                    Err(source) => {
                        let err = StoreError::Io {
                            path: dir.clone(),
                            source,
                        };
                        return Some((Err(err), (None, dir)));
                    }
                }
            }
        });

        Ok(records.boxed())
    }

    /// Collect every record of `R`'s table
    pub async fn load_all<R: Record>(&self) -> Result<Vec<R>, StoreError> {
        self.scan_all::<R>().await?.try_collect().await
    }

    /// Number of records in `table`
    pub async fn count(&self, table: Table) -> Result<usize, StoreError> {
        let dir = self.table_dir(table)?;
        let mut entries = fs::read_dir(&dir).await.map_err(StoreError::io(&dir))?;
        let mut count = 0;
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(StoreError::io(&dir))?
        {
            if is_record_file(&entry.path()) {
                count += 1;
            }
        }
        Ok(count)
    }
}

fn validate_key(key: &str) -> Result<(), StoreError> {
    let invalid = key.is_empty()
        || key.starts_with('.')
        || key.contains(['/', '\\', '\0']);
    if invalid {
        return Err(StoreError::InvalidKey(key.to_string()));
    }
    Ok(())
}

fn is_record_file(path: &Path) -> bool {
    let hidden = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_none_or(|n| n.starts_with('.'));
    !hidden && path.extension().and_then(|e| e.to_str()) == Some(RECORD_EXT)
}

async fn read_record<R: Record>(path: &Path) -> Result<Option<R>, StoreError> {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|source| StoreError::Corrupt {
            path: path.to_path_buf(),
            source,
        })
}

/// Write `bytes` to a hidden sibling, then rename over `path`
pub(crate) async fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| StoreError::InvalidKey(path.display().to_string()))?;
    let tmp = path.with_file_name(format!(".{}.tmp", file_name));

    fs::write(&tmp, bytes).await.map_err(StoreError::io(&tmp))?;
    fs::rename(&tmp, path).await.map_err(StoreError::io(path))
}
