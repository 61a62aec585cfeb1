//! Catalog sync: remote listing -> detail fetches -> local store
//!
//! Syncs overwrite records by key, so re-running one converges on the remote
//! contents. A failed fetch aborts the call; records written before it stay.

use std::sync::Arc;

use futures_util::stream::{self, StreamExt, TryStreamExt};
use tracing::{debug, info, warn};
use typedex_dex::{SpeciesRecord, TypeRecord, builtin_type_records};
use typedex_store::{Record, Store, Table};

use crate::Error;
use crate::catalog::CatalogSource;

/// Outcome of one table sync
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    pub table: Table,
    pub written: usize,
}

pub struct Syncer<S> {
    source: Arc<S>,
    store: Store,
    concurrency: usize,
}

impl<S> std::fmt::Debug for Syncer<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Syncer")
            .field("store", &self.store)
            .field("concurrency", &self.concurrency)
            .finish_non_exhaustive()
    }
}

impl<S: CatalogSource> Syncer<S> {
    pub fn new(source: Arc<S>, store: Store, concurrency: usize) -> Self {
        Self {
            source,
            store,
            concurrency: concurrency.max(1),
        }
    }

    pub fn source(&self) -> &Arc<S> {
        &self.source
    }

    /// Fetch every type's relations and store them as [`TypeRecord`]s
    pub async fn sync_types(&self) -> Result<SyncReport, Error> {
        let listing = self.source.type_listing().await?;
        info!(count = listing.len(), "Syncing types");

        let written = stream::iter(listing)
            .map(|entry| async move { self.source.type_detail(&entry.name).await })
            .buffer_unordered(self.concurrency)
            .map_ok(TypeRecord::from)
            .try_fold(0, |written, record| self.write(written, record))
            .await?;

        info!(written, "Type sync complete");
        Ok(SyncReport {
            table: Table::Types,
            written,
        })
    }

    /// Fetch every species' types and store them as [`SpeciesRecord`]s
    pub async fn sync_species(&self) -> Result<SyncReport, Error> {
        let listing = self.source.species_listing().await?;
        info!(count = listing.len(), "Syncing species");

        let written = stream::iter(listing)
            .map(|entry| async move { self.source.species_detail(&entry.name).await })
            .buffer_unordered(self.concurrency)
            .map_ok(SpeciesRecord::from)
            .try_fold(0, |written, record| self.write(written, record))
            .await?;

        info!(written, "Species sync complete");
        Ok(SyncReport {
            table: Table::Species,
            written,
        })
    }

    /// Run both syncs concurrently. Succeeds only if both do; when both
    /// fail the type-sync error is returned.
    pub async fn sync_all(&self) -> Result<(SyncReport, SyncReport), Error> {
        let (types, species) = tokio::join!(self.sync_types(), self.sync_species());

        match (types, species) {
            (Ok(types), Ok(species)) => Ok((types, species)),
            (Err(e), species) => {
                if let Err(other) = species {
                    warn!(error = %other, "Species sync also failed");
                }
                Err(e)
            }
            (Ok(_), Err(e)) => Err(e),
        }
    }

    /// Write the built-in 18-type chart without touching the network
    pub async fn seed_builtin_types(&self) -> Result<SyncReport, Error> {
        let mut written = 0;
        for record in builtin_type_records() {
            written = self.write(written, record).await?;
        }

        info!(written, "Seeded built-in type chart");
        Ok(SyncReport {
            table: Table::Types,
            written,
        })
    }

    async fn write<R: Record>(&self, written: usize, record: R) -> Result<usize, Error> {
        self.store.put(&record).await?;
        debug!(table = %R::TABLE, key = record.key(), "Synced record");
        Ok(written + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FetchError;
    use crate::catalog::memory::MemoryCatalog;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    async fn setup() -> (TempDir, Store, Syncer<MemoryCatalog>) {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path()).await.unwrap();
        let syncer = Syncer::new(Arc::new(MemoryCatalog::with_builtin()), store.clone(), 4);
        (dir, store, syncer)
    }

    async fn snapshot(store: &Store) -> BTreeMap<String, TypeRecord> {
        store
            .load_all::<TypeRecord>()
            .await
            .unwrap()
            .into_iter()
            .map(|t| (t.name.clone(), t))
            .collect()
    }

    #[tokio::test]
    async fn test_sync_types_writes_every_type() {
        let (_dir, store, syncer) = setup().await;

        let report = syncer.sync_types().await.unwrap();

        assert_eq!(report, SyncReport { table: Table::Types, written: 18 });
        let fire: TypeRecord = store.get("fire").await.unwrap().unwrap();
        assert_eq!(fire.multiplier("grass"), 2.0);
    }

    #[tokio::test]
    async fn test_sync_types_is_idempotent() {
        let (_dir, store, syncer) = setup().await;

        syncer.sync_types().await.unwrap();
        let once = snapshot(&store).await;
        syncer.sync_types().await.unwrap();
        let twice = snapshot(&store).await;

        assert_eq!(once, twice);
    }

    #[tokio::test]
    async fn test_sync_species_keeps_type_order() {
        let (_dir, store, syncer) = setup().await;

        let report = syncer.sync_species().await.unwrap();

        assert_eq!(report.written, 4);
        let charizard: SpeciesRecord = store.get("charizard").await.unwrap().unwrap();
        assert_eq!(charizard.types, vec!["fire", "flying"]);
    }

    #[tokio::test]
    async fn test_failed_detail_fetch_aborts_with_resource() {
        let (_dir, store, syncer) = setup().await;
        syncer.source().fail_on("type/water");

        let err = syncer.sync_types().await.unwrap_err();

        assert_eq!(err.resource(), Some("type/water"));
        assert!(matches!(
            err,
            Error::RemoteFetchFailed { source: FetchError::Status(503), .. }
        ));
        let water: Option<TypeRecord> = store.get("water").await.unwrap();
        assert!(water.is_none());
    }

    #[tokio::test]
    async fn test_failed_listing_writes_nothing() {
        let (_dir, store, syncer) = setup().await;
        syncer.source().fail_on("pokemon");

        let err = syncer.sync_species().await.unwrap_err();

        assert_eq!(err.resource(), Some("pokemon"));
        assert_eq!(store.count(Table::Species).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_rerun_after_failure_converges() {
        let (_dir, store, syncer) = setup().await;
        syncer.source().fail_on("type/water");
        assert!(syncer.sync_types().await.is_err());

        syncer.source().heal();
        syncer.sync_types().await.unwrap();

        assert_eq!(store.count(Table::Types).await.unwrap(), 18);
    }

    #[tokio::test]
    async fn test_sync_all_reports_both() {
        let (_dir, _store, syncer) = setup().await;

        let (types, species) = syncer.sync_all().await.unwrap();

        assert_eq!(types.table, Table::Types);
        assert_eq!(species.table, Table::Species);
        assert_eq!(species.written, 4);
    }

    #[tokio::test]
    async fn test_sync_all_fails_if_either_fails() {
        let (_dir, store, syncer) = setup().await;
        syncer.source().fail_on("pokemon/pikachu");

        let err = syncer.sync_all().await.unwrap_err();

        assert_eq!(err.resource(), Some("pokemon/pikachu"));
        // The type sync still ran to completion
        assert_eq!(store.count(Table::Types).await.unwrap(), 18);
    }

    #[tokio::test]
    async fn test_sync_all_prefers_type_error() {
        let (_dir, _store, syncer) = setup().await;
        syncer.source().fail_on("type");
        syncer.source().fail_on("pokemon");

        let err = syncer.sync_all().await.unwrap_err();

        assert_eq!(err.resource(), Some("type"));
    }

    #[tokio::test]
    async fn test_seed_builtin_types_offline() {
        let (_dir, store, syncer) = setup().await;

        let report = syncer.seed_builtin_types().await.unwrap();

        assert_eq!(report.written, 18);
        assert_eq!(syncer.source().request_count(), 0);
        let ghost: TypeRecord = store.get("ghost").await.unwrap().unwrap();
        assert_eq!(ghost.multiplier("normal"), 0.0);
    }
}
