use tracing::info;
use typedex_dex::{DexError, RosterEntry};
use typedex_store::StoreError;

use crate::catalog::CatalogSource;
use crate::{Error, Typedex};

fn roster_key_error(name: &str) -> Error {
    DexError::InvalidInput(format!("invalid roster name: {:?}", name)).into()
}

impl<S: CatalogSource> Typedex<S> {
    /// Save a species name to the local roster. Adding an existing name is a no-op.
    pub async fn roster_add(&self, name: &str) -> Result<RosterEntry, Error> {
        let entry = RosterEntry::new(name);
        if entry.name.is_empty() {
            return Err(DexError::InvalidInput("roster name cannot be empty".to_string()).into());
        }

        match self.store().put(&entry).await {
            Ok(()) => {
                info!(name = %entry.name, "Added to roster");
                Ok(entry)
            }
            Err(StoreError::InvalidKey(_)) => Err(roster_key_error(&entry.name)),
            Err(e) => Err(e.into()),
        }
    }

    /// Remove a name from the roster. Returns whether it was present.
    pub async fn roster_remove(&self, name: &str) -> Result<bool, Error> {
        let entry = RosterEntry::new(name);
        match self.store().delete::<RosterEntry>(&entry.name).await {
            Ok(removed) => {
                if removed {
                    info!(name = %entry.name, "Removed from roster");
                }
                Ok(removed)
            }
            Err(StoreError::InvalidKey(_)) => Err(roster_key_error(&entry.name)),
            Err(e) => Err(e.into()),
        }
    }

    /// Every roster entry, sorted by name
    pub async fn roster_list(&self) -> Result<Vec<RosterEntry>, Error> {
        let mut entries: Vec<RosterEntry> = self.store().load_all().await?;
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::memory::MemoryCatalog;
    use crate::{DexError, Error, Settings, Typedex};
    use tempfile::TempDir;
    use typedex_store::Store;

    async fn open() -> (TempDir, Typedex<MemoryCatalog>) {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path()).await.unwrap();
        let dex = Typedex::with_source(store, MemoryCatalog::with_builtin(), &Settings::default());
        (dir, dex)
    }

    #[tokio::test]
    async fn test_roster_add_list_remove() {
        let (_dir, dex) = open().await;

        dex.roster_add(" Snorlax ").await.unwrap();
        dex.roster_add("pikachu").await.unwrap();
        dex.roster_add("pikachu").await.unwrap();

        let names: Vec<_> = dex
            .roster_list()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["pikachu", "snorlax"]);

        assert!(dex.roster_remove("SNORLAX").await.unwrap());
        assert!(!dex.roster_remove("snorlax").await.unwrap());
        assert_eq!(dex.roster_list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_roster_rejects_bad_names() {
        let (_dir, dex) = open().await;

        assert!(matches!(
            dex.roster_add("   ").await,
            Err(Error::Dex(DexError::InvalidInput(_)))
        ));
        assert!(matches!(
            dex.roster_add("mr/mime").await,
            Err(Error::Dex(DexError::InvalidInput(_)))
        ));
    }

    #[tokio::test]
    async fn test_roster_survives_reopen() {
        let (dir, dex) = open().await;
        dex.roster_add("eevee").await.unwrap();
        drop(dex);

        let store = Store::open(dir.path()).await.unwrap();
        let reopened = Typedex::with_source(store, MemoryCatalog::default(), &Settings::default());
        assert_eq!(reopened.roster_list().await.unwrap().len(), 1);
    }
}
