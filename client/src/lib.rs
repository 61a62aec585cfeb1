//! Offline-capable type-matchup lookups.
//!
//! [`Typedex`] is the narrow surface a UI calls: sync the catalog into the
//! local store on demand, then resolve matchups, search species and compute
//! stats from what is stored, without touching the network.
//!
//! ```text
//! UI ──> Typedex::sync_all ──> CatalogSource ──> Store
//! UI ──> Typedex::matchup / search / total_hp ──> Store (read-only)
//! ```

pub mod catalog;
pub mod config;
mod error;
mod roster;
pub mod sync;

use std::sync::Arc;

use tracing::debug;
use typedex_dex::normalize_name;
use typedex_dex::query;
use typedex_store::{Store, StoreError};

pub use catalog::{CatalogSource, HttpCatalog};
pub use config::{Settings, load_settings};
pub use error::{Error, FetchError};
pub use sync::{SyncReport, Syncer};

pub use typedex_dex::{
    DexError, EffectivenessBand, MatchupPolicy, RosterEntry, SpeciesRecord, TypeChart, TypeRecord,
};
pub use typedex_store::Table;

/// Result of resolving one attack against a set of defending types
#[derive(Debug, Clone, PartialEq)]
pub struct Matchup {
    pub attack_type: String,
    pub defend_types: Vec<String>,
    pub multiplier: f64,
    pub band: EffectivenessBand,
}

impl Matchup {
    /// Damage after applying this matchup's multiplier
    pub fn final_damage(&self, base_damage: f64) -> Result<f64, DexError> {
        query::final_damage(base_damage, self.multiplier)
    }
}

/// Attacking types grouped by how they fare against a defender
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefensiveProfile {
    pub weaknesses: Vec<String>,
    pub resistances: Vec<String>,
    pub immunities: Vec<String>,
}

/// Local store, catalog sync and resolver behind one handle
#[derive(Debug)]
pub struct Typedex<S = HttpCatalog> {
    store: Store,
    syncer: Syncer<S>,
    policy: MatchupPolicy,
}

impl Typedex<HttpCatalog> {
    /// Open the store at `settings.store.data_dir` and target the configured catalog
    pub async fn open(settings: &Settings) -> Result<Self, Error> {
        let store = Store::open(&settings.store.data_dir).await?;
        let source = HttpCatalog::new(&settings.catalog);
        Ok(Self::with_source(store, source, settings))
    }
}

impl<S: CatalogSource> Typedex<S> {
    pub fn with_source(store: Store, source: S, settings: &Settings) -> Self {
        let syncer = Syncer::new(Arc::new(source), store.clone(), settings.catalog.concurrency);
        Self {
            store,
            syncer,
            policy: settings.matchup,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn syncer(&self) -> &Syncer<S> {
        &self.syncer
    }

    pub fn policy(&self) -> MatchupPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: MatchupPolicy) {
        self.policy = policy;
    }

    pub async fn sync_types(&self) -> Result<SyncReport, Error> {
        self.syncer.sync_types().await
    }

    pub async fn sync_species(&self) -> Result<SyncReport, Error> {
        self.syncer.sync_species().await
    }

    pub async fn sync_all(&self) -> Result<(SyncReport, SyncReport), Error> {
        self.syncer.sync_all().await
    }

    pub async fn seed_builtin_types(&self) -> Result<SyncReport, Error> {
        self.syncer.seed_builtin_types().await
    }

    /// Stored record for an attacking type, or [`DexError::UnknownType`]
    async fn attacker(&self, attack_type: &str) -> Result<TypeRecord, Error> {
        let name = normalize_name(attack_type);
        match self.store.get::<TypeRecord>(&name).await {
            Ok(Some(record)) => Ok(record),
            Ok(None) | Err(StoreError::InvalidKey(_)) => Err(DexError::UnknownType(name).into()),
            Err(e) => Err(e.into()),
        }
    }

    /// Multiplier of one attacking type against one defending type
    pub async fn multiplier(&self, attack_type: &str, defend_type: &str) -> Result<f64, Error> {
        Ok(self.attacker(attack_type).await?.multiplier(defend_type))
    }

    /// Product of multipliers over `defend_types`, with the configured policy applied
    pub async fn total_multiplier<T: AsRef<str>>(
        &self,
        attack_type: &str,
        defend_types: &[T],
    ) -> Result<f64, Error> {
        let attacker = self.attacker(attack_type).await?;
        Ok(attacker.total_multiplier(defend_types, self.policy))
    }

    /// Total multiplier and its band in one call
    pub async fn matchup<T: AsRef<str>>(
        &self,
        attack_type: &str,
        defend_types: &[T],
    ) -> Result<Matchup, Error> {
        let attacker = self.attacker(attack_type).await?;
        let multiplier = attacker.total_multiplier(defend_types, self.policy);
        let band = EffectivenessBand::classify(multiplier)?;
        debug!(attack = %attacker.name, multiplier, %band, "Resolved matchup");

        Ok(Matchup {
            attack_type: attacker.name,
            defend_types: defend_types
                .iter()
                .map(|t| normalize_name(t.as_ref()))
                .collect(),
            multiplier,
            band,
        })
    }

    pub fn classify(&self, total_multiplier: f64) -> Result<EffectivenessBand, Error> {
        Ok(EffectivenessBand::classify(total_multiplier)?)
    }

    pub fn final_damage(&self, base_damage: f64, total_multiplier: f64) -> Result<f64, Error> {
        Ok(query::final_damage(base_damage, total_multiplier)?)
    }

    pub fn total_hp(&self, base_hp: f64, level: f64) -> Result<f64, Error> {
        Ok(typedex_dex::total_hp(base_hp, level)?)
    }

    /// Species whose name contains `query` (case-insensitive), sorted by name
    pub async fn search(&self, query: &str) -> Result<Vec<SpeciesRecord>, Error> {
        let records = self.store.load_all::<SpeciesRecord>().await?;
        Ok(query::search(records, query)?)
    }

    /// Stored record for one species
    pub async fn species(&self, name: &str) -> Result<Option<SpeciesRecord>, Error> {
        match self.store.get::<SpeciesRecord>(&normalize_name(name)).await {
            Err(StoreError::InvalidKey(_)) => Ok(None),
            other => Ok(other?),
        }
    }

    /// Every stored type, for chart-wide queries
    pub async fn type_chart(&self) -> Result<TypeChart, Error> {
        let records: Vec<TypeRecord> = self.store.load_all().await?;
        Ok(TypeChart::from_records(records))
    }

    /// Weaknesses, resistances and immunities of a defending type combination
    pub async fn defensive_profile<T: AsRef<str>>(
        &self,
        defend_types: &[T],
    ) -> Result<DefensiveProfile, Error> {
        let chart = self.type_chart().await?;
        Ok(DefensiveProfile {
            weaknesses: query::weaknesses(&chart, defend_types),
            resistances: query::resistances(&chart, defend_types),
            immunities: query::immunities(&chart, defend_types),
        })
    }
}
