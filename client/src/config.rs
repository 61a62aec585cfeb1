//! Layered settings: defaults, then an optional TOML file, then `TYPEDEX__*` env vars

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::info;
use typedex_dex::MatchupPolicy;

use crate::Error;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Environment variable prefix; nesting uses `__` (e.g. `TYPEDEX__STORE__DATA_DIR`)
pub const ENV_PREFIX: &str = "TYPEDEX";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub catalog: CatalogSettings,
    pub store: StoreSettings,
    pub matchup: MatchupPolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Base URL of a PokeAPI-compatible catalog
    pub base_url: String,
    /// Listing page size
    pub page_size: u32,
    /// Detail requests in flight per sync
    pub concurrency: usize,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: 200,
            concurrency: 8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    pub data_dir: PathBuf,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".typedex"),
        }
    }
}

/// Load settings, layering an optional file and the environment over defaults.
///
/// A `path` that is given must exist.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, Error> {
    let mut builder = Config::builder().add_source(Config::try_from(&Settings::default())?);

    if let Some(path) = path {
        info!("Loading settings from {}", path.display());
        builder = builder.add_source(File::from(path).required(true));
    }

    let settings = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize::<Settings>()?;

    Ok(settings)
}
