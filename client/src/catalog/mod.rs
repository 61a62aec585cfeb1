//! Remote catalog access

mod http;
#[cfg(test)]
pub(crate) mod memory;

use async_trait::async_trait;
use typedex_protocol::{NamedResource, SpeciesDetail, TypeDetail};

use crate::Error;

pub use http::HttpCatalog;

/// Read-only source of type and species records.
///
/// Every failure is an [`Error::RemoteFetchFailed`] naming the resource that
/// could not be fetched.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Every type in the catalog
    async fn type_listing(&self) -> Result<Vec<NamedResource>, Error>;

    /// Damage relations of one type
    async fn type_detail(&self, name: &str) -> Result<TypeDetail, Error>;

    /// Every species in the catalog, across all listing pages
    async fn species_listing(&self) -> Result<Vec<NamedResource>, Error>;

    /// Ordered types of one species
    async fn species_detail(&self, name: &str) -> Result<SpeciesDetail, Error>;
}
