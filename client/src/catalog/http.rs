use async_trait::async_trait;
use tracing::{debug, warn};
use typedex_protocol::{
    CatalogRequest, NamedResource, ParseError, SpeciesDetail, TypeDetail, parse_resource_list,
    parse_species_detail, parse_type_detail,
};

use super::CatalogSource;
use crate::config::CatalogSettings;
use crate::{Error, FetchError};

/// [`CatalogSource`] backed by a PokeAPI-compatible HTTP service
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    http: reqwest::Client,
    base_url: String,
    page_size: u32,
}

impl HttpCatalog {
    pub fn new(settings: &CatalogSettings) -> Self {
        Self::with_client(reqwest::Client::new(), settings)
    }

    /// Use a preconfigured client (timeouts, proxies) instead of the default
    pub fn with_client(http: reqwest::Client, settings: &CatalogSettings) -> Self {
        Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            page_size: settings.page_size.max(1),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        debug!(%url, "Fetching catalog resource");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        Ok(response.text().await?)
    }

    async fn fetch_url<T>(
        &self,
        url: &str,
        resource: &str,
        parse: fn(&str) -> Result<T, ParseError>,
    ) -> Result<T, Error> {
        let result = match self.fetch_text(url).await {
            Ok(body) => parse(&body).map_err(FetchError::from),
            Err(e) => Err(e),
        };

        result.map_err(|e| {
            warn!(resource, error = %e, "Catalog fetch failed");
            Error::fetch(resource, e)
        })
    }

    async fn fetch<T>(
        &self,
        request: CatalogRequest,
        parse: fn(&str) -> Result<T, ParseError>,
    ) -> Result<T, Error> {
        let url = request.url(&self.base_url);
        self.fetch_url(&url, &request.resource_id(), parse).await
    }

    /// Fetch `first`, then follow each page's `next` link until there is none
    async fn list_all(&self, first: CatalogRequest) -> Result<Vec<NamedResource>, Error> {
        let resource = first.resource_id();
        let mut url = first.url(&self.base_url);
        let mut entries = Vec::new();

        loop {
            let list = self.fetch_url(&url, &resource, parse_resource_list).await?;
            let more = list.has_next() && !list.results.is_empty();
            entries.extend(list.results);

            match list.next {
                Some(next) if more && next != url => url = next,
                _ => break,
            }
        }

        debug!(%resource, count = entries.len(), "Listing complete");
        Ok(entries)
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn type_listing(&self) -> Result<Vec<NamedResource>, Error> {
        self.list_all(CatalogRequest::TypeListing {
            limit: self.page_size,
            offset: 0,
        })
        .await
    }

    async fn type_detail(&self, name: &str) -> Result<TypeDetail, Error> {
        self.fetch(CatalogRequest::TypeDetail(name.to_string()), parse_type_detail)
            .await
    }

    async fn species_listing(&self) -> Result<Vec<NamedResource>, Error> {
        self.list_all(CatalogRequest::SpeciesListing {
            limit: self.page_size,
            offset: 0,
        })
        .await
    }

    async fn species_detail(&self, name: &str) -> Result<SpeciesDetail, Error> {
        self.fetch(CatalogRequest::SpeciesDetail(name.to_string()), parse_species_detail)
            .await
    }
}
