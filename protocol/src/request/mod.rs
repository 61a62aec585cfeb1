/// Read-only resources the catalog exposes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogRequest {
    /// GET /type?limit=N&offset=M
    TypeListing { limit: u32, offset: u32 },

    /// GET /type/NAME
    TypeDetail(String),

    /// GET /pokemon?limit=N&offset=M
    SpeciesListing { limit: u32, offset: u32 },

    /// GET /pokemon/NAME
    SpeciesDetail(String),
}

impl CatalogRequest {
    /// Path relative to the catalog base URL
    pub fn to_path(&self) -> String {
        match self {
            Self::TypeListing { limit, offset } => {
                format!("type?limit={}&offset={}", limit, offset)
            }
            Self::TypeDetail(name) => format!("type/{}", name),
            Self::SpeciesListing { limit, offset } => {
                format!("pokemon?limit={}&offset={}", limit, offset)
            }
            Self::SpeciesDetail(name) => format!("pokemon/{}", name),
        }
    }

    /// Stable identifier used in error reports and logs.
    ///
    /// Paging parameters are left out so every page of a listing reports
    /// the same resource.
    pub fn resource_id(&self) -> String {
        match self {
            Self::TypeListing { .. } => "type".to_string(),
            Self::TypeDetail(name) => format!("type/{}", name),
            Self::SpeciesListing { .. } => "pokemon".to_string(),
            Self::SpeciesDetail(name) => format!("pokemon/{}", name),
        }
    }

    /// Full URL for this request against `base_url`
    pub fn url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.to_path())
    }
}

impl std::fmt::Display for CatalogRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.resource_id())
    }
}
