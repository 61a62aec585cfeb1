use serde::{Deserialize, Serialize};

/// `{name, url}` reference used throughout the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// One page of a listing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceList {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

impl ResourceList {
    /// Whether the server advertised another page
    pub fn has_next(&self) -> bool {
        self.next.as_deref().is_some_and(|n| !n.is_empty())
    }

    /// Names of every entry on this page
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.results.iter().map(|r| r.name.as_str())
    }
}
