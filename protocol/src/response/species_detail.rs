use serde::{Deserialize, Serialize};

use super::NamedResource;

/// Species detail as served by `/pokemon/NAME`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesDetail {
    pub name: String,
    pub types: Vec<SpeciesTypeSlot>,
}

/// `{slot, type: {name, url}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesTypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub type_ref: NamedResource,
}

impl SpeciesDetail {
    /// Type names in slot order
    pub fn type_names(&self) -> Vec<String> {
        self.types.iter().map(|s| s.type_ref.name.clone()).collect()
    }
}
