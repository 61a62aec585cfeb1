use serde::{Deserialize, Serialize};
use typedex_protocol::SpeciesDetail;

use super::normalize_name;

/// A species and its one or two types, in slot order.
///
/// Type names are weak references into the type table; a name with no
/// matching [`TypeRecord`](super::TypeRecord) resolves as neutral.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesRecord {
    pub name: String,
    pub types: Vec<String>,
}

impl SpeciesRecord {
    pub fn new(name: &str, types: &[&str]) -> Self {
        Self {
            name: normalize_name(name),
            types: types.iter().map(|t| normalize_name(t)).collect(),
        }
    }

    /// Primary (slot 1) type
    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(String::as_str)
    }

    pub fn is_dual_typed(&self) -> bool {
        self.types.len() == 2
    }
}

impl From<SpeciesDetail> for SpeciesRecord {
    fn from(detail: SpeciesDetail) -> Self {
        Self {
            name: normalize_name(&detail.name),
            types: detail
                .type_names()
                .iter()
                .map(|t| normalize_name(t))
                .collect(),
        }
    }
}
