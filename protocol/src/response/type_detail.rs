use serde::{Deserialize, Serialize};

use super::NamedResource;

/// Type detail as served by `/type/NAME`.
///
/// Only the offensive relations are kept; the defensive `*_from` lists and
/// every other field of the payload are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDetail {
    pub name: String,
    pub damage_relations: DamageRelationsWire,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageRelationsWire {
    #[serde(default)]
    pub double_damage_to: Vec<NamedResource>,
    #[serde(default)]
    pub half_damage_to: Vec<NamedResource>,
    #[serde(default)]
    pub no_damage_to: Vec<NamedResource>,
}
