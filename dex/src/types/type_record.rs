//! Persisted type records and their offensive damage relations

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use typedex_protocol::{NamedResource, TypeDetail};

use super::normalize_name;

/// Highest total multiplier reported when [`MatchupPolicy::cap_at_double`] is on
pub const DOUBLE_CEILING: f64 = 2.0;

/// Relation of one attacking type to one defending type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    Immune,
    Half,
    Neutral,
    Double,
}

impl Relation {
    /// Damage multiplier for this relation
    pub fn multiplier(self) -> f64 {
        match self {
            Relation::Immune => 0.0,
            Relation::Half => 0.5,
            Relation::Neutral => 1.0,
            Relation::Double => 2.0,
        }
    }
}

/// Offensive relations of one type. Names absent from all three sets are neutral.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageRelations {
    pub double_damage_to: BTreeSet<String>,
    pub half_damage_to: BTreeSet<String>,
    pub no_damage_to: BTreeSet<String>,
}

impl DamageRelations {
    /// Relation against `defender`.
    ///
    /// The sets are expected to be disjoint. When the catalog lists a name in
    /// more than one set, the most restrictive one wins: no damage, then half,
    /// then double.
    pub fn relation_to(&self, defender: &str) -> Relation {
        if self.no_damage_to.contains(defender) {
            Relation::Immune
        } else if self.half_damage_to.contains(defender) {
            Relation::Half
        } else if self.double_damage_to.contains(defender) {
            Relation::Double
        } else {
            Relation::Neutral
        }
    }
}

/// Whether a total multiplier is clamped to [`DOUBLE_CEILING`].
///
/// Defaults to uncapped, which matches the game: a 4x weakness stays 4x.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchupPolicy {
    pub cap_at_double: bool,
}

impl MatchupPolicy {
    pub fn capped() -> Self {
        Self {
            cap_at_double: true,
        }
    }

    /// Apply the ceiling (if enabled) to a product of multipliers
    pub fn apply(&self, total: f64) -> f64 {
        if self.cap_at_double {
            total.min(DOUBLE_CEILING)
        } else {
            total
        }
    }
}

/// One attacking type as stored locally
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRecord {
    pub name: String,
    pub damage_relations: DamageRelations,
}

impl TypeRecord {
    pub fn new(name: &str, damage_relations: DamageRelations) -> Self {
        Self {
            name: normalize_name(name),
            damage_relations,
        }
    }

    /// Multiplier against a single defending type. Unknown defenders are neutral.
    pub fn multiplier(&self, defender: &str) -> f64 {
        self.damage_relations
            .relation_to(&normalize_name(defender))
            .multiplier()
    }

    /// Product of multipliers against every defending type, seeded at 1
    pub fn total_multiplier<S: AsRef<str>>(&self, defenders: &[S], policy: MatchupPolicy) -> f64 {
        let product = defenders
            .iter()
            .map(|t| self.multiplier(t.as_ref()))
            .product();
        policy.apply(product)
    }
}

impl From<TypeDetail> for TypeRecord {
    fn from(detail: TypeDetail) -> Self {
        let relations = detail.damage_relations;
        Self::new(
            &detail.name,
            DamageRelations {
                double_damage_to: name_set(relations.double_damage_to),
                half_damage_to: name_set(relations.half_damage_to),
                no_damage_to: name_set(relations.no_damage_to),
            },
        )
    }
}

fn name_set(resources: Vec<NamedResource>) -> BTreeSet<String> {
    resources
        .into_iter()
        .map(|r| normalize_name(&r.name))
        .collect()
}
