//! In-memory view of the type table, plus the built-in Gen 6+ chart

use std::collections::BTreeMap;

use super::{DamageRelations, Relation, TypeRecord, normalize_name};

/// Every known type record, keyed by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeChart {
    types: BTreeMap<String, TypeRecord>,
}

impl TypeChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: impl IntoIterator<Item = TypeRecord>) -> Self {
        let mut chart = Self::new();
        for record in records {
            chart.insert(record);
        }
        chart
    }

    /// Insert or replace a record by name
    pub fn insert(&mut self, record: TypeRecord) {
        self.types.insert(record.name.clone(), record);
    }

    /// Look up a type (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&TypeRecord> {
        self.types.get(&normalize_name(name))
    }

    /// Type names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    pub fn records(&self) -> impl Iterator<Item = &TypeRecord> {
        self.types.values()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// The standard 18-type chart (Gen 6 onward), usable without network access
    pub fn builtin() -> Self {
        Self::from_records(builtin_type_records())
    }
}

/// Type names in chart order
pub const BUILTIN_TYPE_NAMES: [&str; 18] = [
    "normal", "fire", "water", "electric", "grass", "ice", "fighting", "poison", "ground",
    "flying", "psychic", "bug", "rock", "ghost", "dragon", "dark", "steel", "fairy",
];

const __: Relation = Relation::Neutral;
const SE: Relation = Relation::Double;
const NV: Relation = Relation::Half;
const IM: Relation = Relation::Immune;

/// Row = attacking type, column = defending type, both in [`BUILTIN_TYPE_NAMES`] order
#[rustfmt::skip]
static BUILTIN_CHART: [[Relation; 18]; 18] = [
    // Normal
    [__, __, __, __, __, __, __, __, __, __, __, __, NV, IM, __, __, NV, __],
    // Fire
    [__, NV, NV, __, SE, SE, __, __, __, __, __, SE, NV, __, NV, __, SE, __],
    // Water
    [__, SE, NV, __, NV, __, __, __, SE, __, __, __, SE, __, NV, __, __, __],
    // Electric
    [__, __, SE, NV, NV, __, __, __, IM, SE, __, __, __, __, NV, __, __, __],
    // Grass
    [__, NV, SE, __, NV, __, __, NV, SE, NV, __, NV, SE, __, NV, __, NV, __],
    // Ice
    [__, NV, NV, __, SE, NV, __, __, SE, SE, __, __, __, __, SE, __, NV, __],
    // Fighting
    [SE, __, __, __, __, SE, __, NV, __, NV, NV, NV, SE, IM, __, SE, SE, NV],
    // Poison
    [__, __, __, __, SE, __, __, NV, NV, __, __, __, NV, NV, __, __, IM, SE],
    // Ground
    [__, SE, __, SE, NV, __, __, SE, __, IM, __, NV, SE, __, __, __, SE, __],
    // Flying
    [__, __, __, NV, SE, __, SE, __, __, __, __, SE, NV, __, __, __, NV, __],
    // Psychic
    [__, __, __, __, __, __, SE, SE, __, __, NV, __, __, __, __, IM, NV, __],
    // Bug
    [__, NV, __, __, SE, __, NV, NV, __, NV, SE, __, __, NV, __, SE, NV, NV],
    // Rock
    [__, SE, __, __, __, SE, NV, __, NV, SE, __, SE, __, __, __, __, NV, __],
    // Ghost
    [IM, __, __, __, __, __, __, __, __, __, SE, __, __, SE, __, NV, __, __],
    // Dragon
    [__, __, __, __, __, __, __, __, __, __, __, __, __, __, SE, __, NV, IM],
    // Dark
    [__, __, __, __, __, __, NV, __, __, __, SE, __, __, SE, __, NV, __, NV],
    // Steel
    [__, NV, NV, NV, __, SE, __, __, __, __, __, __, SE, __, __, __, NV, SE],
    // Fairy
    [__, NV, __, __, __, __, SE, NV, __, __, __, __, __, __, SE, SE, NV, __],
];

/// Project the built-in chart into the same records a catalog sync produces
pub fn builtin_type_records() -> Vec<TypeRecord> {
    BUILTIN_TYPE_NAMES
        .iter()
        .zip(BUILTIN_CHART.iter())
        .map(|(attacker, row)| {
            let mut relations = DamageRelations::default();
            for (defender, relation) in BUILTIN_TYPE_NAMES.iter().zip(row.iter()) {
                let set = match relation {
                    Relation::Double => &mut relations.double_damage_to,
                    Relation::Half => &mut relations.half_damage_to,
                    Relation::Immune => &mut relations.no_damage_to,
                    Relation::Neutral => continue,
                };
                set.insert((*defender).to_string());
            }
            TypeRecord::new(attacker, relations)
        })
        .collect()
}
