//! Record types persisted by the store and consumed by the resolver

mod band;
mod chart;
mod roster;
mod species;
mod type_record;

pub use band::EffectivenessBand;
pub use chart::{BUILTIN_TYPE_NAMES, TypeChart, builtin_type_records};
pub use roster::RosterEntry;
pub use species::SpeciesRecord;
pub use type_record::{DamageRelations, MatchupPolicy, Relation, TypeRecord};

/// Canonical form of a type or species name (trimmed, lowercase)
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
