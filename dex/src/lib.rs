//! Domain types and pure resolution logic for the type catalog.
//!
//! Nothing in this crate performs I/O. Records arrive from the local store
//! (or the built-in chart) and every operation here is a function over them.
//!
//! # Overview
//!
//! ```text
//! typedex-protocol (wire format)
//!        │
//!        ▼
//! typedex-dex (records + resolver) ← THIS CRATE
//!        │
//!        ├─> typedex-store (persists records)
//!        └─> typedex-client (sync job + facade)
//! ```
//!
//! # Main Types
//!
//! - [`TypeRecord`] - One attacking type and its damage relations
//! - [`SpeciesRecord`] - A species name and its one or two types
//! - [`RosterEntry`] - A saved species on the local roster
//! - [`TypeChart`] - Every known [`TypeRecord`], keyed by name
//! - [`EffectivenessBand`] - Qualitative label for a total multiplier
//! - [`MatchupPolicy`] - Whether total multipliers are capped at 2x
//!
//! # Example Usage
//!
//! ```
//! use typedex_dex::{EffectivenessBand, MatchupPolicy, TypeChart, query};
//!
//! let chart = TypeChart::builtin();
//! let policy = MatchupPolicy::default();
//! let total = query::total_multiplier(&chart, "fire", &["grass", "steel"], policy)?;
//! assert_eq!(total, 4.0);
//! assert_eq!(EffectivenessBand::classify(total)?, EffectivenessBand::UltraEffective);
//! # Ok::<(), typedex_dex::DexError>(())
//! ```

mod error;
pub mod query;
pub mod stats;
pub mod types;

pub use error::DexError;
pub use stats::{closest_level, total_hp};
pub use types::{
    DamageRelations, EffectivenessBand, MatchupPolicy, Relation, RosterEntry, SpeciesRecord,
    TypeChart, TypeRecord, builtin_type_records, normalize_name,
};
