//! Resolution queries over stored records
//!
//! [`matchup`] resolves attack multipliers against a [`TypeChart`](crate::TypeChart);
//! [`search`] filters species records by name.

pub mod matchup;
pub mod search;

pub use matchup::{final_damage, immunities, multiplier, resistances, total_multiplier, weaknesses};
pub use search::{SpeciesQuery, search};
