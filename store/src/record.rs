use serde::Serialize;
use serde::de::DeserializeOwned;
use typedex_dex::{RosterEntry, SpeciesRecord, TypeRecord};

/// Logical tables of the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Table {
    Types,
    Species,
    Roster,
}

impl Table {
    pub const ALL: [Table; 3] = [Table::Types, Table::Species, Table::Roster];

    /// Directory name on disk
    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Types => "types",
            Table::Species => "species",
            Table::Roster => "roster",
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A value stored whole under a string key in exactly one table
pub trait Record: Serialize + DeserializeOwned + Send + 'static {
    const TABLE: Table;

    fn key(&self) -> &str;
}

impl Record for TypeRecord {
    const TABLE: Table = Table::Types;

    fn key(&self) -> &str {
        &self.name
    }
}

impl Record for SpeciesRecord {
    const TABLE: Table = Table::Species;

    fn key(&self) -> &str {
        &self.name
    }
}

impl Record for RosterEntry {
    const TABLE: Table = Table::Roster;

    fn key(&self) -> &str {
        &self.name
    }
}
