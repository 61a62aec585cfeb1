//! Species name search

use crate::DexError;
use crate::types::SpeciesRecord;

/// Validated, case-folded species name query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesQuery {
    needle: String,
}

impl SpeciesQuery {
    /// Fails with [`DexError::EmptyQuery`] for an empty or whitespace-only query
    pub fn new(query: &str) -> Result<Self, DexError> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Err(DexError::EmptyQuery);
        }
        Ok(Self { needle })
    }

    /// Case-insensitive substring match on the species name
    pub fn matches(&self, record: &SpeciesRecord) -> bool {
        record.name.to_lowercase().contains(&self.needle)
    }

    pub fn as_str(&self) -> &str {
        &self.needle
    }
}

/// All records whose name contains `query`, sorted by name.
///
/// No match is an empty result, not an error.
pub fn search<I>(records: I, query: &str) -> Result<Vec<SpeciesRecord>, DexError>
where
    I: IntoIterator<Item = SpeciesRecord>,
{
    let query = SpeciesQuery::new(query)?;
    let mut found: Vec<SpeciesRecord> = records.into_iter().filter(|r| query.matches(r)).collect();
    found.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn starters() -> Vec<SpeciesRecord> {
        vec![
            SpeciesRecord::new("charmander", &["fire"]),
            SpeciesRecord::new("squirtle", &["water"]),
            SpeciesRecord::new("charizard", &["fire", "flying"]),
        ]
    }

    #[test]
    fn test_search_substring() {
        let found = search(starters(), "char").unwrap();
        let names: Vec<_> = found.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["charizard", "charmander"]);
    }

    #[test]
    fn test_search_case_insensitive() {
        let found = search(starters(), "  SQUIR ").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].types, vec!["water"]);
    }

    #[test]
    fn test_search_no_match_is_empty() {
        assert!(search(starters(), "pika").unwrap().is_empty());
    }

    #[test]
    fn test_search_empty_query() {
        assert_eq!(search(starters(), ""), Err(DexError::EmptyQuery));
        assert_eq!(search(starters(), "   "), Err(DexError::EmptyQuery));
    }
}
