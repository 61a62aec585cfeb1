mod listing;
mod species_detail;
mod type_detail;

use crate::ParseError;
use serde::de::DeserializeOwned;

pub use listing::{NamedResource, ResourceList};
pub use species_detail::{SpeciesDetail, SpeciesTypeSlot};
pub use type_detail::{DamageRelationsWire, TypeDetail};

/// Parse a listing page (`/type`, `/pokemon?limit=..`)
pub fn parse_resource_list(body: &str) -> Result<ResourceList, ParseError> {
    decode(body)
}

/// Parse a type detail body (`/type/NAME`)
pub fn parse_type_detail(body: &str) -> Result<TypeDetail, ParseError> {
    let detail: TypeDetail = decode(body)?;
    if detail.name.trim().is_empty() {
        return Err(ParseError::MissingField("type name".to_string()));
    }
    Ok(detail)
}

/// Parse a species detail body (`/pokemon/NAME`)
///
/// Type slots are returned sorted by slot number. A species must carry one
/// or two types.
pub fn parse_species_detail(body: &str) -> Result<SpeciesDetail, ParseError> {
    let mut detail: SpeciesDetail = decode(body)?;
    if detail.name.trim().is_empty() {
        return Err(ParseError::MissingField("species name".to_string()));
    }

    match detail.types.len() {
        1 | 2 => {}
        n => {
            return Err(ParseError::InvalidFormat(format!(
                "species {} has {} types, expected 1 or 2",
                detail.name, n
            )));
        }
    }

    detail.types.sort_by_key(|slot| slot.slot);
    Ok(detail)
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ParseError> {
    if body.trim().is_empty() {
        return Err(ParseError::EmptyBody);
    }
    Ok(serde_json::from_str(body)?)
}
