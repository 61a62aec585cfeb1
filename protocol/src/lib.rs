use thiserror::Error;

pub mod request;
pub mod response;

pub use request::CatalogRequest;
pub use response::{
    DamageRelationsWire, NamedResource, ResourceList, SpeciesDetail, SpeciesTypeSlot, TypeDetail,
    parse_resource_list, parse_species_detail, parse_type_detail,
};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid response format: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Empty response body")]
    EmptyBody,

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}
