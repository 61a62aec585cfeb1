//! In-memory catalog for tests

use std::collections::{BTreeMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use typedex_dex::{SpeciesRecord, TypeChart, TypeRecord};
use typedex_protocol::{
    DamageRelationsWire, NamedResource, SpeciesDetail, SpeciesTypeSlot, TypeDetail,
};

use super::CatalogSource;
use crate::{Error, FetchError};

#[derive(Debug, Default)]
pub(crate) struct MemoryCatalog {
    types: BTreeMap<String, TypeDetail>,
    species: BTreeMap<String, SpeciesDetail>,
    failing: Mutex<HashSet<String>>,
    requests: AtomicUsize,
}

fn named(name: &str) -> NamedResource {
    NamedResource {
        name: name.to_string(),
        url: String::new(),
    }
}

fn to_wire(record: &TypeRecord) -> TypeDetail {
    let relations = &record.damage_relations;
    TypeDetail {
        name: record.name.clone(),
        damage_relations: DamageRelationsWire {
            double_damage_to: relations.double_damage_to.iter().map(|n| named(n)).collect(),
            half_damage_to: relations.half_damage_to.iter().map(|n| named(n)).collect(),
            no_damage_to: relations.no_damage_to.iter().map(|n| named(n)).collect(),
        },
    }
}

impl MemoryCatalog {
    /// The built-in chart plus a handful of species
    pub fn with_builtin() -> Self {
        let mut catalog = Self::default();
        for record in TypeChart::builtin().records() {
            catalog.types.insert(record.name.clone(), to_wire(record));
        }
        for species in [
            SpeciesRecord::new("charmander", &["fire"]),
            SpeciesRecord::new("charizard", &["fire", "flying"]),
            SpeciesRecord::new("squirtle", &["water"]),
            SpeciesRecord::new("pikachu", &["electric"]),
        ] {
            catalog.add_species(species);
        }
        catalog
    }

    pub fn add_species(&mut self, record: SpeciesRecord) {
        let detail = SpeciesDetail {
            name: record.name.clone(),
            types: record
                .types
                .iter()
                .enumerate()
                .map(|(i, t)| SpeciesTypeSlot {
                    slot: i as u8 + 1,
                    type_ref: named(t),
                })
                .collect(),
        };
        self.species.insert(record.name, detail);
    }

    /// Make every request for `resource` (e.g. `"type/fire"`) fail with HTTP 503
    pub fn fail_on(&self, resource: &str) {
        self.failing
            .lock()
            .unwrap()
            .insert(resource.to_string());
    }

    pub fn heal(&self) {
        self.failing.lock().unwrap().clear();
    }

    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    fn request(&self, resource: &str) -> Result<(), Error> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if self.failing.lock().unwrap().contains(resource) {
            return Err(Error::fetch(resource, FetchError::Status(503)));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogSource for MemoryCatalog {
    async fn type_listing(&self) -> Result<Vec<NamedResource>, Error> {
        self.request("type")?;
        Ok(self.types.keys().map(|n| named(n)).collect())
    }

    async fn type_detail(&self, name: &str) -> Result<TypeDetail, Error> {
        let resource = format!("type/{}", name);
        self.request(&resource)?;
        self.types
            .get(name)
            .cloned()
            .ok_or_else(|| Error::fetch(resource, FetchError::Status(404)))
    }

    async fn species_listing(&self) -> Result<Vec<NamedResource>, Error> {
        self.request("pokemon")?;
        Ok(self.species.keys().map(|n| named(n)).collect())
    }

    async fn species_detail(&self, name: &str) -> Result<SpeciesDetail, Error> {
        let resource = format!("pokemon/{}", name);
        self.request(&resource)?;
        self.species
            .get(name)
            .cloned()
            .ok_or_else(|| Error::fetch(resource, FetchError::Status(404)))
    }
}
