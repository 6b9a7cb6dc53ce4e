//! Country repository contract and in-memory implementation.
//!
//! # Invariants
//! - Insertion order is preserved by list reads.
//! - Names are unique by exact, case-sensitive comparison.

use super::{read_guard, write_guard, RepoError, RepoResult};
use crate::model::country::{Country, CountryId};
use std::sync::RwLock;

const COLLECTION: &str = "countries";

/// Repository interface for country storage.
pub trait CountryRepository {
    /// Stores a new country, rejecting a name that is already present.
    fn create_country(&self, country: &Country) -> RepoResult<CountryId>;
    fn get_country(&self, id: CountryId) -> RepoResult<Option<Country>>;
    fn list_countries(&self) -> RepoResult<Vec<Country>>;
    fn count_countries(&self) -> RepoResult<usize>;
}

/// Process-local country storage guarded by one read/write lock.
#[derive(Debug, Default)]
pub struct InMemoryCountryRepository {
    countries: RwLock<Vec<Country>>,
}

impl InMemoryCountryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CountryRepository for InMemoryCountryRepository {
    fn create_country(&self, country: &Country) -> RepoResult<CountryId> {
        let mut countries = write_guard(&self.countries, COLLECTION)?;
        if countries.iter().any(|stored| stored.name == country.name) {
            return Err(RepoError::Duplicate(country.name.clone()));
        }
        countries.push(country.clone());
        Ok(country.id)
    }

    fn get_country(&self, id: CountryId) -> RepoResult<Option<Country>> {
        let countries = read_guard(&self.countries, COLLECTION)?;
        Ok(countries.iter().find(|stored| stored.id == id).cloned())
    }

    fn list_countries(&self) -> RepoResult<Vec<Country>> {
        Ok(read_guard(&self.countries, COLLECTION)?.clone())
    }

    fn count_countries(&self) -> RepoResult<usize> {
        Ok(read_guard(&self.countries, COLLECTION)?.len())
    }
}
