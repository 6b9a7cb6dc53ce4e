//! Person repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the person collection.
//! - Keep locking details inside the storage boundary.
//!
//! # Invariants
//! - Write paths call `Person::validate()` before touching the collection.
//! - Deleted IDs are gone for good; nothing re-inserts an existing ID.

use super::{read_guard, write_guard, RepoError, RepoResult};
use crate::model::person::{Person, PersonId};
use std::sync::RwLock;

const COLLECTION: &str = "persons";

/// Repository interface for person CRUD operations.
pub trait PersonRepository {
    fn create_person(&self, person: &Person) -> RepoResult<PersonId>;
    /// Replaces the stored record with the same ID.
    fn update_person(&self, person: &Person) -> RepoResult<()>;
    fn get_person(&self, id: PersonId) -> RepoResult<Option<Person>>;
    fn list_persons(&self) -> RepoResult<Vec<Person>>;
    /// Returns `false` when no record matched.
    fn delete_person(&self, id: PersonId) -> RepoResult<bool>;
    fn count_persons(&self) -> RepoResult<usize>;
}

/// Process-local person storage guarded by one read/write lock.
#[derive(Debug, Default)]
pub struct InMemoryPersonRepository {
    persons: RwLock<Vec<Person>>,
}

impl InMemoryPersonRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PersonRepository for InMemoryPersonRepository {
    fn create_person(&self, person: &Person) -> RepoResult<PersonId> {
        person.validate()?;

        let mut persons = write_guard(&self.persons, COLLECTION)?;
        if persons.iter().any(|stored| stored.id == person.id) {
            return Err(RepoError::Duplicate(person.id.to_string()));
        }
        persons.push(person.clone());
        Ok(person.id)
    }

    fn update_person(&self, person: &Person) -> RepoResult<()> {
        person.validate()?;

        let mut persons = write_guard(&self.persons, COLLECTION)?;
        let stored = persons
            .iter_mut()
            .find(|stored| stored.id == person.id)
            .ok_or(RepoError::NotFound(person.id))?;
        *stored = person.clone();
        Ok(())
    }

    fn get_person(&self, id: PersonId) -> RepoResult<Option<Person>> {
        let persons = read_guard(&self.persons, COLLECTION)?;
        Ok(persons.iter().find(|stored| stored.id == id).cloned())
    }

    fn list_persons(&self) -> RepoResult<Vec<Person>> {
        Ok(read_guard(&self.persons, COLLECTION)?.clone())
    }

    fn delete_person(&self, id: PersonId) -> RepoResult<bool> {
        let mut persons = write_guard(&self.persons, COLLECTION)?;
        let Some(index) = persons.iter().position(|stored| stored.id == id) else {
            return Ok(false);
        };
        persons.remove(index);
        Ok(true)
    }

    fn count_persons(&self) -> RepoResult<usize> {
        Ok(read_guard(&self.persons, COLLECTION)?.len())
    }
}
