//! Repository layer abstractions and in-memory implementations.
//!
//! # Responsibility
//! - Define storage contracts used by the directory services.
//! - Own the process-local collections and their locking.
//!
//! # Invariants
//! - Person writes must call `Person::validate()` before mutating storage.
//! - Country name uniqueness is checked under the same write lock as insert.
//! - Repository APIs return semantic errors (`NotFound`, `Duplicate`) instead
//!   of silently ignoring a write.

use crate::model::person::PersonValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

pub mod country_repo;
pub mod person_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for directory storage operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(PersonValidationError),
    NotFound(Uuid),
    Duplicate(String),
    /// A writer panicked while holding the collection lock.
    LockPoisoned(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::Duplicate(key) => write!(f, "duplicate key: `{key}`"),
            Self::LockPoisoned(collection) => {
                write!(f, "{collection} storage lock is poisoned")
            }
        }
    }
}

impl RepoError {
    /// Stable tag for log lines; never carries record contents.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(err) => err.code(),
            Self::NotFound(_) => "not_found",
            Self::Duplicate(_) => "duplicate_key",
            Self::LockPoisoned(_) => "lock_poisoned",
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PersonValidationError> for RepoError {
    fn from(value: PersonValidationError) -> Self {
        Self::Validation(value)
    }
}

fn read_guard<'a, T>(
    lock: &'a RwLock<T>,
    collection: &'static str,
) -> RepoResult<RwLockReadGuard<'a, T>> {
    lock.read().map_err(|_| RepoError::LockPoisoned(collection))
}

fn write_guard<'a, T>(
    lock: &'a RwLock<T>,
    collection: &'static str,
) -> RepoResult<RwLockWriteGuard<'a, T>> {
    lock.write().map_err(|_| RepoError::LockPoisoned(collection))
}
