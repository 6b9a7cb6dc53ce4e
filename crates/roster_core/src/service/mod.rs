//! Directory use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the country/person directory APIs.
//! - Keep callers decoupled from storage records by returning views.
//!
//! # Invariants
//! - A rejected add/update never mutates storage.
//! - Lookups and filters report "no match" as empty results, never errors.

use crate::model::person::PersonValidationError;
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod country_service;
pub mod dto;
pub mod person_service;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Error surfaced by directory operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Missing input, duplicate unique key or reference to an unknown record.
    InvalidArgument(String),
    /// Field content rule violated; carries the first violation.
    Validation(PersonValidationError),
    /// Storage failure unrelated to caller input.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(message) => write!(f, "invalid argument: {message}"),
            Self::Validation(err) => write!(f, "validation failed: {err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl ServiceError {
    /// Stable tag for log lines; never carries record contents.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "invalid_argument",
            Self::Validation(err) => err.code(),
            Self::Repo(err) => err.code(),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidArgument(_) => None,
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<PersonValidationError> for ServiceError {
    fn from(value: PersonValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err),
            RepoError::NotFound(id) => {
                Self::InvalidArgument(format!("given id `{id}` doesn't exist"))
            }
            RepoError::Duplicate(key) => {
                Self::InvalidArgument(format!("given value `{key}` already exists"))
            }
            other => Self::Repo(other),
        }
    }
}
