//! Core directory logic for Roster.
//! This crate is the single source of truth for country/person invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::country::{Country, CountryId};
pub use model::person::{Gender, Person, PersonId, PersonValidationError};
pub use repo::country_repo::{CountryRepository, InMemoryCountryRepository};
pub use repo::person_repo::{InMemoryPersonRepository, PersonRepository};
pub use repo::{RepoError, RepoResult};
pub use search::person_query::{FilterField, SortField, SortOrder, UnknownFieldError};
pub use service::country_service::CountryService;
pub use service::dto::{
    CountryAddRequest, CountryView, PersonAddRequest, PersonUpdateRequest, PersonView,
};
pub use service::person_service::{system_clock, Clock, PersonService};
pub use service::{ServiceError, ServiceResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
