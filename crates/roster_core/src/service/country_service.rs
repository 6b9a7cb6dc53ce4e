//! Country directory service.
//!
//! # Responsibility
//! - Validate country input and assign identities.
//! - Serve country views to callers and to the person directory.
//!
//! # Invariants
//! - Country names are unique by exact match at all times.
//! - Countries are never updated or removed through this service.

use crate::model::country::{is_blank_name, Country, CountryId};
use crate::repo::country_repo::{CountryRepository, InMemoryCountryRepository};
use crate::service::dto::{CountryAddRequest, CountryView};
use crate::service::{ServiceError, ServiceResult};
use log::{info, warn};

/// Country directory over a repository implementation.
pub struct CountryService<R: CountryRepository> {
    repo: R,
}

impl CountryService<InMemoryCountryRepository> {
    /// Creates an empty process-local directory.
    pub fn in_memory() -> Self {
        Self::new(InMemoryCountryRepository::new())
    }
}

impl<R: CountryRepository> CountryService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds a country and returns its view.
    ///
    /// # Errors
    /// - `InvalidArgument` when `request` is `None`.
    /// - `InvalidArgument` when the name is absent or blank.
    /// - `InvalidArgument` when the exact name already exists.
    pub fn add(&self, request: Option<CountryAddRequest>) -> ServiceResult<CountryView> {
        let Some(request) = request else {
            warn!("event=country_add module=service status=error error_code=request_missing");
            return Err(ServiceError::InvalidArgument(
                "country add request is required".to_string(),
            ));
        };
        let name = match request.country_name {
            Some(name) if !is_blank_name(&name) => name,
            _ => {
                warn!("event=country_add module=service status=error error_code=name_missing");
                return Err(ServiceError::InvalidArgument(
                    "country name can not be blank".to_string(),
                ));
            }
        };

        let country = Country::new(name);
        if let Err(err) = self.repo.create_country(&country) {
            warn!(
                "event=country_add module=service status=error error_code={}",
                err.code()
            );
            return Err(err.into());
        }

        info!(
            "event=country_add module=service status=ok country_id={}",
            country.id
        );
        Ok(CountryView::from(&country))
    }

    /// Lists every country in insertion order.
    pub fn get_all(&self) -> ServiceResult<Vec<CountryView>> {
        Ok(self
            .repo
            .list_countries()?
            .iter()
            .map(CountryView::from)
            .collect())
    }

    /// Looks up one country; an absent ID or a miss yields `None`.
    pub fn get_by_id(&self, id: Option<CountryId>) -> ServiceResult<Option<CountryView>> {
        let Some(id) = id else {
            return Ok(None);
        };
        Ok(self.repo.get_country(id)?.as_ref().map(CountryView::from))
    }

    /// Resolves a weak country reference into its display name.
    pub fn country_name(&self, id: Option<CountryId>) -> ServiceResult<Option<String>> {
        Ok(self.get_by_id(id)?.map(|country| country.name))
    }

    pub fn len(&self) -> ServiceResult<usize> {
        Ok(self.repo.count_countries()?)
    }

    pub fn is_empty(&self) -> ServiceResult<bool> {
        Ok(self.len()? == 0)
    }
}
