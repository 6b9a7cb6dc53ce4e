//! Person directory service.
//!
//! # Responsibility
//! - Provide add/get/filter/sort/update/delete entry points for persons.
//! - Resolve country names and derive `age` when projecting views.
//!
//! # Invariants
//! - Add and update run the same field validation before any mutation.
//! - Update never changes a person's ID.
//! - Country names are resolved after the person storage lock is released,
//!   so the two directory locks are never held together.

use crate::model::person::{Person, PersonId};
use crate::repo::country_repo::{CountryRepository, InMemoryCountryRepository};
use crate::repo::person_repo::{InMemoryPersonRepository, PersonRepository};
use crate::repo::RepoError;
use crate::search::person_query::{filter_views, sort_views, FilterField, SortField, SortOrder};
use crate::service::country_service::CountryService;
use crate::service::dto::{PersonAddRequest, PersonUpdateRequest, PersonView};
use crate::service::{ServiceError, ServiceResult};
use chrono::{Local, NaiveDateTime};
use log::{debug, info, warn};
use std::sync::Arc;

/// Time source used to derive `age` on projection.
pub type Clock = fn() -> NaiveDateTime;

/// Local wall-clock time.
pub fn system_clock() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Person directory over a repository implementation.
///
/// Holds a shared, read-only handle to the country directory for name lookup.
pub struct PersonService<R: PersonRepository, C: CountryRepository> {
    repo: R,
    countries: Arc<CountryService<C>>,
    clock: Clock,
}

impl<C: CountryRepository> PersonService<InMemoryPersonRepository, C> {
    /// Creates an empty process-local directory.
    pub fn in_memory(countries: Arc<CountryService<C>>) -> Self {
        Self::new(InMemoryPersonRepository::new(), countries)
    }
}

impl PersonService<InMemoryPersonRepository, InMemoryCountryRepository> {
    /// Creates empty process-local person and country directories.
    pub fn in_memory_with_countries() -> Self {
        Self::in_memory(Arc::new(CountryService::in_memory()))
    }
}

impl<R: PersonRepository, C: CountryRepository> PersonService<R, C> {
    pub fn new(repo: R, countries: Arc<CountryService<C>>) -> Self {
        Self::with_clock(repo, countries, system_clock)
    }

    /// Creates a service with an explicit time source for `age` derivation.
    pub fn with_clock(repo: R, countries: Arc<CountryService<C>>, clock: Clock) -> Self {
        Self {
            repo,
            countries,
            clock,
        }
    }

    /// Country directory used for name resolution.
    pub fn countries(&self) -> &Arc<CountryService<C>> {
        &self.countries
    }

    /// Adds a person and returns its view.
    ///
    /// # Errors
    /// - `InvalidArgument` when `request` is `None`.
    /// - `Validation` with the first failing rule (name, then email).
    pub fn add(&self, request: Option<PersonAddRequest>) -> ServiceResult<PersonView> {
        let Some(request) = request else {
            warn!("event=person_add module=service status=error error_code=request_missing");
            return Err(ServiceError::InvalidArgument(
                "person add request is required".to_string(),
            ));
        };

        let person = request.into_person().map_err(|err| {
            warn!(
                "event=person_add module=service status=error error_code=validation_failed rule={}",
                err.code()
            );
            ServiceError::from(err)
        })?;
        self.repo.create_person(&person)?;

        info!(
            "event=person_add module=service status=ok person_id={}",
            person.id
        );
        self.project(&person)
    }

    /// Lists every person in insertion order.
    pub fn get_all(&self) -> ServiceResult<Vec<PersonView>> {
        let persons = self.repo.list_persons()?;
        persons.iter().map(|person| self.project(person)).collect()
    }

    /// Looks up one person; an absent ID or a miss yields `None`.
    pub fn get_by_id(&self, id: Option<PersonId>) -> ServiceResult<Option<PersonView>> {
        let Some(id) = id else {
            return Ok(None);
        };
        match self.repo.get_person(id)? {
            Some(person) => self.project(&person).map(Some),
            None => Ok(None),
        }
    }

    /// Returns persons whose `field` contains `search_text`, ignoring case.
    ///
    /// Empty or absent search text returns every person. Persons missing the
    /// field value are kept.
    pub fn filter(
        &self,
        field: FilterField,
        search_text: Option<&str>,
    ) -> ServiceResult<Vec<PersonView>> {
        Ok(filter_views(self.get_all()?, field, search_text))
    }

    /// Same as [`Self::filter`] with a field name from an outer layer.
    ///
    /// An unrecognized field name applies no filter.
    pub fn filter_by_name(
        &self,
        field_name: &str,
        search_text: Option<&str>,
    ) -> ServiceResult<Vec<PersonView>> {
        match field_name.parse::<FilterField>() {
            Ok(field) => self.filter(field, search_text),
            Err(err) => {
                debug!("event=person_filter module=service status=fallback reason=\"{err}\"");
                self.get_all()
            }
        }
    }

    /// Orders `persons` by `field`; ties keep their input order.
    pub fn sort(
        &self,
        persons: Vec<PersonView>,
        field: SortField,
        order: SortOrder,
    ) -> Vec<PersonView> {
        sort_views(persons, field, order)
    }

    /// Same as [`Self::sort`] with a field name from an outer layer.
    ///
    /// An empty or unrecognized field name returns `persons` unchanged.
    pub fn sort_by_name(
        &self,
        persons: Vec<PersonView>,
        field_name: &str,
        order: SortOrder,
    ) -> Vec<PersonView> {
        match field_name.parse::<SortField>() {
            Ok(field) => self.sort(persons, field, order),
            Err(err) => {
                debug!("event=person_sort module=service status=fallback reason=\"{err}\"");
                persons
            }
        }
    }

    /// Replaces every mutable field of an existing person.
    ///
    /// # Errors
    /// - `InvalidArgument` when `request` is `None`.
    /// - `Validation` with the first failing rule.
    /// - `InvalidArgument` when no person has the request ID.
    pub fn update(&self, request: Option<PersonUpdateRequest>) -> ServiceResult<PersonView> {
        let Some(request) = request else {
            warn!("event=person_update module=service status=error error_code=request_missing");
            return Err(ServiceError::InvalidArgument(
                "person update request is required".to_string(),
            ));
        };

        let person = request.into_person().map_err(|err| {
            warn!(
                "event=person_update module=service status=error error_code=validation_failed rule={}",
                err.code()
            );
            ServiceError::from(err)
        })?;
        match self.repo.update_person(&person) {
            Ok(()) => {}
            Err(RepoError::NotFound(id)) => {
                warn!(
                    "event=person_update module=service status=error error_code=not_found person_id={id}"
                );
                return Err(ServiceError::InvalidArgument(format!(
                    "given person id `{id}` doesn't exist"
                )));
            }
            Err(err) => return Err(err.into()),
        }

        info!(
            "event=person_update module=service status=ok person_id={}",
            person.id
        );
        self.project(&person)
    }

    /// Removes one person.
    ///
    /// Returns `false` when no person has `id`.
    ///
    /// # Errors
    /// - `InvalidArgument` when `id` is `None`.
    pub fn delete(&self, id: Option<PersonId>) -> ServiceResult<bool> {
        let Some(id) = id else {
            warn!("event=person_delete module=service status=error error_code=id_missing");
            return Err(ServiceError::InvalidArgument(
                "person id is required".to_string(),
            ));
        };

        let deleted = self.repo.delete_person(id)?;
        info!("event=person_delete module=service status=ok person_id={id} deleted={deleted}");
        Ok(deleted)
    }

    pub fn len(&self) -> ServiceResult<usize> {
        Ok(self.repo.count_persons()?)
    }

    pub fn is_empty(&self) -> ServiceResult<bool> {
        Ok(self.len()? == 0)
    }

    fn project(&self, person: &Person) -> ServiceResult<PersonView> {
        let country = self.countries.country_name(person.country_id)?;
        Ok(PersonView::project(person, country, (self.clock)()))
    }
}
