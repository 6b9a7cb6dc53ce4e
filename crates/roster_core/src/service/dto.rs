//! Request and view shapes exchanged with directory callers.
//!
//! # Responsibility
//! - Convert caller input into validated domain records.
//! - Project stored records into read-only views with derived fields.
//!
//! # Invariants
//! - Views are rebuilt on every read; `age` is never cached.
//! - View equality is structural across every field.

use crate::model::country::{Country, CountryId};
use crate::model::person::{
    validate_person_fields, Gender, Person, PersonId, PersonValidationError,
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const SECONDS_PER_DAY: f64 = 86_400.0;
const DAYS_PER_YEAR: f64 = 365.25;

/// Input for adding a country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryAddRequest {
    pub country_name: Option<String>,
}

impl CountryAddRequest {
    pub fn new(country_name: impl Into<String>) -> Self {
        Self {
            country_name: Some(country_name.into()),
        }
    }
}

/// Read-only country projection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountryView {
    pub id: CountryId,
    pub name: String,
}

impl From<&Country> for CountryView {
    fn from(country: &Country) -> Self {
        Self {
            id: country.id,
            name: country.name.clone(),
        }
    }
}

/// Input for adding a person. `name` and `email` are validated on add.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonAddRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub country_id: Option<CountryId>,
    pub address: Option<String>,
    #[serde(default)]
    pub receive_news_letters: bool,
}

impl PersonAddRequest {
    /// Validates the request and builds a record with a fresh ID.
    pub fn into_person(self) -> Result<Person, PersonValidationError> {
        validate_person_fields(self.name.as_deref(), self.email.as_deref())?;
        Ok(Person {
            id: Uuid::new_v4(),
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            date_of_birth: self.date_of_birth,
            gender: self.gender.map(|gender| gender.as_str().to_string()),
            country_id: self.country_id,
            address: self.address,
            receive_news_letters: self.receive_news_letters,
        })
    }
}

/// Full-replacement input for updating an existing person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonUpdateRequest {
    pub id: PersonId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub country_id: Option<CountryId>,
    pub address: Option<String>,
    #[serde(default)]
    pub receive_news_letters: bool,
}

impl PersonUpdateRequest {
    /// Creates an update request that clears every optional field.
    pub fn new(id: PersonId) -> Self {
        Self {
            id,
            name: None,
            email: None,
            date_of_birth: None,
            gender: None,
            country_id: None,
            address: None,
            receive_news_letters: false,
        }
    }

    /// Validates the request and builds the replacement record for `id`.
    pub fn into_person(self) -> Result<Person, PersonValidationError> {
        validate_person_fields(self.name.as_deref(), self.email.as_deref())?;
        Ok(Person {
            id: self.id,
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            date_of_birth: self.date_of_birth,
            gender: self.gender.map(|gender| gender.as_str().to_string()),
            country_id: self.country_id,
            address: self.address,
            receive_news_letters: self.receive_news_letters,
        })
    }
}

/// Read-only person projection with resolved and derived fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonView {
    pub id: PersonId,
    pub name: String,
    pub email: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    pub country_id: Option<CountryId>,
    /// Country display name looked up at projection time.
    pub country: Option<String>,
    pub address: Option<String>,
    pub receive_news_letters: bool,
    /// Whole years since `date_of_birth`, relative to projection time.
    pub age: Option<i64>,
}

impl PersonView {
    /// Projects a stored person using a resolved country name and `now`.
    pub fn project(person: &Person, country: Option<String>, now: NaiveDateTime) -> Self {
        Self {
            id: person.id,
            name: person.name.clone(),
            email: person.email.clone(),
            date_of_birth: person.date_of_birth,
            gender: person.gender.clone(),
            country_id: person.country_id,
            country,
            address: person.address.clone(),
            receive_news_letters: person.receive_news_letters,
            age: person
                .date_of_birth
                .map(|date_of_birth| age_in_years(date_of_birth, now)),
        }
    }

    /// Builds an update request pre-filled with this view's values.
    ///
    /// Gender text that does not name a known option becomes `None`.
    pub fn to_update_request(&self) -> PersonUpdateRequest {
        PersonUpdateRequest {
            id: self.id,
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            date_of_birth: self.date_of_birth,
            gender: self.gender.as_deref().and_then(Gender::parse),
            country_id: self.country_id,
            address: self.address.clone(),
            receive_news_letters: self.receive_news_letters,
        }
    }
}

impl Display for PersonView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let date_of_birth = self
            .date_of_birth
            .map(|date| date.format("%d %m %Y").to_string())
            .unwrap_or_default();
        let country_id = self
            .country_id
            .map(|id| id.to_string())
            .unwrap_or_default();
        write!(
            f,
            "Person ID: {}, Person Name: {}, Email: {}, Date of birth: {}, Gender: {}, Country ID: {}, Address: {}, Receive news letters: {}",
            self.id,
            self.name,
            self.email,
            date_of_birth,
            self.gender.as_deref().unwrap_or_default(),
            country_id,
            self.address.as_deref().unwrap_or_default(),
            self.receive_news_letters
        )
    }
}

/// Computes `round((now - date_of_birth) / 365.25 days)`.
pub fn age_in_years(date_of_birth: NaiveDate, now: NaiveDateTime) -> i64 {
    let elapsed = now - date_of_birth.and_time(NaiveTime::MIN);
    let days = elapsed.num_seconds() as f64 / SECONDS_PER_DAY;
    (days / DAYS_PER_YEAR).round() as i64
}

#[cfg(test)]
mod tests {
    use super::{age_in_years, PersonAddRequest, PersonView};
    use crate::model::person::{Gender, PersonValidationError};
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn age_rounds_to_nearest_year() {
        let born = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        assert_eq!(age_in_years(born, at(2020, 1, 1)), 20);
        // 20.5+ years rounds up.
        assert_eq!(age_in_years(born, at(2020, 8, 1)), 21);
        assert_eq!(age_in_years(born, at(2020, 5, 1)), 20);
    }

    #[test]
    fn add_request_stores_gender_as_text() {
        let request = PersonAddRequest {
            name: Some("Ana".to_string()),
            email: Some("ana@example.com".to_string()),
            gender: Some(Gender::Female),
            ..PersonAddRequest::default()
        };
        let person = request.into_person().unwrap();
        assert_eq!(person.gender.as_deref(), Some("Female"));
    }

    #[test]
    fn add_request_without_name_is_rejected() {
        let err = PersonAddRequest::default().into_person().unwrap_err();
        assert_eq!(err, PersonValidationError::NameRequired);
    }

    #[test]
    fn view_without_birth_date_has_no_age() {
        let person = PersonAddRequest {
            name: Some("Ana".to_string()),
            email: Some("ana@example.com".to_string()),
            ..PersonAddRequest::default()
        }
        .into_person()
        .unwrap();

        let view = PersonView::project(&person, None, at(2024, 3, 1));
        assert_eq!(view.age, None);
        assert!(view.to_string().contains("Person Name: Ana"));
    }

    #[test]
    fn update_request_from_view_keeps_every_field() {
        let person = PersonAddRequest {
            name: Some("Ana".to_string()),
            email: Some("ana@example.com".to_string()),
            gender: Some(Gender::Other),
            address: Some("Main street 1".to_string()),
            receive_news_letters: true,
            ..PersonAddRequest::default()
        }
        .into_person()
        .unwrap();
        let view = PersonView::project(&person, Some("Peru".to_string()), at(2024, 3, 1));

        let request = view.to_update_request();
        assert_eq!(request.id, person.id);
        assert_eq!(request.gender, Some(Gender::Other));
        assert_eq!(request.into_person().unwrap(), person);
    }
}
