//! Domain model for the country/person directories.
//!
//! # Responsibility
//! - Define canonical entity shapes owned by the directories.
//! - Keep field-level validation rules next to the data they guard.
//!
//! # Invariants
//! - Every entity is identified by a stable UUID that is never reused.
//! - `Person::country_id` is a weak lookup key, not ownership.

pub mod country;
pub mod person;
