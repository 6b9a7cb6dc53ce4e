//! Field-keyed filtering and ordering over person views.
//!
//! # Responsibility
//! - Name the person fields callers may filter or sort by.
//! - Apply case-insensitive contains filters and stable multi-type ordering.
//!
//! # Invariants
//! - Filtering never fails; an empty search text keeps every view.
//! - Sorting is stable for equal keys in both directions.

pub mod person_query;
