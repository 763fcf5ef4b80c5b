//! Shared identifier types and allocation policy for Chancery.
//!
//! Every module collection has exactly one numeric identity field
//! (`citizen_id`, `asset_id`, ...). All of them are allocated through the
//! same [`IdAllocator`] so uniqueness and monotonicity hold per collection
//! instead of depending on ad hoc timestamp tricks.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error returned when parsing a record identifier fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid record id: {value}")]
pub struct IdParseError {
    value: String,
}

/// Numeric identity of one record within its module collection.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }

    pub fn parse(value: &str) -> Result<Self, IdParseError> {
        value
            .trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| IdParseError {
                value: value.to_string(),
            })
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RecordId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Identity allocation policy for one collection.
///
/// Seeded with every id already present; `next()` returns `max + 1` and
/// advances, so ids are unique and strictly increasing for the lifetime of
/// the allocator. Deleted ids are never reused within a session.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    high_water: i64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { high_water: 0 }
    }

    /// Build an allocator already aware of the given ids.
    pub fn seeded<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = RecordId>,
    {
        let mut alloc = Self::new();
        for id in ids {
            alloc.register(id);
        }
        alloc
    }

    /// Record an externally assigned id (seed data, imports).
    pub fn register(&mut self, id: RecordId) {
        if id.value() > self.high_water {
            self.high_water = id.value();
        }
    }

    /// Allocate the next id.
    pub fn next(&mut self) -> RecordId {
        self.high_water += 1;
        RecordId::new(self.high_water)
    }

    /// Highest id seen or allocated so far.
    pub fn high_water(&self) -> i64 {
        self.high_water
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_parses_and_displays() {
        let id = RecordId::parse("42").unwrap();
        assert_eq!(id.value(), 42);
        assert_eq!(id.to_string(), "42");
        assert!(RecordId::parse("not-a-number").is_err());
    }

    #[test]
    fn allocator_is_monotonic_and_unique() {
        let mut alloc = IdAllocator::seeded([1, 2, 7].map(RecordId::new));
        let a = alloc.next();
        let b = alloc.next();
        assert_eq!(a.value(), 8);
        assert_eq!(b.value(), 9);
        assert!(b > a);
    }

    #[test]
    fn register_never_lowers_the_high_water() {
        let mut alloc = IdAllocator::seeded([10].map(RecordId::new));
        alloc.register(RecordId::new(3));
        assert_eq!(alloc.next().value(), 11);
    }

    #[test]
    fn empty_allocator_starts_at_one() {
        let mut alloc = IdAllocator::new();
        assert_eq!(alloc.next().value(), 1);
    }
}
