// crates/domain/src/numbering/range.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value_objects::{EntityId, EntityName};

/// Inclusive id interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdRange {
    pub min: i64,
    pub max: i64,
}

impl IdRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, id: EntityId) -> bool {
        (self.min..=self.max).contains(&id.value())
    }
}

impl fmt::Display for IdRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// A bound exactly as the configuration source spelled it.
///
/// Parsed at lookup time; rows whose bounds do not parse are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawBound(String);

impl RawBound {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse as a decimal integer, tolerating surrounding whitespace.
    pub fn parse(&self) -> Option<i64> {
        self.0.trim().parse().ok()
    }
}

impl From<&str> for RawBound {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RawBound {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<i64> for RawBound {
    fn from(value: i64) -> Self {
        Self::new(value.to_string())
    }
}

/// One row of the numbering table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RangeDefinition {
    pub name: EntityName,
    pub min: RawBound,
    pub max: RawBound,
}

impl RangeDefinition {
    pub fn new(name: impl Into<EntityName>, min: impl Into<RawBound>, max: impl Into<RawBound>) -> Self {
        Self { name: name.into(), min: min.into(), max: max.into() }
    }

    pub fn numeric(name: impl Into<EntityName>, min: i64, max: i64) -> Self {
        Self::new(name, min, max)
    }

    /// Both bounds parsed, or `None` for a malformed record.
    pub fn bounds(&self) -> Option<IdRange> {
        Some(IdRange::new(self.min.parse()?, self.max.parse()?))
    }

    pub fn is_malformed(&self) -> bool {
        self.bounds().is_none()
    }
}
