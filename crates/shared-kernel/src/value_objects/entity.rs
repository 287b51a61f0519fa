// crates/shared-kernel/src/value_objects/entity.rs
use std::{borrow::Borrow, fmt, ops::Deref};

use serde::{Deserialize, Serialize};

/// Integer identifier of a host model entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(i64);

impl EntityId {
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display name of an entity; group lookup matches it exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct EntityName(String);

impl EntityName {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for EntityName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for EntityName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for EntityName {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<String> for EntityName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for EntityName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Host type label such as `INCLUDE` or `SHELL_SECTION`.
///
/// Comparison is case-sensitive, mirroring the host keyword tables.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct EntityKind(String);

impl EntityKind {
    pub const INCLUDE: &'static str = "INCLUDE";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn include() -> Self {
        Self::new(Self::INCLUDE)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EntityKind {
    fn default() -> Self {
        Self::include()
    }
}

impl From<&str> for EntityKind {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for EntityKind {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}
