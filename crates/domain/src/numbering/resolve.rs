// crates/domain/src/numbering/resolve.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{IdRange, NumberingTable};
use crate::{
    model::Property,
    value_objects::{EntityId, EntityKind, EntityName},
};

/// The table row that owns a property id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeMatch {
    /// Absolute row index in the table.
    pub index: usize,
    pub name: EntityName,
    pub range: IdRange,
}

/// A property whose id is covered by no row of the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnknownSubsystem {
    pub kind: EntityKind,
    pub id: EntityId,
    pub name: EntityName,
}

impl From<&Property> for UnknownSubsystem {
    fn from(property: &Property) -> Self {
        Self { kind: property.kind.clone(), id: property.id, name: property.name.clone() }
    }
}

impl fmt::Display for UnknownSubsystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Property not identified: {} - {}: {}", self.kind, self.id, self.name)
    }
}

/// Outcome of looking up a property in the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(RangeMatch),
    Unknown(UnknownSubsystem),
}

impl NumberingTable {
    /// Find the row whose range contains `property.id`.
    ///
    /// Scanning starts at `cursor` and continues to the end of the table, then
    /// wraps to the rows before `cursor`. Malformed rows are skipped.
    pub fn resolve(&self, cursor: usize, property: &Property) -> Resolution {
        let cursor = cursor.min(self.len());
        let forward = (cursor..self.len()).map(|index| (index, &self[index]));
        let wrapped = (0..cursor).map(|index| (index, &self[index]));

        forward
            .chain(wrapped)
            .find_map(|(index, record)| {
                record
                    .bounds()
                    .filter(|range| range.contains(property.id))
                    .map(|range| RangeMatch { index, name: record.name.clone(), range })
            })
            .map_or_else(|| Resolution::Unknown(property.into()), Resolution::Found)
    }
}
