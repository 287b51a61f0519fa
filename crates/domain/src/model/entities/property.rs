use serde::{Deserialize, Serialize};

use crate::value_objects::{EntityId, EntityKind, EntityName};

/// A property entity as seen by the decomposition: identity plus labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Property {
    pub id: EntityId,
    #[serde(default)]
    pub name: EntityName,
    #[serde(default = "Property::default_kind")]
    pub kind: EntityKind,
}

impl Property {
    pub const DEFAULT_KIND: &'static str = "PROPERTY";

    pub fn new(id: i64, name: impl Into<EntityName>, kind: impl Into<EntityKind>) -> Self {
        Self { id: EntityId::new(id), name: name.into(), kind: kind.into() }
    }

    fn default_kind() -> EntityKind {
        EntityKind::new(Self::DEFAULT_KIND)
    }
}
