use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::value_objects::{EntityId, EntityKind};

/// A mesh entity and the properties it references.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Element {
    pub id: EntityId,
    #[serde(default = "Element::default_kind")]
    pub kind: EntityKind,
    #[serde(default)]
    pub properties: Vec<EntityId>,
}

impl Element {
    pub const DEFAULT_KIND: &'static str = "ELEMENT";

    pub fn new(id: i64, properties: impl IntoIterator<Item = EntityId>) -> Self {
        Self { id: EntityId::new(id), kind: Self::default_kind(), properties: properties.into_iter().collect() }
    }

    pub fn with_kind(mut self, kind: impl Into<EntityKind>) -> Self {
        self.kind = kind.into();
        self
    }

    #[inline]
    pub fn references_any(&self, property_ids: &BTreeSet<EntityId>) -> bool {
        self.properties.iter().any(|id| property_ids.contains(id))
    }

    fn default_kind() -> EntityKind {
        EntityKind::new(Self::DEFAULT_KIND)
    }
}
