// crates/ports/src/host.rs
use std::fmt;

use decompose_inp_domain::model::{Element, Property};
use decompose_inp_shared_kernel::{EntityId, EntityKind, EntityName, Result};
use serde::{Deserialize, Serialize};

/// Opaque reference to an entity living in the host model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct EntityHandle(pub u64);

impl fmt::Display for EntityHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// DTO returned by name lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub handle: EntityHandle,
    pub name: EntityName,
    pub kind: EntityKind,
    pub id: Option<EntityId>,
}

/// Something that can be attached to a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "lowercase")]
pub enum Member {
    Property(EntityId),
    Element(EntityId),
}

impl From<&Property> for Member {
    fn from(property: &Property) -> Self {
        Self::Property(property.id)
    }
}

impl From<&Element> for Member {
    fn from(element: &Element) -> Self {
        Self::Element(element.id)
    }
}

/// Port for the host model that owns properties, elements and groups.
pub trait HostModel {
    /// All property entities, in no particular order.
    fn collect_properties(&self) -> Result<Vec<Property>>;

    /// Elements referencing at least one of `properties`.
    fn collect_elements_referencing(&self, properties: &[Property]) -> Result<Vec<Element>>;

    /// Exact-match name lookup across all entity kinds.
    fn find_entities_by_name(&self, name: &str) -> Result<Vec<EntityRecord>>;

    fn create_entity(&mut self, kind: &EntityKind, name: &EntityName) -> Result<EntityHandle>;

    fn set_entity_id(&mut self, entity: EntityHandle, id: EntityId) -> Result<()>;

    fn add_members(&mut self, entity: EntityHandle, members: &[Member]) -> Result<()>;
}
