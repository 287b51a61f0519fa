pub mod entities;

pub use entities::{Element, Group, Property};

pub use crate::value_objects::{EntityId, EntityKind, EntityName};
