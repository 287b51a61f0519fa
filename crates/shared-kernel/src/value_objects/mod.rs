// crates/shared-kernel/src/value_objects/mod.rs
pub mod entity;

pub use entity::{EntityId, EntityKind, EntityName};
