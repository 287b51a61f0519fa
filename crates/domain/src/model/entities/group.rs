use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{Element, Property};
use crate::{numbering::IdRange, value_objects::EntityName};

/// One sub-system include produced by a decomposition run.
///
/// Properties keep flush order; elements are unique by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: EntityName,
    pub range: IdRange,
    pub properties: Vec<Property>,
    pub elements: Vec<Element>,
}

impl Group {
    pub fn new(name: EntityName, range: IdRange) -> Self {
        Self { name, range, properties: Vec::new(), elements: Vec::new() }
    }

    /// Merge another flushed run into this group.
    pub fn absorb(&mut self, properties: impl IntoIterator<Item = Property>, elements: impl IntoIterator<Item = Element>) {
        self.properties.extend(properties);
        let mut seen: HashSet<_> = self.elements.iter().map(|e| e.id).collect();
        self.elements.extend(elements.into_iter().filter(|e| seen.insert(e.id)));
    }

    pub fn contains_property(&self, property: &Property) -> bool {
        self.properties.iter().any(|p| p.id == property.id)
    }
}
