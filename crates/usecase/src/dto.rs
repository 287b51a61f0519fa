// crates/usecase/src/dto.rs
use decompose_inp_domain::{
    model::{Element, Group, Property},
    numbering::{RangeMatch, UnknownSubsystem},
};
use decompose_inp_shared_kernel::EntityName;
use serde::Serialize;

/// Outcome of one decomposition run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DecompositionReport {
    /// One entry per sub-system, in the order first flushed.
    pub groups: Vec<Group>,
    /// Properties whose id no range covers.
    pub unmatched: Vec<UnknownSubsystem>,
    /// Final run discarded under `TrailingRun::Drop`.
    pub dropped: Vec<Property>,
    /// Groups that did not exist in the host before this run.
    pub created: Vec<EntityName>,
    pub total_properties: usize,
    pub flushes: usize,
}

impl DecompositionReport {
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name.as_str() == name)
    }

    pub fn grouped_properties(&self) -> usize {
        self.groups.iter().map(|g| g.properties.len()).sum()
    }

    pub(crate) fn record_flush(&mut self, range: &RangeMatch, properties: Vec<Property>, elements: Vec<Element>) {
        self.flushes += 1;
        match self.groups.iter_mut().find(|g| g.name == range.name) {
            Some(group) => group.absorb(properties, elements),
            None => {
                let mut group = Group::new(range.name.clone(), range.range);
                group.absorb(properties, elements);
                self.groups.push(group);
            }
        }
    }
}
