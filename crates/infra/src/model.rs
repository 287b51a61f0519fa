// crates/infra/src/model.rs
//! File-backed host model.
//!
//! The whole model lives in memory while a run is in progress and is written
//! back as one document afterwards.

use std::{
    collections::{BTreeSet, HashMap, HashSet},
    path::Path,
};

use decompose_inp_domain::model::{Element, Property};
use decompose_inp_ports::host::{EntityHandle, EntityRecord, HostModel, Member};
use decompose_inp_shared_kernel::{
    EntityId, EntityKind, EntityName, ErrorContext, InfrastructureError, Result,
};
use serde::{Deserialize, Serialize};

use crate::{
    format::DocumentFormat,
    persistence::{FileReader, FileWriter},
};

/// Handles with this bit set refer to properties, which cannot hold members.
const PROPERTY_HANDLE: u64 = 1 << 63;

/// Serialized form of a group-like entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub name: EntityName,
    #[serde(default)]
    pub kind: EntityKind,
    #[serde(default)]
    pub properties: Vec<EntityId>,
    #[serde(default)]
    pub elements: Vec<EntityId>,
}

impl GroupRecord {
    fn new(kind: EntityKind, name: EntityName) -> Self {
        Self { id: None, name, kind, properties: Vec::new(), elements: Vec::new() }
    }

    fn members_mut(&mut self, member: &Member) -> (&mut Vec<EntityId>, EntityId) {
        match *member {
            Member::Property(id) => (&mut self.properties, id),
            Member::Element(id) => (&mut self.elements, id),
        }
    }
}

/// On-disk model document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDocument {
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub elements: Vec<Element>,
    #[serde(default)]
    pub groups: Vec<GroupRecord>,
}

/// In-memory [`HostModel`] over a [`ModelDocument`].
///
/// An entity may belong to several groups; adding a member twice to the same
/// group is a no-op.
#[derive(Debug, Clone, Default)]
pub struct InMemoryModel {
    document: ModelDocument,
    property_ids: HashSet<EntityId>,
    element_ids: HashSet<EntityId>,
    elements_by_property: HashMap<EntityId, Vec<usize>>,
}

impl InMemoryModel {
    pub fn new(document: ModelDocument) -> Self {
        let property_ids = document.properties.iter().map(|p| p.id).collect();
        let element_ids = document.elements.iter().map(|e| e.id).collect();
        let mut elements_by_property: HashMap<EntityId, Vec<usize>> = HashMap::new();
        for (index, element) in document.elements.iter().enumerate() {
            for property in &element.properties {
                elements_by_property.entry(*property).or_default().push(index);
            }
        }
        Self { document, property_ids, element_ids, elements_by_property }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let format = DocumentFormat::for_path(path, "model")?;
        let text = FileReader::read_to_string(path)?;
        let document: ModelDocument =
            format.parse(&text).with_context(|| format!("reading model '{}'", path.display()))?;
        Ok(Self::new(document))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let format = DocumentFormat::for_path(path, "model")?;
        let text = format.render(&self.document)?;
        FileWriter::atomic_write(path, text.as_bytes())?;
        Ok(())
    }

    pub fn document(&self) -> &ModelDocument {
        &self.document
    }

    pub fn groups(&self) -> &[GroupRecord] {
        &self.document.groups
    }

    pub fn group(&self, name: &str, kind: &EntityKind) -> Option<&GroupRecord> {
        self.document.groups.iter().find(|g| g.name.as_str() == name && &g.kind == kind)
    }

    fn group_index(&self, handle: EntityHandle) -> Result<usize> {
        let index = usize::try_from(handle.0).ok().filter(|&i| handle.0 & PROPERTY_HANDLE == 0 && i < self.document.groups.len());
        index.ok_or_else(|| InfrastructureError::UnknownEntity { handle: handle.0 }.into())
    }

    fn check_member(&self, member: &Member) -> Result<()> {
        let (known, kind, id) = match *member {
            Member::Property(id) => (self.property_ids.contains(&id), "property", id),
            Member::Element(id) => (self.element_ids.contains(&id), "element", id),
        };
        if known { Ok(()) } else { Err(InfrastructureError::UnknownMember { kind: kind.to_string(), id }.into()) }
    }
}

impl HostModel for InMemoryModel {
    fn collect_properties(&self) -> Result<Vec<Property>> {
        Ok(self.document.properties.clone())
    }

    fn collect_elements_referencing(&self, properties: &[Property]) -> Result<Vec<Element>> {
        let indices: BTreeSet<usize> = properties
            .iter()
            .filter_map(|p| self.elements_by_property.get(&p.id))
            .flatten()
            .copied()
            .collect();
        Ok(indices.into_iter().map(|i| self.document.elements[i].clone()).collect())
    }

    fn find_entities_by_name(&self, name: &str) -> Result<Vec<EntityRecord>> {
        let groups = self.document.groups.iter().enumerate().filter(|(_, g)| g.name.as_str() == name).map(|(i, g)| {
            EntityRecord { handle: EntityHandle(i as u64), name: g.name.clone(), kind: g.kind.clone(), id: g.id }
        });
        let properties =
            self.document.properties.iter().enumerate().filter(|(_, p)| p.name.as_str() == name).map(|(i, p)| {
                EntityRecord {
                    handle: EntityHandle(i as u64 | PROPERTY_HANDLE),
                    name: p.name.clone(),
                    kind: p.kind.clone(),
                    id: Some(p.id),
                }
            });
        Ok(groups.chain(properties).collect())
    }

    fn create_entity(&mut self, kind: &EntityKind, name: &EntityName) -> Result<EntityHandle> {
        self.document.groups.push(GroupRecord::new(kind.clone(), name.clone()));
        Ok(EntityHandle(self.document.groups.len() as u64 - 1))
    }

    fn set_entity_id(&mut self, entity: EntityHandle, id: EntityId) -> Result<()> {
        let index = self.group_index(entity)?;
        let kind = &self.document.groups[index].kind;
        if let Some(clash) =
            self.document.groups.iter().enumerate().find(|(i, g)| *i != index && &g.kind == kind && g.id == Some(id))
        {
            let (_, other) = clash;
            return Err(InfrastructureError::DuplicateEntity { id, kind: other.kind.clone(), name: other.name.clone() }
                .into());
        }
        self.document.groups[index].id = Some(id);
        Ok(())
    }

    fn add_members(&mut self, entity: EntityHandle, members: &[Member]) -> Result<()> {
        let index = self.group_index(entity)?;
        for member in members {
            self.check_member(member)?;
        }

        let target = &mut self.document.groups[index];
        for member in members {
            let (list, id) = target.members_mut(member);
            if !list.contains(&id) {
                list.push(id);
            }
        }
        Ok(())
    }
}
