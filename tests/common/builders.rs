// tests/common/builders.rs
// Builders for model documents and numbering tables.
use std::path::PathBuf;

use decompose_inp_domain::model::{Element, Property};
use decompose_inp_infra::{ModelDocument, model::GroupRecord};
use decompose_inp_shared_kernel::{EntityId, EntityKind};

use super::TempWorkspace;

/// Builds a model where every property gets one element with id `10 * id`.
#[derive(Default)]
#[allow(dead_code)]
pub struct ModelBuilder {
    document: ModelDocument,
}

#[allow(dead_code)]
impl ModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn properties(mut self, ids: &[i64]) -> Self {
        for &id in ids {
            self.document.properties.push(Property::new(id, format!("prop_{id}"), "SHELL_SECTION"));
            self.document.elements.push(Element::new(id * 10, [EntityId::new(id)]).with_kind("SHELL"));
        }
        self
    }

    /// An extra element referencing several properties.
    pub fn shared_element(mut self, id: i64, properties: &[i64]) -> Self {
        self.document.elements.push(Element::new(id, properties.iter().copied().map(EntityId::new)));
        self
    }

    pub fn group(mut self, name: &str, kind: &str, id: Option<i64>) -> Self {
        self.document.groups.push(GroupRecord {
            id: id.map(EntityId::new),
            name: name.into(),
            kind: EntityKind::new(kind),
            properties: Vec::new(),
            elements: Vec::new(),
        });
        self
    }

    pub fn build(self) -> ModelDocument {
        self.document
    }

    pub fn write_json(self, workspace: &TempWorkspace, rel: &str) -> PathBuf {
        let text = serde_json::to_string_pretty(&self.document).unwrap();
        workspace.write_file(rel, &text)
    }
}

/// Builds a numbering table in the default `;`-separated export layout.
#[derive(Default)]
#[allow(dead_code)]
pub struct TableBuilder {
    lines: Vec<String>,
}

#[allow(dead_code)]
impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn range(self, name: &str, min: i64, max: i64) -> Self {
        self.raw(name, &min.to_string(), &max.to_string())
    }

    pub fn raw(mut self, name: &str, min: &str, max: &str) -> Self {
        self.lines.push(format!("{name};owner;dept;;;;;;{min};{max}"));
        self
    }

    pub fn to_csv(&self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }

    pub fn write(&self, workspace: &TempWorkspace, rel: &str) -> PathBuf {
        workspace.write_file(rel, &self.to_csv())
    }
}
