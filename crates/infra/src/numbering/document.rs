// crates/infra/src/numbering/document.rs
use std::path::Path;

use decompose_inp_domain::numbering::{NumberingTable, RangeDefinition, RawBound};
use decompose_inp_shared_kernel::{EntityName, Result};
use serde::{Deserialize, Serialize};

use crate::{format::DocumentFormat, persistence::FileReader};

/// A bound cell in a JSON/YAML table: a number or free text.
///
/// Anything else (null, floats, lists) lands in `Other` and leaves the row
/// without a numeric range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoundField {
    Number(i64),
    Text(String),
    Other(serde_json::Value),
}

impl From<BoundField> for RawBound {
    fn from(field: BoundField) -> Self {
        match field {
            BoundField::Number(n) => RawBound::from(n),
            BoundField::Text(t) => RawBound::from(t),
            BoundField::Other(_) => RawBound::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub name: EntityName,
    #[serde(default = "TableRow::empty")]
    pub min: BoundField,
    #[serde(default = "TableRow::empty")]
    pub max: BoundField,
}

impl TableRow {
    fn empty() -> BoundField {
        BoundField::Text(String::new())
    }
}

/// Numbering table as a list of `{name, min, max}` rows.
pub struct TableDocument;

impl TableDocument {
    pub fn read(path: &Path, format: DocumentFormat) -> Result<NumberingTable> {
        let text = FileReader::read_to_string(path)?;
        Self::parse(&text, format)
    }

    pub fn parse(text: &str, format: DocumentFormat) -> Result<NumberingTable> {
        let rows: Vec<TableRow> = format.parse(text)?;
        Ok(rows.into_iter().map(|row| RangeDefinition::new(row.name, row.min, row.max)).collect())
    }
}
