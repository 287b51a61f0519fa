// crates/infra/src/numbering/layout.rs
use decompose_inp_shared_kernel::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// Column layout of a delimited numbering table.
///
/// The defaults match the numbering convention export: sub-system name in the
/// first column and the id bounds in columns 9 and 10.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableLayout {
    pub delimiter: char,
    pub name_column: usize,
    pub min_column: usize,
    pub max_column: usize,
    pub has_headers: bool,
    pub comment: Option<char>,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self { delimiter: ';', name_column: 0, min_column: 8, max_column: 9, has_headers: false, comment: Some('#') }
    }
}

impl TableLayout {
    pub fn delimiter_byte(&self) -> DomainResult<u8> {
        ascii_byte(self.delimiter, "delimiter")
    }

    pub fn comment_byte(&self) -> DomainResult<Option<u8>> {
        self.comment.map(|c| ascii_byte(c, "comment")).transpose()
    }
}

fn ascii_byte(c: char, what: &str) -> DomainResult<u8> {
    u8::try_from(c).ok().filter(u8::is_ascii).ok_or_else(|| DomainError::InvalidConfiguration {
        reason: format!("table {what} must be a single ASCII character, got '{c}'"),
    })
}
