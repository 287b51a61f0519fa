//! Numbering table readers.

pub mod delimited;
pub mod document;
pub mod layout;

use std::path::{Path, PathBuf};

use decompose_inp_domain::numbering::NumberingTable;
use decompose_inp_ports::numbering::NumberingSource;
use decompose_inp_shared_kernel::{ErrorContext, Result};

pub use delimited::DelimitedTableReader;
pub use document::TableDocument;
pub use layout::TableLayout;

use crate::format::DocumentFormat;

/// A numbering table stored in a file; the extension picks the reader.
///
/// `.json`, `.yaml` and `.yml` are read as documents, anything else as
/// delimited text laid out per [`TableLayout`].
#[derive(Debug, Clone)]
pub struct NumberingFile {
    path: PathBuf,
    layout: TableLayout,
}

impl NumberingFile {
    pub fn new(path: impl Into<PathBuf>, layout: TableLayout) -> Self {
        Self { path: path.into(), layout }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl NumberingSource for NumberingFile {
    fn load(&self) -> Result<NumberingTable> {
        let document_format =
            self.path.extension().and_then(|e| e.to_str()).and_then(DocumentFormat::from_extension);
        let table = match document_format {
            Some(format) => TableDocument::read(&self.path, format),
            None => DelimitedTableReader::new(self.layout.clone()).read_path(&self.path),
        }
        .with_context(|| format!("loading numbering table '{}'", self.path.display()))?;

        log::info!(
            "numbering table '{}': {} rows, {} usable",
            self.path.display(),
            table.len(),
            table.usable_len()
        );
        Ok(table)
    }
}
