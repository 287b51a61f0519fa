// crates/infra/src/numbering/delimited.rs
use std::{io::Read, path::Path};

use decompose_inp_domain::numbering::{NumberingTable, RangeDefinition};
use decompose_inp_shared_kernel::Result;
use log::debug;

use super::TableLayout;
use crate::persistence::FileReader;

/// Reads delimited text exports of the numbering convention.
///
/// Rows are never rejected for their content: short rows get empty bounds and
/// header or note rows simply fail to parse later on.
#[derive(Debug, Clone, Default)]
pub struct DelimitedTableReader {
    layout: TableLayout,
}

impl DelimitedTableReader {
    pub fn new(layout: TableLayout) -> Self {
        Self { layout }
    }

    pub fn read_path(&self, path: &Path) -> Result<NumberingTable> {
        self.read(FileReader::open_buffered(path)?)
    }

    pub fn read<R: Read>(&self, input: R) -> Result<NumberingTable> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.layout.delimiter_byte()?)
            .comment(self.layout.comment_byte()?)
            .has_headers(self.layout.has_headers)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(input);

        let mut records = Vec::new();
        // Exports come in mixed encodings; only the three used cells are decoded.
        for row in reader.byte_records() {
            let row = row?;
            let field = |column: usize| String::from_utf8_lossy(row.get(column).unwrap_or_default()).into_owned();
            let record = RangeDefinition::new(
                field(self.layout.name_column),
                field(self.layout.min_column),
                field(self.layout.max_column),
            );
            if record.is_malformed() {
                let line = row.position().map_or(0, csv::Position::line);
                let cells: Vec<_> = row.iter().map(String::from_utf8_lossy).collect();
                debug!("numbering row {line} has no numeric range: {cells:?}");
            }
            records.push(record);
        }
        Ok(NumberingTable::new(records))
    }
}
