// crates/ports/src/numbering.rs
use decompose_inp_domain::numbering::NumberingTable;
use decompose_inp_shared_kernel::Result;

/// Port for loading the numbering convention.
pub trait NumberingSource {
    fn load(&self) -> Result<NumberingTable>;
}

impl NumberingSource for NumberingTable {
    fn load(&self) -> Result<NumberingTable> {
        Ok(self.clone())
    }
}
