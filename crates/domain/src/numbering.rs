//! Numbering convention: named id ranges and the lookup that classifies
//! property ids into sub-systems.

pub mod range;
pub mod resolve;
pub mod table;

pub use range::{IdRange, RangeDefinition, RawBound};
pub use resolve::{RangeMatch, Resolution, UnknownSubsystem};
pub use table::NumberingTable;
