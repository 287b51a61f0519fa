// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod format;
pub mod model;
pub mod numbering;
pub mod persistence;
pub mod progress;

pub use format::DocumentFormat;
pub use model::{InMemoryModel, ModelDocument};
pub use numbering::{NumberingFile, TableLayout};
pub use progress::LogProgress;
