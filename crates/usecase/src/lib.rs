//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`decomposer`]: splits the model's properties into sub-system includes
//! - [`dto`]: the report handed back to the caller
//! - [`options`]: knobs for a decomposition run
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod decomposer;
pub mod dto;
pub mod options;

pub use decomposer::Decomposer;
pub use dto::DecompositionReport;
pub use options::{DecomposeOptions, DecomposeOptionsBuilder};
