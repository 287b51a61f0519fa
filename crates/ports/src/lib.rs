//! # Ports
//!
//! Interface definitions for the host application the decomposition runs in.
//!
//! - [`host`]: entity collection, lookup, creation and membership
//! - [`numbering`]: the source of the numbering table
//! - [`progress`]: progress display for long-running runs
//!
//! The use case layer only talks to these traits; adapters live in the infra
//! crate and the binary.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod host;
pub mod numbering;
pub mod progress;
