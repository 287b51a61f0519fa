// tests/common/mod.rs
//! Shared test utilities.

pub mod builders;
pub mod temp;

#[allow(unused_imports)]
pub use builders::*;
#[allow(unused_imports)]
pub use temp::TempWorkspace;
