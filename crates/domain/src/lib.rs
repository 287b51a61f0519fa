#![allow(clippy::multiple_crate_versions)]

pub mod model;
pub mod numbering;
pub mod options;
pub mod progress;
pub mod value_objects;
