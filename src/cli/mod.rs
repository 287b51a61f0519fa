// src/cli/mod.rs
mod args;
mod value_enum;

pub use args::Args;
pub use value_enum::{CliTrailingRun, SummaryFormat};

use decompose_inp_shared_kernel::{PresentationError, Result};

/// Checks that clap cannot express on its own.
pub fn validate(args: &Args) -> Result<()> {
    if let (Some(min), Some(max)) = (args.min_column, args.max_column) {
        if min == max {
            return Err(PresentationError::InvalidValue {
                flag: "--max-column".to_string(),
                value: max.to_string(),
                reason: "must differ from --min-column".to_string(),
            }
            .into());
        }
    }
    if let Some(kind) = args.group_kind.as_deref() {
        if kind.trim().is_empty() {
            return Err(PresentationError::InvalidValue {
                flag: "--group-kind".to_string(),
                value: kind.to_string(),
                reason: "must not be empty".to_string(),
            }
            .into());
        }
    }
    Ok(())
}
