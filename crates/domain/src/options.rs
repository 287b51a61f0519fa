// crates/domain/src/options.rs
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// What happens to the run of properties still buffered when the input ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailingRun {
    /// Write the final run into its group like every other run.
    #[default]
    Flush,
    /// Discard the final run. Matches the behaviour of the original include
    /// splitter, where only a later range boundary ever closed a run.
    Drop,
}

impl FromStr for TrailingRun {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flush" => Ok(Self::Flush),
            "drop" | "legacy" => Ok(Self::Drop),
            other => Err(format!("Unknown trailing-run policy: {other}")),
        }
    }
}

impl fmt::Display for TrailingRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Flush => "flush",
            Self::Drop => "drop",
        })
    }
}
