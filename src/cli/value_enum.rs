// src/cli/value_enum.rs
use clap::ValueEnum;
use decompose_inp_domain::options::TrailingRun;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliTrailingRun {
    Flush,
    Drop,
}

impl From<CliTrailingRun> for TrailingRun {
    fn from(value: CliTrailingRun) -> Self {
        match value {
            CliTrailingRun::Flush => TrailingRun::Flush,
            CliTrailingRun::Drop => TrailingRun::Drop,
        }
    }
}

/// How the run summary is printed to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SummaryFormat {
    #[default]
    Text,
    Json,
    Yaml,
    None,
}
