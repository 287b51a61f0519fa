// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use super::value_enum::{CliTrailingRun, SummaryFormat};

#[derive(Parser, Debug)]
#[command(
    name = "decompose-inp",
    version = crate::VERSION,
    about = "Sort model properties and their elements into sub-system includes by numbering range"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Model document (.json, .yaml, .yml)
    #[arg(value_hint = ValueHint::FilePath)]
    pub model: PathBuf,

    /// Numbering table (.csv/.txt delimited export, or .json/.yaml rows)
    #[arg(long, short = 't', value_hint = ValueHint::FilePath)]
    pub table: Option<PathBuf>,

    /// Settings file (.json, .yaml); flags take precedence
    #[arg(long, short = 'c', value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Where to write the updated model (default: overwrite MODEL)
    #[arg(long, short = 'o', value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Entity kind that collects each sub-system
    #[arg(long)]
    pub group_kind: Option<String>,

    /// Handling of the properties still pending when the model ends
    #[arg(long, value_enum)]
    pub trailing_run: Option<CliTrailingRun>,

    /// Field delimiter of a delimited table
    #[arg(long)]
    pub delimiter: Option<char>,

    /// Zero-based column holding the sub-system name
    #[arg(long)]
    pub name_column: Option<usize>,

    /// Zero-based column holding the lower id bound
    #[arg(long)]
    pub min_column: Option<usize>,

    /// Zero-based column holding the upper id bound
    #[arg(long)]
    pub max_column: Option<usize>,

    /// Treat the first table row as a header
    #[arg(long)]
    pub has_headers: bool,

    /// Summary printed after a successful run
    #[arg(long, value_enum)]
    pub summary: Option<SummaryFormat>,

    /// Do not draw a progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Decompose without writing the model back
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
