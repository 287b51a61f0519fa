// src/config.rs
use std::path::{Path, PathBuf};

use decompose_inp_domain::options::TrailingRun;
use decompose_inp_infra::{
    TableLayout,
    format::DocumentFormat,
    persistence::FileReader,
};
use decompose_inp_shared_kernel::{EntityKind, ErrorContext, PresentationError, Result};
use decompose_inp_usecase::{DecomposeOptions, DecomposeOptionsBuilder};
use serde::{Deserialize, Serialize};

use crate::cli::{self, Args, SummaryFormat};

/// Settings file contents. Every field is optional; flags override them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub table: Option<PathBuf>,
    pub layout: Option<TableLayout>,
    pub group_kind: Option<String>,
    pub trailing_run: Option<TrailingRun>,
    pub summary: Option<SummaryFormat>,
    pub progress: Option<bool>,
}

impl FileConfig {
    /// Read a settings file; a relative `table` is taken relative to the file.
    pub fn load(path: &Path) -> Result<Self> {
        let format = DocumentFormat::for_path(path, "config")?;
        let text = FileReader::read_to_string(path)?;
        let mut config: Self =
            format.parse(&text).with_context(|| format!("reading config '{}'", path.display()))?;
        if let (Some(table), Some(dir)) = (config.table.as_mut(), path.parent()) {
            if table.is_relative() {
                *table = dir.join(&*table);
            }
        }
        Ok(config)
    }
}

/// Fully resolved run configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub model: PathBuf,
    pub output: PathBuf,
    pub table: PathBuf,
    pub layout: TableLayout,
    pub options: DecomposeOptions,
    pub summary: SummaryFormat,
    pub progress: bool,
    pub dry_run: bool,
    pub verbose: u8,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self> {
        cli::validate(&args)?;
        let file = match &args.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Self::merge(args, file)
    }

    fn merge(args: Args, file: FileConfig) -> Result<Self> {
        let table = args.table.or(file.table).ok_or_else(|| PresentationError::InvalidValue {
            flag: "--table".to_string(),
            value: String::new(),
            reason: "no numbering table given on the command line or in the config file".to_string(),
        })?;

        let mut layout = file.layout.unwrap_or_default();
        if let Some(delimiter) = args.delimiter {
            layout.delimiter = delimiter;
        }
        if let Some(column) = args.name_column {
            layout.name_column = column;
        }
        if let Some(column) = args.min_column {
            layout.min_column = column;
        }
        if let Some(column) = args.max_column {
            layout.max_column = column;
        }
        layout.has_headers |= args.has_headers;

        let mut options = DecomposeOptionsBuilder::default();
        if let Some(kind) = args.group_kind.or(file.group_kind) {
            options.group_kind(EntityKind::new(kind));
        }
        if let Some(policy) = args.trailing_run.map(TrailingRun::from).or(file.trailing_run) {
            options.trailing_run(policy);
        }
        let options = options.build().map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()))?;

        Ok(Self {
            output: args.output.unwrap_or_else(|| args.model.clone()),
            model: args.model,
            table,
            layout,
            options,
            summary: args.summary.or(file.summary).unwrap_or_default(),
            progress: !args.no_progress && file.progress.unwrap_or(true),
            dry_run: args.dry_run,
            verbose: args.verbose,
        })
    }
}
