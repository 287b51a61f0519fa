// src/app.rs
use anyhow::{Context, Result};
use decompose_inp_infra::{InMemoryModel, LogProgress, NumberingFile};
use decompose_inp_ports::progress::ProgressSink;
use decompose_inp_usecase::{Decomposer, DecompositionReport};
use log::info;

use crate::{config::Config, presentation::BarProgress};

/// Load the model, decompose it and write it back.
///
/// Nothing is written when the run fails part way.
pub fn run(config: &Config) -> Result<DecompositionReport> {
    let mut model = InMemoryModel::load(&config.model).context("failed to load model")?;
    let table = NumberingFile::new(&config.table, config.layout.clone());

    let bar;
    let quiet;
    let progress: &dyn ProgressSink = if config.progress {
        bar = BarProgress::new();
        &bar
    } else {
        quiet = LogProgress::new();
        &quiet
    };

    let report = Decomposer::new(&mut model, progress)
        .with_options(config.options.clone())
        .run(&table)
        .context("decomposition aborted")?;

    if config.dry_run {
        info!("dry run: '{}' left untouched", config.output.display());
    } else {
        model.save(&config.output).with_context(|| format!("failed to write '{}'", config.output.display()))?;
    }
    Ok(report)
}
