// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use clap::Parser;
use decompose_inp::{app, cli::Args, config::Config, logging, presentation};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    let outcome = Config::from_args(args)
        .map_err(anyhow::Error::from)
        .and_then(|config| app::run(&config).map(|report| (config, report)))
        .and_then(|(config, report)| presentation::print_summary(&report, config.summary));

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            presentation::show_critical_message(&err);
            ExitCode::FAILURE
        }
    }
}
