// src/presentation.rs
use std::io::{self, Write};

use console::style;
use decompose_inp_ports::progress::ProgressSink;
use decompose_inp_usecase::DecompositionReport;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::cli::SummaryFormat;

/// Progress bar on stderr, drawn only while a run is in progress.
pub struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    pub fn new() -> Self {
        let bar = ProgressBar::with_draw_target(Some(100), ProgressDrawTarget::hidden());
        if let Ok(style) = ProgressStyle::default_bar().template("{prefix} [{bar:40.cyan/blue}] {pos:>3}%") {
            bar.set_style(style.progress_chars("=> "));
        }
        bar.set_prefix("decomposing");
        Self { bar }
    }
}

impl Default for BarProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for BarProgress {
    fn set_visible(&self, visible: bool) {
        if visible {
            self.bar.reset();
            self.bar.set_draw_target(ProgressDrawTarget::stderr());
        } else {
            self.bar.finish_and_clear();
        }
    }

    fn report(&self, percent: u8) {
        self.bar.set_position(u64::from(percent));
    }
}

/// Blocking-severity error output: the message and its cause chain.
pub fn show_critical_message(err: &anyhow::Error) {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "{} {err}", style("critical:").red().bold());
    for cause in err.chain().skip(1) {
        let _ = writeln!(stderr, "  {} {cause}", style("caused by:").dim());
    }
}

pub fn print_summary(report: &DecompositionReport, format: SummaryFormat) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    match format {
        SummaryFormat::None => {}
        SummaryFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(report)?)?,
        SummaryFormat::Yaml => write!(out, "{}", serde_yaml::to_string(report)?)?,
        SummaryFormat::Text => write_text_summary(&mut out, report)?,
    }
    Ok(())
}

fn write_text_summary(out: &mut impl Write, report: &DecompositionReport) -> io::Result<()> {
    let width = report.groups.iter().map(|g| g.name.len()).max().unwrap_or(0);
    for group in &report.groups {
        let marker = if report.created.contains(&group.name) { "new" } else { "   " };
        writeln!(
            out,
            "{marker} {:<width$}  {:>20}  {:>6} properties  {:>8} elements",
            group.name,
            group.range.to_string(),
            group.properties.len(),
            group.elements.len(),
        )?;
    }
    for unknown in &report.unmatched {
        writeln!(out, "{} {unknown}", style("skipped").yellow())?;
    }
    if !report.dropped.is_empty() {
        writeln!(out, "{} {} properties of the final run were not written", style("dropped").yellow(), report.dropped.len())?;
    }
    writeln!(
        out,
        "{} of {} properties grouped into {} includes",
        report.grouped_properties(),
        report.total_properties,
        report.groups.len()
    )
}
