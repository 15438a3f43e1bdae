//! Complexity report generator.
//!
//! Turns a JSON complexity-metrics document (see [`model`]) into a static HTML
//! report: overall totals, then one section per file that has functions.

pub mod html;
pub mod model;
pub mod summary;

use chrono::Local;
use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use testbench_derive::Merge;

use crate::config::TestbenchConfig;
use crate::output::{OutputFormat, OutputFormatter, error_chain};
use html::RenderOptions;
use model::ComplexityInput;
use summary::Totals;

/// Report configuration from config.toml.
///
/// ```toml
/// [report]
/// cyclomatic_threshold = 10
/// cognitive_threshold = 5
/// ```
#[derive(Debug, Clone, Deserialize, Default, Merge)]
#[serde(default)]
pub struct ReportConfig {
    /// Highlight functions with cyclomatic complexity above this. Default: 5
    pub cyclomatic_threshold: Option<u64>,
    /// Highlight functions with cognitive complexity above this. Default: 3
    pub cognitive_threshold: Option<u64>,
}

impl ReportConfig {
    pub fn render_options(&self) -> RenderOptions {
        let defaults = RenderOptions::default();
        RenderOptions {
            cyclomatic_threshold: self
                .cyclomatic_threshold
                .unwrap_or(defaults.cyclomatic_threshold),
            cognitive_threshold: self
                .cognitive_threshold
                .unwrap_or(defaults.cognitive_threshold),
        }
    }
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Report command arguments
#[derive(Args)]
pub struct ReportArgs {
    /// Path to input JSON file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path to output HTML file
    #[arg(short, long)]
    pub output: PathBuf,
}

/// What a report run produced.
#[derive(Debug, Serialize)]
pub struct ReportOutcome {
    pub output: PathBuf,
    pub totals: Totals,
}

impl OutputFormatter for ReportOutcome {
    fn format_text(&self) -> String {
        format!("Report generated: {}", self.output.display())
    }
}

/// Load `input`, render it, and write the HTML to `output`.
pub fn generate(
    input: &Path,
    output: &Path,
    options: &RenderOptions,
) -> Result<ReportOutcome, ReportError> {
    tracing::debug!(input = %input.display(), "loading complexity metrics");
    let metrics = ComplexityInput::load(input)?;
    let totals = Totals::from_input(&metrics);
    tracing::debug!(?totals, "aggregated");

    let document = html::render(&metrics, &totals, options, Local::now().naive_local());
    write_report(output, &document)?;
    tracing::info!(output = %output.display(), files = totals.files, "report written");

    Ok(ReportOutcome {
        output: output.to_path_buf(),
        totals,
    })
}

fn write_report(path: &Path, document: &str) -> Result<(), ReportError> {
    let to_err = |source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(to_err)?;
    }
    std::fs::write(path, document).map_err(to_err)
}

/// Run the report command
pub fn run(args: ReportArgs, config: &TestbenchConfig, format: &OutputFormat) -> i32 {
    match generate(&args.input, &args.output, &config.report.render_options()) {
        Ok(outcome) => {
            outcome.print(format);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", error_chain(&e));
            1
        }
    }
}
