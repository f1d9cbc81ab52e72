mod config;
mod input;
mod layout;
mod logging;
mod model;
mod pipeline;
mod report;

use std::io::Write;

use clap::Parser;
use thiserror::Error;

use crate::config::{Cli, RunConfig};
use crate::input::{LoadError, load_input};
use crate::pipeline::stage7_report::{ReportPaths, Stage7Input, write_reports};
use crate::pipeline::{AggregationError, run_pipeline};
use crate::report::ExportError;
use crate::report::text::render_count_table;

#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Aggregation(#[from] AggregationError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

fn main() {
    let config = Cli::parse().into_config();
    logging::init_logging(config.verbose);
    if let Err(err) = run(&config) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(config: &RunConfig) -> Result<ReportPaths, RunError> {
    let bundle = load_input(&config.input, &config.load)?;
    let stats = run_pipeline(&bundle)?;

    for warning in stats.warnings() {
        tracing::warn!("{warning}");
    }

    let preview = render_count_table(&stats.totals);
    std::io::stdout()
        .lock()
        .write_all(preview.as_bytes())
        .map_err(ExportError::from)?;

    let paths = write_reports(
        &Stage7Input {
            stats: &stats,
            source: &bundle.source,
            chart: &config.chart,
        },
        &config.out_dir,
    )?;
    tracing::info!(workbook = %paths.workbook.display(), "done");
    Ok(paths)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
