use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::layout::long::{LongTable, all_percents, primary_percents};
use crate::layout::wide::wide_view;
use crate::pipeline::CellStats;
use crate::report::ExportError;
use crate::report::chart::{ChartOptions, render_box_chart};
use crate::report::json::{RunSummary, render_summary_json};
use crate::report::text::render_long_tsv;
use crate::report::xlsx::write_workbook;

pub const WORKBOOK_SUFFIX: &str = "_results.xlsx";
pub const PRIMARY_TSV: &str = "primary_percents.tsv";
pub const ALL_TSV: &str = "all_percents.tsv";
pub const PRIMARY_CHART: &str = "primary_percents.vl.json";
pub const ALL_CHART: &str = "all_percents.vl.json";
pub const SUMMARY_JSON: &str = "summary.json";

#[derive(Debug, Clone)]
pub struct Stage7Input<'a> {
    pub stats: &'a CellStats,
    pub source: &'a Path,
    pub chart: &'a ChartOptions,
}

/// Every artefact written by one run, in write order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub workbook: PathBuf,
    pub primary_tsv: PathBuf,
    pub all_tsv: PathBuf,
    /// `None` when the chart fields are not in the specimen metadata.
    pub primary_chart: Option<PathBuf>,
    pub all_chart: Option<PathBuf>,
    pub summary: PathBuf,
}

impl ReportPaths {
    pub fn all(&self) -> Vec<&Path> {
        let mut out = vec![
            self.workbook.as_path(),
            self.primary_tsv.as_path(),
            self.all_tsv.as_path(),
        ];
        out.extend(self.primary_chart.as_deref());
        out.extend(self.all_chart.as_deref());
        out.push(self.summary.as_path());
        out
    }
}

/// `<input-stem>_results.xlsx`.
pub fn workbook_name(source: &Path) -> String {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "cell_counts".to_string());
    format!("{stem}{WORKBOOK_SUFFIX}")
}

pub fn write_reports(input: &Stage7Input<'_>, out_dir: &Path) -> Result<ReportPaths, ExportError> {
    fs::create_dir_all(out_dir)?;
    let stats = input.stats;

    let workbook = out_dir.join(workbook_name(input.source));
    write_workbook(&wide_view(stats), &workbook)?;

    let primary = primary_percents(stats);
    let all = all_percents(stats);

    let primary_tsv = out_dir.join(PRIMARY_TSV);
    write_text(&primary_tsv, &render_long_tsv(&primary))?;
    let all_tsv = out_dir.join(ALL_TSV);
    write_text(&all_tsv, &render_long_tsv(&all))?;

    let primary_title = format!("Percent of {}", stats.categories.primary().label);
    let primary_chart = write_chart(
        &primary,
        &primary_title,
        input.chart,
        &out_dir.join(PRIMARY_CHART),
    )?;
    let all_chart = write_chart(
        &all,
        "Pairwise percents",
        input.chart,
        &out_dir.join(ALL_CHART),
    )?;

    let paths = ReportPaths {
        workbook,
        primary_tsv,
        all_tsv,
        primary_chart,
        all_chart,
        summary: out_dir.join(SUMMARY_JSON),
    };

    let outputs = paths
        .all()
        .into_iter()
        .filter_map(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .collect();
    let summary = RunSummary::new(stats, &input.source.to_string_lossy(), outputs);
    write_text(&paths.summary, &render_summary_json(&summary)?)?;

    tracing::info!(out_dir = %out_dir.display(), files = paths.all().len(), "reports written");
    Ok(paths)
}

fn write_chart(
    table: &LongTable,
    title: &str,
    options: &ChartOptions,
    path: &Path,
) -> Result<Option<PathBuf>, ExportError> {
    let chart = match render_box_chart(table, title, options) {
        Ok(chart) => chart,
        Err(err) => {
            tracing::warn!(chart = %path.display(), "skipping chart: {err}");
            remove_stale(path)?;
            return Ok(None);
        }
    };
    let mut json = serde_json::to_string_pretty(&chart)?;
    json.push('\n');
    write_text(path, &json)?;
    Ok(Some(path.to_path_buf()))
}

/// Drops a chart left by an earlier run into the same directory.
fn remove_stale(path: &Path) -> std::io::Result<()> {
    match fs::remove_file(path) {
        Err(err) if err.kind() != ErrorKind::NotFound => Err(err),
        _ => Ok(()),
    }
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage7_report.rs"]
mod tests;
