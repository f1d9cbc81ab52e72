use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::input::{
    CATEGORIES_SHEET, CELL_DATA_SHEET, GROUPS_SHEET, LoadOptions, SheetNames,
};
use crate::report::chart::ChartOptions;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "cell-count-stats",
    about = "Per-specimen cell category counts and percentages from a tagged-cell workbook",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Aggregate one workbook and write the results workbook, tables and charts.
    Run(RunArgs),
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Input workbook (.xlsx).
    #[arg(long, value_name = "FILE")]
    pub input: PathBuf,

    /// Output directory; created if missing.
    #[arg(long, value_name = "DIR")]
    pub out: PathBuf,

    #[arg(long, env = "CELL_STATS_CELLS_SHEET", default_value = CELL_DATA_SHEET)]
    pub cells_sheet: String,

    #[arg(long, env = "CELL_STATS_CATEGORIES_SHEET", default_value = CATEGORIES_SHEET)]
    pub categories_sheet: String,

    #[arg(long, env = "CELL_STATS_GROUPS_SHEET", default_value = GROUPS_SHEET)]
    pub groups_sheet: String,

    /// Rows above the Cell Data header.
    #[arg(long, default_value_t = 1)]
    pub cell_skip_rows: u32,

    /// Facets per row in the chart documents.
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..))]
    pub facet_cols: u32,

    /// Metadata column used for chart color.
    #[arg(long, default_value = "Genotype")]
    pub color_field: String,

    /// Metadata column used for the chart x axis.
    #[arg(long, default_value = "Gender")]
    pub x_field: String,

    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub out_dir: PathBuf,
    pub load: LoadOptions,
    pub chart: ChartOptions,
    pub verbose: bool,
}

impl From<RunArgs> for RunConfig {
    fn from(args: RunArgs) -> Self {
        Self {
            input: args.input,
            out_dir: args.out,
            load: LoadOptions {
                sheets: SheetNames {
                    cells: args.cells_sheet,
                    categories: args.categories_sheet,
                    groups: args.groups_sheet,
                },
                cell_skip_rows: args.cell_skip_rows,
            },
            chart: ChartOptions {
                facet_columns: args.facet_cols as usize,
                color_field: args.color_field,
                x_field: args.x_field,
            },
            verbose: args.verbose,
        }
    }
}

impl Cli {
    pub fn into_config(self) -> RunConfig {
        match self.command {
            Command::Run(args) => args.into(),
        }
    }
}
