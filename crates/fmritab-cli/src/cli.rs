//! CLI argument definitions using clap.

use clap::{Args, Parser};
use std::path::PathBuf;

/// Options shared by every tool.
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the transform report as JSON instead of a status line
    #[arg(long)]
    pub json: bool,
}

/// Calculate derivatives and powers of a column in a text file
#[derive(Parser, Debug)]
#[command(name = "derive")]
#[command(version, about, long_about = None)]
pub struct DeriveArgs {
    /// Path to the input text file (one value per line)
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: PathBuf,

    /// Path to the output text file
    #[arg(value_name = "OUTPUT_FILE")]
    pub output_file: PathBuf,

    /// Label for custom column names
    #[arg(value_name = "LABEL")]
    pub label: String,

    /// Fail on non-numeric values instead of writing them as n/a
    #[arg(long)]
    pub strict: bool,

    /// Decimal places to round to (0-15)
    #[arg(long, default_value = "4", value_parser = clap::value_parser!(u32).range(0..=15))]
    pub decimals: u32,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Add atlas region names as headers to a timeseries file
#[derive(Parser, Debug)]
#[command(name = "relabel")]
#[command(version, about, long_about = None)]
pub struct RelabelArgs {
    /// Full path to the timeseries file
    #[arg(long = "timeseriesfile", value_name = "PATH")]
    pub timeseries_file: PathBuf,

    /// Full path to the file with atlas IDs
    #[arg(long = "atlasids", value_name = "PATH")]
    pub atlas_ids: PathBuf,

    /// Output path (default: the timeseries path with a .csv extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Replace columns in one TSV file with same-named columns from another
#[derive(Parser, Debug)]
#[command(name = "replace")]
#[command(version, about, long_about = None)]
pub struct ReplaceArgs {
    /// Input file to modify
    #[arg(value_name = "FILE1")]
    pub file1: PathBuf,

    /// File containing replacement columns
    #[arg(value_name = "FILE2")]
    pub file2: PathBuf,

    /// Output file to save the modified data
    #[arg(value_name = "OUTPUT_FILE")]
    pub output_file: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}
