//! Command-line interface for marker-concat.
//!
//! The generation strategy is chosen by subcommand:
//!
//! - **exhaustive**: every combination in the size range
//! - **random**: a fixed number of distinct random combinations
//!
//! ## Usage
//!
//! ```text
//! # All combinations of 2 to 4 markers
//! marker-concat exhaustive -i markers.txt --max-size 4
//!
//! # 1000 new random combinations, skipping those generated before
//! marker-concat random -i markers.txt --runs 1000 --previous generated.tsv
//!
//! # Reproducible sampling, JSON output
//! marker-concat --format json random -i markers.txt --runs 50 --seed 7
//! ```

use clap::{Parser, Subcommand};

pub mod generate;

#[derive(Parser)]
#[command(name = "marker-concat")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Generate non-redundant combinations of marker gene identifiers")]
#[command(
    long_about = "marker-concat builds combinations (concatenations) of marker gene IDs for downstream analysis.\n\nCombinations already listed in a previous output are skipped, and every new combination receives a zero-padded ID that does not collide with earlier ones."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "tsv")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Explore all combinations in the size range
    Exhaustive(generate::ExhaustiveArgs),

    /// Generate a number of distinct random combinations in the size range
    Random(generate::RandomArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Tsv,
    Json,
}
