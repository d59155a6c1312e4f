use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};

use crate::cli::OutputFormat;
use crate::core::size_range::MIN_COMBINATION_SIZE;
use crate::core::types::{CombinationRecord, GenerationConfig, Strategy};
use crate::generate::generate;
use crate::output::{write_delimited, write_json};
use crate::parsing::identifiers::parse_identifier_file;
use crate::parsing::previous::{parse_previous_file, PreviousFormat, PreviousSet};
use crate::utils::validation::validate_record_layout;

/// Options shared by both strategies
#[derive(Args)]
pub struct CommonArgs {
    /// File with the IDs of individual marker genes, one per line
    #[arg(short, long = "input", visible_alias = "in", required = true)]
    pub input: PathBuf,

    /// Minimum size of any generated combination
    #[arg(long, alias = "min_size", default_value_t = MIN_COMBINATION_SIZE)]
    pub min_size: usize,

    /// Maximum size of any generated combination (defaults to the number of IDs)
    #[arg(long, alias = "max_size")]
    pub max_size: Option<usize>,

    /// File with already generated combinations
    #[arg(long)]
    pub previous: Option<PathBuf>,

    /// Field delimiter of the previous file and of the output (e.g. '\t')
    #[arg(long, default_value = "\\t", value_parser = parse_delimiter)]
    pub delim: char,

    /// Separator between marker IDs inside the previous file's combination column
    #[arg(long, default_value = ",", value_parser = parse_delimiter)]
    pub separator: char,

    /// 0-based column of the previous file holding combinations
    #[arg(long, alias = "column_comb", default_value_t = 2)]
    pub column_comb: usize,

    /// 0-based column of the previous file holding combination IDs
    #[arg(long, alias = "column_id", default_value_t = 0)]
    pub column_id: usize,

    /// Output file (stdout by default)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl CommonArgs {
    fn previous_format(&self) -> PreviousFormat {
        PreviousFormat {
            delimiter: self.delim,
            separator: self.separator,
            combination_column: self.column_comb,
            id_column: self.column_id,
        }
    }
}

#[derive(Args)]
pub struct ExhaustiveArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Args)]
pub struct RandomArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Number of different random combinations to generate
    #[arg(long, required = true, value_parser = clap::value_parser!(u64).range(1..))]
    pub runs: u64,

    /// Seed for reproducible sampling
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Accept a single character or the escapes `\t` and `tab`.
fn parse_delimiter(s: &str) -> Result<char, String> {
    match s {
        "\\t" | "tab" => Ok('\t'),
        _ => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(c),
                _ => Err(format!("expected a single character, got '{s}'")),
            }
        }
    }
}

/// Execute exhaustive subcommand
///
/// # Errors
///
/// Returns an error if the inputs cannot be read or the output cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run_exhaustive(args: ExhaustiveArgs, format: OutputFormat) -> anyhow::Result<()> {
    let mut rng = StdRng::from_os_rng();
    execute(&args.common, Strategy::Exhaustive, format, &mut rng)
}

/// Execute random subcommand
///
/// # Errors
///
/// Returns an error if the inputs cannot be read, the requested number of
/// combinations cannot be found, or the output cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run_random(args: RandomArgs, format: OutputFormat) -> anyhow::Result<()> {
    let runs = usize::try_from(args.runs).context("--runs is too large")?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    execute(&args.common, Strategy::Random { runs }, format, &mut rng)
}

fn execute(
    args: &CommonArgs,
    strategy: Strategy,
    format: OutputFormat,
    rng: &mut StdRng,
) -> anyhow::Result<()> {
    validate_record_layout(args.delim, args.separator, args.column_comb, args.column_id)?;

    let identifiers = load_identifiers(&args.input)?;
    debug!("Loaded {} identifiers", identifiers.len());

    let previous = load_previous(args)?;

    let config = GenerationConfig::new(strategy)
        .with_min_size(args.min_size)
        .with_max_size(args.max_size);

    // Nothing is written unless generation succeeded
    let records = generate(&identifiers, &previous, &config, rng)?;

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file '{}'", path.display()))?;
            emit(&mut BufWriter::new(file), &records, args.delim, format)
        }
        None => emit(&mut std::io::stdout().lock(), &records, args.delim, format),
    }
}

fn load_identifiers(path: &Path) -> anyhow::Result<Vec<String>> {
    if !path.is_file() {
        anyhow::bail!("Check input IDs file '{}'", path.display());
    }
    parse_identifier_file(path)
        .with_context(|| format!("Failed to read input IDs file '{}'", path.display()))
}

fn load_previous(args: &CommonArgs) -> anyhow::Result<PreviousSet> {
    let Some(path) = &args.previous else {
        return Ok(PreviousSet::new());
    };

    if !path.is_file() {
        warn!(
            "Previous combinations file '{}' not found; nothing will be skipped",
            path.display()
        );
        return Ok(PreviousSet::new());
    }

    let previous = parse_previous_file(path, &args.previous_format())
        .with_context(|| format!("Failed to read previous combinations '{}'", path.display()))?;
    debug!(
        "Loaded {} previous combinations using {} IDs",
        previous.len(),
        previous.used_ids().len()
    );
    Ok(previous)
}

fn emit<W: Write>(
    writer: &mut W,
    records: &[CombinationRecord],
    delimiter: char,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Tsv => write_delimited(writer, records, delimiter)?,
        OutputFormat::Json => write_json(writer, records)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(parse_delimiter("\\t"), Ok('\t'));
        assert_eq!(parse_delimiter("tab"), Ok('\t'));
        assert_eq!(parse_delimiter("\t"), Ok('\t'));
        assert_eq!(parse_delimiter(";"), Ok(';'));
        assert!(parse_delimiter("").is_err());
        assert!(parse_delimiter(",,").is_err());
    }

    #[test]
    fn test_missing_identifier_file() {
        let err = load_identifiers(Path::new("/nonexistent/ids.txt")).unwrap_err();
        assert!(err.to_string().contains("Check input IDs file"));
    }
}
