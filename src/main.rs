use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod generate;
mod output;
mod parsing;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Diagnostics go to stderr so stdout carries only records
    let filter = if cli.verbose {
        EnvFilter::new("marker_concat=debug,info")
    } else {
        EnvFilter::new("marker_concat=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Exhaustive(args) => {
            cli::generate::run_exhaustive(args, cli.format)?;
        }
        cli::Commands::Random(args) => {
            cli::generate::run_random(args, cli.format)?;
        }
    }

    Ok(())
}
