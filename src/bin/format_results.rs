use bench_report::{load_results, single_run_table};
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "format-results")]
#[command(about = "Convert a bench.json results file to a Markdown table")]
#[command(version)]
struct Cli {
    /// Path to the bench.json input file
    #[arg(long)]
    input: PathBuf,

    /// Path to write the Markdown table
    #[arg(long)]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing();

    let records = load_results(&cli.input)?;
    std::fs::write(&cli.output, single_run_table(&records))?;
    println!("Wrote markdown table to {}", cli.output.display());

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
