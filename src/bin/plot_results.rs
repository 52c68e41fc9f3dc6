use bench_report::{Aggregate, ChartSeries, create_renderer, summary_markdown};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "plot-results")]
#[command(about = "Aggregate per-scale bench.json files into a summary report and charts")]
#[command(version)]
struct Cli {
    /// Root results directory
    #[arg(long, default_value = "results")]
    results: PathBuf,

    /// Database type subdirectory to aggregate
    #[arg(long, default_value = "mysql")]
    db: String,

    /// Output directory for the summary markdown and charts
    #[arg(long)]
    output: PathBuf,

    /// Enable verbose logging
    #[arg(long, short = 'v', action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    std::fs::create_dir_all(&cli.output)?;

    let aggregate = Aggregate::collect(&cli.results, &cli.db)?;
    if aggregate.is_empty() {
        tracing::warn!(
            "no {} found under {}/{}",
            bench_report::RESULTS_FILE,
            cli.results.display(),
            cli.db
        );
        return Ok(());
    }

    let summary_path = cli.output.join("summary.md");
    std::fs::write(&summary_path, summary_markdown(&aggregate))?;
    println!("Wrote summary markdown to {}", summary_path.display());

    let renderer = create_renderer();
    if !renderer.enabled() {
        tracing::warn!("chart support not compiled in, skipping charts");
        return Ok(());
    }

    for scenario in aggregate.scenarios() {
        let throughput = ChartSeries {
            title: format!("Throughput - {scenario}"),
            x_label: "scale (rows)".to_string(),
            y_label: "ops/sec".to_string(),
            points: aggregate.metric_points(&scenario, |r| r.throughput_ops),
        };
        let path = cli.output.join(format!("{scenario}_throughput.png"));
        renderer.line_chart(&throughput, &path)?;
        println!("Wrote {}", path.display());

        let p99 = ChartSeries {
            title: format!("P99 latency (ms) - {scenario}"),
            x_label: "scale (rows)".to_string(),
            y_label: "p99 (ms)".to_string(),
            points: aggregate.metric_points(&scenario, |r| r.p99_ms),
        };
        let path = cli.output.join(format!("{scenario}_p99.png"));
        renderer.line_chart(&p99, &path)?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
