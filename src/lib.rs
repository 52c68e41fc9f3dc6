pub mod aggregate;
pub mod chart;
pub mod record;
pub mod report;

pub use aggregate::{Aggregate, AggregateError, ScaleResults};
pub use chart::{ChartError, ChartRenderer, ChartSeries, NoopRenderer, create_renderer};
pub use record::{BenchRecord, LoadError, load_results};
pub use report::{single_run_table, summary_markdown};

/// Name of the per-scale results file written by the benchmark CLI.
pub const RESULTS_FILE: &str = "bench.json";
