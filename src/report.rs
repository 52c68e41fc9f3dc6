//! Markdown rendering for single-run and multi-scale results.
//!
//! Formatting is fixed: throughput to 2 decimal places, latencies to 3,
//! both zero-padded. Missing fields default at exactly one place, the cell
//! formatter, so the blank/zero behavior stays auditable.

use crate::aggregate::Aggregate;
use crate::record::BenchRecord;

const METRIC_HEADER: &str = "ops | throughput_ops | p50_ms | p95_ms | p99_ms |";
const SEPARATOR: &str = "| --- | --- | --- | --- | --- | --- |";

/// Formatted metric cells for one table row.
struct Cells {
    ops: String,
    throughput: String,
    p50: String,
    p95: String,
    p99: String,
}

/// Fill display defaults: absent `ops` renders empty, absent metrics render
/// as zero through the same fixed-point formatting as real values.
fn fill_cells(record: Option<&BenchRecord>) -> Cells {
    let ops = record
        .and_then(|r| r.ops)
        .map(|ops| ops.to_string())
        .unwrap_or_default();
    let metric = |field: fn(&BenchRecord) -> Option<f64>| {
        record.and_then(field).unwrap_or(0.0)
    };
    Cells {
        ops,
        throughput: format!("{:.2}", metric(|r| r.throughput_ops)),
        p50: format!("{:.3}", metric(|r| r.p50_ms)),
        p95: format!("{:.3}", metric(|r| r.p95_ms)),
        p99: format!("{:.3}", metric(|r| r.p99_ms)),
    }
}

fn push_row(lines: &mut Vec<String>, key: &str, cells: &Cells) {
    lines.push(format!(
        "| {} | {} | {} | {} | {} | {} |",
        key, cells.ops, cells.throughput, cells.p50, cells.p95, cells.p99
    ));
}

/// Render one results file as a Markdown table, rows in input order.
pub fn single_run_table(records: &[BenchRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 2);
    lines.push(format!("| scenario | {METRIC_HEADER}"));
    lines.push(SEPARATOR.to_string());
    for record in records {
        push_row(&mut lines, record.scenario_name(), &fill_cells(Some(record)));
    }
    lines.join("\n") + "\n"
}

/// Render the multi-scale summary: one section per scenario, one row per
/// known scale. A scale missing the scenario still gets a row, with blank
/// `ops` and zero metrics, so every section covers every scale.
pub fn summary_markdown(aggregate: &Aggregate) -> String {
    let mut lines = Vec::new();
    for scenario in aggregate.scenarios() {
        lines.push(format!("## {scenario}"));
        lines.push(format!("| scale | {METRIC_HEADER}"));
        lines.push(SEPARATOR.to_string());
        for scale in aggregate.scales() {
            push_row(&mut lines, scale.name(), &fill_cells(scale.get(&scenario)));
        }
        lines.push(String::new());
    }
    lines.join("\n")
}
