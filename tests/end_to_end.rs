//! End-to-end checks of the aggregate -> report flow over a real results tree.

use bench_report::{Aggregate, RESULTS_FILE, summary_markdown};
use std::fs;
use std::path::Path;

fn write_bench(root: &Path, db: &str, scale: &str, json: &str) {
    let dir = root.join(db).join(scale);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(RESULTS_FILE), json).unwrap();
}

#[test]
fn partial_tree_renders_full_summary() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();

    write_bench(
        root,
        "mysql",
        "100",
        r#"[
            {"scenario":"insert","ops":1000,"throughput_ops":500.5,"p50_ms":1.2,"p95_ms":3.4,"p99_ms":5.6},
            {"scenario":"scan","ops":500,"throughput_ops":120.0,"p50_ms":4.0,"p95_ms":9.0,"p99_ms":12.0}
        ]"#,
    );
    write_bench(
        root,
        "mysql",
        "2",
        r#"[{"scenario":"insert","ops":1000,"throughput_ops":900.0,"p50_ms":0.5,"p95_ms":1.0,"p99_ms":1.5}]"#,
    );
    write_bench(
        root,
        "mysql",
        "10",
        r#"[{"scenario":"insert","ops":1000,"throughput_ops":700.0,"p50_ms":0.8,"p95_ms":1.5,"p99_ms":2.0}]"#,
    );
    // Corrupt file: excluded with a warning, the rest still report.
    write_bench(root, "mysql", "1000", "{ nope");
    // Still-running scale: no results file yet.
    fs::create_dir_all(root.join("mysql").join("10000")).unwrap();
    // Different db type, must not leak into the mysql aggregate.
    write_bench(
        root,
        "postgres",
        "100",
        r#"[{"scenario":"other","ops":1,"throughput_ops":1.0,"p50_ms":1.0,"p95_ms":1.0,"p99_ms":1.0}]"#,
    );

    let aggregate = Aggregate::collect(root, "mysql").unwrap();
    let summary = summary_markdown(&aggregate);

    // Sections in lexical scenario order.
    let insert_at = summary.find("## insert").unwrap();
    let scan_at = summary.find("## scan").unwrap();
    assert!(insert_at < scan_at);
    assert!(!summary.contains("## other"));

    // Scales in numeric order within each section. Row matches are anchored
    // on the leading newline: the ops column is also 1000, so an unanchored
    // `| 1000 |` would match inside valid rows.
    let insert_section = &summary[insert_at..scan_at];
    let row_2 = insert_section.find("\n| 2 |").unwrap();
    let row_10 = insert_section.find("\n| 10 |").unwrap();
    let row_100 = insert_section.find("\n| 100 |").unwrap();
    assert!(row_2 < row_10);
    assert!(row_10 < row_100);
    assert!(!summary.contains("\n| 1000 |"));

    // The scan scenario only ran at scale 100; other scales get zero rows.
    let scan_section = &summary[scan_at..];
    assert!(scan_section.contains("| 100 | 500 | 120.00 | 4.000 | 9.000 | 12.000 |"));
    assert!(scan_section.contains("| 2 |  | 0.00 | 0.000 | 0.000 | 0.000 |"));
    assert!(scan_section.contains("| 10 |  | 0.00 | 0.000 | 0.000 | 0.000 |"));
}

#[test]
fn empty_tree_yields_empty_aggregate() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("mysql").join("100")).unwrap();

    let aggregate = Aggregate::collect(tmp.path(), "mysql").unwrap();
    assert!(aggregate.is_empty());
}

#[cfg(feature = "charts")]
#[test]
fn charts_render_for_each_scenario() {
    use bench_report::{ChartSeries, create_renderer};

    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    write_bench(
        root,
        "mysql",
        "100",
        r#"[{"scenario":"insert","ops":1000,"throughput_ops":500.5,"p50_ms":1.2,"p95_ms":3.4,"p99_ms":5.6}]"#,
    );
    write_bench(
        root,
        "mysql",
        "1000",
        r#"[{"scenario":"insert","ops":1000,"throughput_ops":480.0,"p50_ms":1.4,"p95_ms":3.9,"p99_ms":6.6}]"#,
    );

    let aggregate = Aggregate::collect(root, "mysql").unwrap();
    let out = tmp.path().join("summary");
    fs::create_dir_all(&out).unwrap();

    let renderer = create_renderer();
    assert!(renderer.enabled());

    for scenario in aggregate.scenarios() {
        let series = ChartSeries {
            title: format!("Throughput - {scenario}"),
            x_label: "scale (rows)".to_string(),
            y_label: "ops/sec".to_string(),
            points: aggregate.metric_points(&scenario, |r| r.throughput_ops),
        };
        let path = out.join(format!("{scenario}_throughput.png"));
        renderer.line_chart(&series, &path).unwrap();
        assert!(path.exists());
    }
}
