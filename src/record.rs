//! Benchmark result records as written by the benchmark CLI.

use serde::Deserialize;
use std::path::Path;

/// One measurement for one scenario at one scale.
///
/// Every field is optional at the parse boundary; results files written by
/// older tool versions may omit fields, and unknown keys are ignored.
/// Defaulting for display happens in the report layer, not here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BenchRecord {
    #[serde(default)]
    pub scenario: Option<String>,
    #[serde(default)]
    pub ops: Option<u64>,
    #[serde(default)]
    pub throughput_ops: Option<f64>,
    #[serde(default)]
    pub p50_ms: Option<f64>,
    #[serde(default)]
    pub p95_ms: Option<f64>,
    #[serde(default)]
    pub p99_ms: Option<f64>,
}

impl BenchRecord {
    /// Scenario name, or the empty string when the field is absent.
    pub fn scenario_name(&self) -> &str {
        self.scenario.as_deref().unwrap_or("")
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Load a results file: a JSON array of records, one per scenario.
pub fn load_results<P: AsRef<Path>>(path: P) -> Result<Vec<BenchRecord>, LoadError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| LoadError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_record() {
        let records: Vec<BenchRecord> = serde_json::from_str(
            r#"[{"scenario":"insert","ops":1000,"throughput_ops":500.5,"p50_ms":1.2,"p95_ms":3.4,"p99_ms":5.6}]"#,
        )
        .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].scenario_name(), "insert");
        assert_eq!(records[0].ops, Some(1000));
        assert_eq!(records[0].throughput_ops, Some(500.5));
    }

    #[test]
    fn missing_fields_are_none() {
        let records: Vec<BenchRecord> =
            serde_json::from_str(r#"[{"scenario":"scan"}]"#).unwrap();
        assert_eq!(records[0].ops, None);
        assert_eq!(records[0].p99_ms, None);
    }

    #[test]
    fn unknown_keys_ignored() {
        let records: Vec<BenchRecord> =
            serde_json::from_str(r#"[{"scenario":"scan","extra":"x","nested":{"a":1}}]"#).unwrap();
        assert_eq!(records[0].scenario_name(), "scan");
    }

    #[test]
    fn load_rejects_non_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bench.json");
        std::fs::write(&path, r#"{"scenario":"insert"}"#).unwrap();
        assert!(matches!(load_results(&path), Err(LoadError::Parse { .. })));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_results(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
