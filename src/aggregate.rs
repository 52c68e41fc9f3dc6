//! Multi-scale aggregation: scan a results tree and reindex by scenario.
//!
//! The results tree is laid out as `<results>/<db>/<scale>/bench.json`, one
//! scale directory per benchmark run. Partial trees are the normal state
//! while a benchmark campaign is still running: a scale directory with no
//! results file is silently skipped, and one with an unreadable file is
//! excluded with a warning so the remaining scales still produce a report.

use crate::record::{self, BenchRecord};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// All records from one scale's results file, indexed by scenario name.
#[derive(Debug, Clone)]
pub struct ScaleResults {
    name: String,
    records: HashMap<String, BenchRecord>,
}

impl ScaleResults {
    fn from_records(name: String, records: Vec<BenchRecord>) -> Self {
        let mut by_scenario = HashMap::with_capacity(records.len());
        // Last record wins if a scenario repeats within one file.
        for record in records {
            by_scenario.insert(record.scenario_name().to_string(), record);
        }
        Self {
            name,
            records: by_scenario,
        }
    }

    /// The scale directory name as it appeared on disk.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, scenario: &str) -> Option<&BenchRecord> {
        self.records.get(scenario)
    }
}

/// In-memory reindex of every loaded scale, keyed by the scale value.
///
/// Keying on the parsed integer makes the report independent of the order
/// scales were loaded in and gives numeric sort order for free.
#[derive(Debug, Clone, Default)]
pub struct Aggregate {
    scales: BTreeMap<u64, ScaleResults>,
}

#[derive(Debug, thiserror::Error)]
pub enum AggregateError {
    #[error("failed to scan {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("scale directory name '{name}' is not a number")]
    InvalidScale { name: String },
}

impl Aggregate {
    /// Scan `results_dir/db` and load every scale that has a results file.
    pub fn collect(results_dir: &Path, db: &str) -> Result<Self, AggregateError> {
        let root = results_dir.join(db);
        let entries = std::fs::read_dir(&root).map_err(|e| AggregateError::Io {
            path: root.display().to_string(),
            source: e,
        })?;

        let mut aggregate = Aggregate::default();
        for entry in entries {
            let entry = entry.map_err(|e| AggregateError::Io {
                path: root.display().to_string(),
                source: e,
            })?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let results_file = path.join(crate::RESULTS_FILE);
            if !results_file.exists() {
                // Benchmark for this scale has not run yet.
                continue;
            }
            let records = match record::load_results(&results_file) {
                Ok(records) => records,
                Err(e) => {
                    tracing::warn!("skipping {}: {}", results_file.display(), e);
                    continue;
                }
            };
            let name = entry.file_name().to_string_lossy().into_owned();
            aggregate.insert_scale(&name, records)?;
        }
        Ok(aggregate)
    }

    /// Reindex one scale's records. The scale name must parse as an integer;
    /// anything else cannot be ordered against the other scales and is fatal.
    pub fn insert_scale(
        &mut self,
        name: &str,
        records: Vec<BenchRecord>,
    ) -> Result<(), AggregateError> {
        let scale: u64 = name.parse().map_err(|_| AggregateError::InvalidScale {
            name: name.to_string(),
        })?;
        self.scales
            .insert(scale, ScaleResults::from_records(name.to_string(), records));
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }

    /// Loaded scales in ascending numeric order.
    pub fn scales(&self) -> impl Iterator<Item = &ScaleResults> {
        self.scales.values()
    }

    /// Union of scenario names across all scales, lexically sorted.
    pub fn scenarios(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .scales
            .values()
            .flat_map(|scale| scale.records.keys().cloned())
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// One metric for one scenario across all scales, in numeric scale order.
    /// Scales missing the scenario (or the field) contribute 0.
    pub fn metric_points<F>(&self, scenario: &str, metric: F) -> Vec<(String, f64)>
    where
        F: Fn(&BenchRecord) -> Option<f64>,
    {
        self.scales
            .values()
            .map(|scale| {
                let value = scale.get(scenario).and_then(&metric).unwrap_or(0.0);
                (scale.name().to_string(), value)
            })
            .collect()
    }
}
