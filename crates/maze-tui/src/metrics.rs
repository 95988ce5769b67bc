//! Solve-metrics persistence.
//!
//! One record per algorithm, upserted by case-insensitive name. Backends:
//! - File: flat text, one `name,pathSize,timeNs` line per record
//! - Memory: in-memory store for testing

#![allow(dead_code)]

use maze_core::Algorithm;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Mutex;

/// Metrics captured for one solve with a non-empty route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveRecord {
    /// Display name of the algorithm that ran
    pub algorithm: String,
    /// Number of cells on the returned route
    pub path_len: usize,
    /// Wall-clock duration of the solve call in nanoseconds
    pub time_ns: u64,
}

impl SolveRecord {
    pub fn new(algorithm: Algorithm, path_len: usize, time_ns: u64) -> Self {
        Self {
            algorithm: algorithm.to_string(),
            path_len,
            time_ns,
        }
    }

    /// One flat-file line: `name,pathSize,timeNs`.
    fn to_line(&self) -> String {
        format!("{},{},{}", self.algorithm, self.path_len, self.time_ns)
    }

    /// Parse a flat-file line; `None` for malformed lines, which are skipped.
    fn parse_line(line: &str) -> Option<Self> {
        let mut fields = line.split(',');
        let algorithm = fields.next()?.to_string();
        let path_len = fields.next()?.parse().ok()?;
        let time_ns = fields.next()?.parse().ok()?;
        if fields.next().is_some() || algorithm.is_empty() {
            return None;
        }
        Some(Self {
            algorithm,
            path_len,
            time_ns,
        })
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while recording or reading metrics
#[derive(Debug, Clone)]
pub enum StoreError {
    /// Underlying storage failure
    Storage(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "storage error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

/// Trait for metrics backends
pub trait ResultStore {
    /// Insert the record, replacing any existing record whose algorithm
    /// name matches case-insensitively.
    fn save(&self, record: SolveRecord) -> StoreResult<()>;

    /// All records in stored order
    fn find_all(&self) -> StoreResult<Vec<SolveRecord>>;

    /// Remove every record
    fn clear(&self) -> StoreResult<()>;

    /// Get backend name for display
    fn store_name(&self) -> &'static str;
}

/// Upsert `record` into `records`, keyed by case-insensitive name.
fn upsert(records: &mut Vec<SolveRecord>, record: SolveRecord) {
    match records
        .iter_mut()
        .find(|r| r.algorithm.eq_ignore_ascii_case(&record.algorithm))
    {
        Some(existing) => *existing = record,
        None => records.push(record),
    }
}

// ==================== File Backend ====================

/// Flat-file metrics store
pub struct FileResultStore {
    path: PathBuf,
}

impl FileResultStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default location under the platform data directory
    pub fn default_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("maze_results.csv")
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Default for FileResultStore {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}

impl ResultStore for FileResultStore {
    fn save(&self, record: SolveRecord) -> StoreResult<()> {
        let mut records = self.find_all()?;
        upsert(&mut records, record);

        let mut out = String::new();
        for r in &records {
            out.push_str(&r.to_line());
            out.push('\n');
        }
        std::fs::write(&self.path, out).map_err(|e| StoreError::Storage(e.to_string()))
    }

    fn find_all(&self) -> StoreResult<Vec<SolveRecord>> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::Storage(e.to_string())),
        };
        Ok(text.lines().filter_map(SolveRecord::parse_line).collect())
    }

    fn clear(&self) -> StoreResult<()> {
        std::fs::write(&self.path, "").map_err(|e| StoreError::Storage(e.to_string()))
    }

    fn store_name(&self) -> &'static str {
        "File"
    }
}

// ==================== Memory Backend for Testing ====================

/// In-memory metrics store
#[derive(Default)]
pub struct MemoryResultStore {
    records: Mutex<Vec<SolveRecord>>,
}

impl MemoryResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get record count
    pub fn count(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

impl ResultStore for MemoryResultStore {
    fn save(&self, record: SolveRecord) -> StoreResult<()> {
        let mut records = self.records.lock().unwrap();
        upsert(&mut records, record);
        Ok(())
    }

    fn find_all(&self) -> StoreResult<Vec<SolveRecord>> {
        Ok(self.records.lock().unwrap().clone())
    }

    fn clear(&self) -> StoreResult<()> {
        self.records.lock().unwrap().clear();
        Ok(())
    }

    fn store_name(&self) -> &'static str {
        "Memory"
    }
}

/// Format a nanosecond duration for display
pub fn format_time_ns(time_ns: u64) -> String {
    if time_ns >= 1_000_000_000 {
        format!("{:.2} s", time_ns as f64 / 1e9)
    } else if time_ns >= 1_000_000 {
        format!("{:.2} ms", time_ns as f64 / 1e6)
    } else if time_ns >= 1_000 {
        format!("{:.2} us", time_ns as f64 / 1e3)
    } else {
        format!("{} ns", time_ns)
    }
}
