use std::path::PathBuf;

use floor_area_model::ResultSummary;

#[derive(Debug)]
pub struct RunResult {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub dry_run: bool,
    pub pairs: Vec<PairSummary>,
    pub errors: Vec<String>,
    pub has_errors: bool,
}

/// Outcome of one (dwellings key, future scenario) pair.
#[derive(Debug)]
pub struct PairSummary {
    pub key: String,
    pub econ_key: String,
    pub scenario: String,
    pub summary: ResultSummary,
    pub status: PairStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairStatus {
    Written(PathBuf),
    /// Estimated but not written (`--dry-run`).
    Estimated,
    Failed(String),
}

impl RunResult {
    pub fn written(&self) -> impl Iterator<Item = &PathBuf> {
        self.pairs.iter().filter_map(|pair| match &pair.status {
            PairStatus::Written(path) => Some(path),
            _ => None,
        })
    }
}
