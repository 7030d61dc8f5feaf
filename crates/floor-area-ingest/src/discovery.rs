//! Scenario input discovery.
//!
//! Dwelling projections are named `arc_dwellings__<key>.csv`; the matching
//! GVA projection is `arc_gva__<econ_key>.csv` in the same directory, where
//! the economic key comes from the [`ScenarioKeyMap`].

use std::path::{Path, PathBuf};

use floor_area_model::{DatasetKind, ScenarioKeyMap};
use tracing::debug;

use crate::error::{IngestError, Result};

/// File name prefix of dwelling projections.
pub const DWELLINGS_PREFIX: &str = "arc_dwellings__";
/// File name prefix of GVA projections.
pub const GVA_PREFIX: &str = "arc_gva__";

/// One dwellings file paired with its GVA file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioInput {
    /// Dwellings scenario key taken from the file name.
    pub key: String,
    /// Economic scenario key the dwellings key maps to.
    pub econ_key: String,
    pub dwellings_path: PathBuf,
    pub gva_path: PathBuf,
}

/// Lists all CSV files in a directory.
///
/// Returns files sorted by filename.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if is_csv {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Extracts the scenario key from an `arc_dwellings__<key>.csv` path.
pub fn parse_dwellings_key(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    let key = stem.strip_prefix(DWELLINGS_PREFIX)?;
    if key.is_empty() {
        return None;
    }
    Some(key.to_string())
}

/// Path of the GVA projection for an economic key.
pub fn gva_path(dir: &Path, econ_key: &str) -> PathBuf {
    dir.join(format!("{GVA_PREFIX}{econ_key}.csv"))
}

/// Finds every dwellings file in `dir` and pairs it with its GVA file.
///
/// The outer error covers the directory itself. Each entry is resolved on
/// its own: a dwellings file whose GVA file is missing yields
/// [`IngestError::InputNotFound`] without affecting the others.
pub fn discover_scenario_inputs(
    dir: &Path,
    key_map: &ScenarioKeyMap,
) -> Result<Vec<Result<ScenarioInput>>> {
    let inputs = list_csv_files(dir)?
        .into_iter()
        .filter_map(|dwellings_path| {
            let key = parse_dwellings_key(&dwellings_path)?;
            Some(resolve_input(dir, key_map, key, dwellings_path))
        })
        .collect::<Vec<_>>();
    debug!(dir = %dir.display(), inputs = inputs.len(), "discovered dwellings inputs");
    Ok(inputs)
}

fn resolve_input(
    dir: &Path,
    key_map: &ScenarioKeyMap,
    key: String,
    dwellings_path: PathBuf,
) -> Result<ScenarioInput> {
    let econ_key = key_map.econ_key(&key).to_string();
    let gva_path = gva_path(dir, &econ_key);
    if !gva_path.is_file() {
        return Err(IngestError::InputNotFound {
            kind: DatasetKind::Gva,
            key,
            path: gva_path,
        });
    }
    Ok(ScenarioInput {
        key,
        econ_key,
        dwellings_path,
        gva_path,
    })
}
