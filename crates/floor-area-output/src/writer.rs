//! Long-form floor area CSV writer.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use floor_area_common::format_numeric;
use floor_area_model::{ColumnNames, FloorAreaResult};
use tracing::info;

use crate::error::{OutputError, Result};

/// File name prefix of floor area outputs.
pub const FLOOR_AREA_PREFIX: &str = "arc_floor_area__";

/// Output file name for a dwellings key and future scenario.
///
/// ```
/// use floor_area_output::output_file_name;
///
/// assert_eq!(
///     output_file_name("0-unplanned", "compact"),
///     "arc_floor_area__0-unplanned__compact.csv"
/// );
/// ```
pub fn output_file_name(key: &str, scenario: &str) -> String {
    format!("{FLOOR_AREA_PREFIX}{key}__{scenario}.csv")
}

/// Output path for a dwellings key and future scenario under `dir`.
pub fn output_path(dir: &Path, key: &str, scenario: &str) -> PathBuf {
    dir.join(output_file_name(key, scenario))
}

/// Writes `result` as CSV to `path`, creating the parent directory if needed.
///
/// Columns are `timestep`, district, `residential_or_non` and `floor_area`,
/// named by `columns`. An existing file is overwritten.
pub fn write_floor_area_csv(
    path: &Path,
    result: &FloorAreaResult,
    columns: &ColumnNames,
) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| OutputError::OutputDirCreate {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let writer = csv::Writer::from_path(path).map_err(|source| OutputError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    write_records(writer, result, columns).map_err(|err| match err {
        WriteError::Csv(source) => OutputError::Csv {
            path: path.to_path_buf(),
            source,
        },
        WriteError::Io(source) => OutputError::WriteFile {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let summary = result.summary();
    info!(
        path = %path.display(),
        rows = summary.rows,
        timesteps = summary.timesteps,
        districts = summary.districts,
        "wrote floor area output"
    );
    Ok(())
}

/// Renders `result` as CSV text.
pub fn render_floor_area_csv(result: &FloorAreaResult, columns: &ColumnNames) -> String {
    let mut buffer = Vec::new();
    // Writing to memory cannot fail.
    let _ = write_records(csv::Writer::from_writer(&mut buffer), result, columns);
    String::from_utf8_lossy(&buffer).into_owned()
}

enum WriteError {
    Csv(csv::Error),
    Io(io::Error),
}

fn write_records<W: io::Write>(
    mut writer: csv::Writer<W>,
    result: &FloorAreaResult,
    columns: &ColumnNames,
) -> std::result::Result<(), WriteError> {
    for record in records(result, columns) {
        writer.write_record(&record).map_err(WriteError::Csv)?;
    }
    writer.flush().map_err(WriteError::Io)
}

/// Header row followed by one row per result record.
fn records<'a>(
    result: &'a FloorAreaResult,
    columns: &'a ColumnNames,
) -> impl Iterator<Item = [String; 4]> + 'a {
    let header = [
        columns.timestep.clone(),
        columns.district.clone(),
        columns.category.clone(),
        columns.floor_area.clone(),
    ];
    std::iter::once(header).chain(result.rows.iter().map(|row| {
        [
            row.timestep.to_string(),
            row.district_id.to_string(),
            row.residential_or_non.to_string(),
            format_numeric(row.floor_area),
        ]
    }))
}
