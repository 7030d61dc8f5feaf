//! Conversions between Polars DataFrames and projection datasets.
//!
//! Input frames come straight from CSV files, so column types are whatever
//! Polars inferred. Every cell of the three required columns must convert;
//! anything else is a schema error naming the row and column.

use floor_area_common::{any_to_f64, any_to_i64, any_to_string, any_to_string_non_empty};
use floor_area_model::{
    ColumnNames, DatasetKind, DistrictId, DwellingProjection, DwellingRecord, EstimationParams,
    FloorAreaResult, GvaProjection, GvaRecord, Timestep,
};
use polars::prelude::{AnyValue, Column, DataFrame, IntoColumn, NamedFrom, Series};
use tracing::debug;

use crate::error::{EstimateError, Result};
use crate::estimator::FloorAreaEstimator;

/// Reads a dwellings frame (`timestep`, district, `dwellings`).
pub fn dwellings_from_frame(df: &DataFrame, columns: &ColumnNames) -> Result<DwellingProjection> {
    let rows = read_keyed_values(df, DatasetKind::Dwellings, columns, &columns.dwellings)?;
    Ok(rows
        .into_iter()
        .map(|(timestep, district_id, dwellings)| DwellingRecord {
            timestep,
            district_id,
            dwellings,
        })
        .collect())
}

/// Reads a GVA frame (`timestep`, district, `gva`).
pub fn gva_from_frame(df: &DataFrame, columns: &ColumnNames) -> Result<GvaProjection> {
    let rows = read_keyed_values(df, DatasetKind::Gva, columns, &columns.gva)?;
    Ok(rows
        .into_iter()
        .map(|(timestep, district_id, gva)| GvaRecord {
            timestep,
            district_id,
            gva,
        })
        .collect())
}

/// Renders a long-form result as a four-column frame.
pub fn result_to_frame(result: &FloorAreaResult, columns: &ColumnNames) -> Result<DataFrame> {
    let timesteps: Vec<i64> = result.rows.iter().map(|row| row.timestep).collect();
    let districts: Vec<&str> = result
        .rows
        .iter()
        .map(|row| row.district_id.as_str())
        .collect();
    let categories: Vec<&str> = result
        .rows
        .iter()
        .map(|row| row.residential_or_non.as_str())
        .collect();
    let floor_areas: Vec<f64> = result.rows.iter().map(|row| row.floor_area).collect();

    let df = DataFrame::new(vec![
        Series::new(columns.timestep.as_str().into(), timesteps).into_column(),
        Series::new(columns.district.as_str().into(), districts).into_column(),
        Series::new(columns.category.as_str().into(), categories).into_column(),
        Series::new(columns.floor_area.as_str().into(), floor_areas).into_column(),
    ])?;
    Ok(df)
}

/// Estimates floor area directly from input frames.
pub fn estimate_floor_area_frame(
    dwellings: &DataFrame,
    gva: &DataFrame,
    columns: &ColumnNames,
    params: &EstimationParams,
    future_average_dwelling_m2: f64,
) -> Result<DataFrame> {
    let dwellings = dwellings_from_frame(dwellings, columns)?;
    let gva = gva_from_frame(gva, columns)?;
    let result = FloorAreaEstimator::new(*params).estimate(
        &dwellings,
        &gva,
        future_average_dwelling_m2,
    )?;
    result_to_frame(&result, columns)
}

fn read_keyed_values(
    df: &DataFrame,
    dataset: DatasetKind,
    columns: &ColumnNames,
    value_column: &str,
) -> Result<Vec<(Timestep, DistrictId, f64)>> {
    let timestep_col = required_column(df, dataset, &columns.timestep)?;
    let district_col = required_column(df, dataset, &columns.district)?;
    let value_col = required_column(df, dataset, value_column)?;

    let mut rows = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let raw = timestep_col.get(row)?;
        let Some(timestep) = any_to_i64(raw.clone()) else {
            return Err(invalid_value(dataset, &columns.timestep, row, raw));
        };
        let raw = district_col.get(row)?;
        let Some(district) = any_to_string_non_empty(raw.clone()) else {
            return Err(invalid_value(dataset, &columns.district, row, raw));
        };
        let raw = value_col.get(row)?;
        let Some(value) = any_to_f64(raw.clone()) else {
            return Err(invalid_value(dataset, value_column, row, raw));
        };
        rows.push((timestep, DistrictId::new(district), value));
    }
    debug!(%dataset, rows = rows.len(), "read projection frame");
    Ok(rows)
}

/// Looks a column up by exact name, then by trimmed case-insensitive name.
fn required_column<'a>(df: &'a DataFrame, dataset: DatasetKind, name: &str) -> Result<&'a Column> {
    if let Ok(column) = df.column(name) {
        return Ok(column);
    }
    df.get_columns()
        .iter()
        .find(|column| {
            column
                .name()
                .trim()
                .trim_start_matches('\u{feff}')
                .eq_ignore_ascii_case(name)
        })
        .ok_or_else(|| EstimateError::MissingColumn {
            dataset,
            column: name.to_string(),
        })
}

fn invalid_value(dataset: DatasetKind, column: &str, row: usize, raw: AnyValue<'_>) -> EstimateError {
    let value = match raw {
        AnyValue::Null => "null".to_string(),
        other => any_to_string(other),
    };
    EstimateError::InvalidValue {
        dataset,
        column: column.to_string(),
        row,
        value,
    }
}
