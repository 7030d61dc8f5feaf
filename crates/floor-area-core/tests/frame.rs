//! DataFrame entry point of the estimator.

use floor_area_core::{estimate_floor_area_frame, result_to_frame};
use floor_area_model::{ColumnNames, EstimationParams, FloorAreaResult};
use polars::prelude::{AnyValue, df};

#[test]
fn estimates_from_frames_into_long_frame() {
    let dwellings = df! {
        "timestep" => [2020i64, 2025],
        "lad_uk_2016" => ["A", "A"],
        "dwellings" => [100i64, 120],
    }
    .unwrap();
    let gva = df! {
        "timestep" => [2020i64, 2025, 2030],
        "lad_uk_2016" => ["A", "A", "A"],
        "gva" => [10.0f64, 12.0, 14.0],
    }
    .unwrap();

    let out = estimate_floor_area_frame(
        &dwellings,
        &gva,
        &ColumnNames::default(),
        &EstimationParams::default(),
        76.0,
    )
    .expect("estimate");

    assert_eq!(out.height(), 4);
    let names: Vec<String> = out
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    assert_eq!(
        names,
        vec!["timestep", "lad_uk_2016", "residential_or_non", "floor_area"]
    );
    let category = out.column("residential_or_non").unwrap();
    let floor_area = out.column("floor_area").unwrap();
    assert_eq!(category.get(1).unwrap(), AnyValue::String("residential"));
    assert_eq!(floor_area.get(1).unwrap(), AnyValue::Float64(10020.0));
    assert_eq!(category.get(3).unwrap(), AnyValue::String("non_residential"));
    assert_eq!(floor_area.get(3).unwrap(), AnyValue::Float64(12.0));
}

#[test]
fn empty_result_renders_empty_frame() {
    let frame = result_to_frame(&FloorAreaResult::default(), &ColumnNames::default()).unwrap();
    assert_eq!(frame.height(), 0);
    assert_eq!(frame.width(), 4);
}
