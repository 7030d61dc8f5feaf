//! Tests for floor area CSV output.

use std::fs;

use floor_area_model::{ColumnNames, FloorAreaCategory, FloorAreaRecord, FloorAreaResult};
use floor_area_output::{output_path, render_floor_area_csv, write_floor_area_csv};

fn sample_result() -> FloorAreaResult {
    let row = |timestep, district: &str, category, floor_area| FloorAreaRecord {
        timestep,
        district_id: district.into(),
        residential_or_non: category,
        floor_area,
    };
    FloorAreaResult::new(vec![
        row(2020, "E06000001", FloorAreaCategory::Residential, 8500.0),
        row(2025, "E06000001", FloorAreaCategory::Residential, 10020.0),
        row(2020, "E06000001", FloorAreaCategory::NonResidential, 10.0),
        row(2025, "E06000001", FloorAreaCategory::NonResidential, 12.5),
    ])
}

#[test]
fn renders_long_form_csv() {
    let csv = render_floor_area_csv(&sample_result(), &ColumnNames::default());
    insta::assert_snapshot!(csv, @r"
    timestep,lad_uk_2016,residential_or_non,floor_area
    2020,E06000001,residential,8500
    2025,E06000001,residential,10020
    2020,E06000001,non_residential,10
    2025,E06000001,non_residential,12.5
    ");
}

#[test]
fn renders_configured_column_names() {
    let columns = ColumnNames {
        district: "lad19cd".to_string(),
        floor_area: "floor_area_m2".to_string(),
        ..ColumnNames::default()
    };
    let csv = render_floor_area_csv(&FloorAreaResult::default(), &columns);
    insta::assert_snapshot!(csv, @"timestep,lad19cd,residential_or_non,floor_area_m2");
}

#[test]
fn writes_file_and_creates_directory() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = output_path(&dir.path().join("data_processed"), "0-unplanned", "base");

    write_floor_area_csv(&path, &sample_result(), &ColumnNames::default()).expect("write");

    let written = fs::read_to_string(&path).expect("read back");
    assert_eq!(
        written,
        render_floor_area_csv(&sample_result(), &ColumnNames::default())
    );
    assert_eq!(written.lines().count(), 5);
}

#[test]
fn overwrites_existing_output() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = output_path(dir.path(), "0-unplanned", "base");
    fs::write(&path, "stale\n").expect("seed");

    write_floor_area_csv(&path, &FloorAreaResult::default(), &ColumnNames::default())
        .expect("write");

    let written = fs::read_to_string(&path).expect("read back");
    assert_eq!(written, "timestep,lad_uk_2016,residential_or_non,floor_area\n");
}
