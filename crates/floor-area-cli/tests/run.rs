//! End-to-end runs over a temporary project folder.

use std::fs;
use std::path::Path;

use floor_area_cli::pipeline::{RunOptions, run_floor_area};
use floor_area_cli::types::PairStatus;
use floor_area_model::{FloorAreaConfig, FutureScenario};

const DWELLINGS: &str = "timestep,lad_uk_2016,dwellings\n2020,A,100\n2025,A,120\n";
const GVA: &str = "timestep,lad_uk_2016,gva\n2020,A,10\n2025,A,12\n";

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).expect("write fixture");
}

fn project() -> tempfile::TempDir {
    let base = tempfile::tempdir().expect("temp dir");
    let input = base.path().join("data_as_provided");
    fs::create_dir(&input).expect("input dir");
    write(&input, "arc_dwellings__0-unplanned.csv", DWELLINGS);
    write(&input, "arc_dwellings__3-new-cities23.csv", DWELLINGS);
    write(&input, "arc_gva__0-unplanned.csv", GVA);
    write(&input, "arc_gva__1-new-cities.csv", GVA);
    base
}

#[test]
fn writes_one_file_per_key_and_scenario() {
    let base = project();
    let options = RunOptions::new(base.path(), FloorAreaConfig::default());

    let result = run_floor_area(&options).expect("run");

    assert!(!result.has_errors);
    assert_eq!(result.pairs.len(), 6);
    assert_eq!(result.written().count(), 6);
    let output = base.path().join("data_processed");
    for key in ["0-unplanned", "3-new-cities23"] {
        for scenario in ["base", "compact", "expand"] {
            let path = output.join(format!("arc_floor_area__{key}__{scenario}.csv"));
            assert!(path.is_file(), "missing {}", path.display());
        }
    }

    let compact = fs::read_to_string(output.join("arc_floor_area__3-new-cities23__compact.csv"))
        .expect("read output");
    insta::assert_snapshot!(compact, @r"
    timestep,lad_uk_2016,residential_or_non,floor_area
    2020,A,residential,8500
    2025,A,residential,10020
    2020,A,non_residential,10
    2025,A,non_residential,12
    ");

    let pair = &result.pairs[0];
    assert_eq!(pair.econ_key, "0-unplanned");
    assert_eq!(pair.summary.rows, 4);
    assert_eq!(pair.summary.timesteps, 2);
    assert_eq!(pair.summary.districts, 1);
}

#[test]
fn missing_gva_is_skipped_and_reported() {
    let base = project();
    write(
        &base.path().join("data_as_provided"),
        "arc_dwellings__9-orphan.csv",
        DWELLINGS,
    );
    let options = RunOptions::new(base.path(), FloorAreaConfig::default());

    let result = run_floor_area(&options).expect("run");

    assert!(result.has_errors);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("arc_gva__9-orphan.csv"));
    assert_eq!(result.written().count(), 6);
}

#[test]
fn fail_fast_aborts_on_first_failure() {
    let base = project();
    write(
        &base.path().join("data_as_provided"),
        "arc_dwellings__0-broken.csv",
        "timestep,lad_uk_2016,households\n2020,A,1\n",
    );
    write(&base.path().join("data_as_provided"), "arc_gva__0-broken.csv", GVA);
    let mut options = RunOptions::new(base.path(), FloorAreaConfig::default());
    options.fail_fast = true;

    let err = run_floor_area(&options).unwrap_err();

    let message = format!("{err:#}");
    assert!(message.contains("scenario input '0-broken'"), "{message}");
    assert!(message.contains("no 'dwellings' column"), "{message}");
    assert!(!base.path().join("data_processed").exists());
}

#[test]
fn schema_error_skips_only_that_input() {
    let base = project();
    write(
        &base.path().join("data_as_provided"),
        "arc_dwellings__0-broken.csv",
        "timestep,lad_uk_2016,households\n2020,A,1\n",
    );
    write(&base.path().join("data_as_provided"), "arc_gva__0-broken.csv", GVA);
    let options = RunOptions::new(base.path(), FloorAreaConfig::default());

    let result = run_floor_area(&options).expect("run");

    assert!(result.has_errors);
    assert_eq!(result.written().count(), 6);
}

#[test]
fn duplicate_keys_fail_each_scenario_pair() {
    let base = project();
    let input = base.path().join("data_as_provided");
    write(
        &input,
        "arc_dwellings__0-unplanned.csv",
        "timestep,lad_uk_2016,dwellings\n2020,A,100\n2020,A,101\n",
    );
    let mut options = RunOptions::new(base.path(), FloorAreaConfig::default());
    options.scenarios = vec!["base".to_string()];

    let result = run_floor_area(&options).expect("run");

    assert!(result.has_errors);
    let failed: Vec<_> = result
        .pairs
        .iter()
        .filter(|pair| matches!(pair.status, PairStatus::Failed(_)))
        .collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].key, "0-unplanned");
    assert!(result.errors[0].contains("join ambiguity"));
}

#[test]
fn dry_run_writes_nothing() {
    let base = project();
    let mut options = RunOptions::new(base.path(), FloorAreaConfig::default());
    options.dry_run = true;

    let result = run_floor_area(&options).expect("run");

    assert_eq!(result.pairs.len(), 6);
    assert!(
        result
            .pairs
            .iter()
            .all(|pair| pair.status == PairStatus::Estimated)
    );
    assert!(!base.path().join("data_processed").exists());
}

#[test]
fn scenario_filter_and_custom_config() {
    let base = project();
    let config = FloorAreaConfig {
        scenarios: vec![
            FutureScenario::new("small", 50.0),
            FutureScenario::new("large", 150.0),
        ],
        ..FloorAreaConfig::default()
    };
    let mut options = RunOptions::new(base.path(), config);
    options.scenarios = vec!["large".to_string()];
    options.output_dir = base.path().join("custom_out");

    let result = run_floor_area(&options).expect("run");

    assert_eq!(result.written().count(), 2);
    let written = fs::read_to_string(
        base.path()
            .join("custom_out")
            .join("arc_floor_area__0-unplanned__large.csv"),
    )
    .expect("read output");
    assert!(written.contains("2025,A,residential,11500\n"));
}

#[test]
fn missing_input_directory_is_fatal() {
    let base = tempfile::tempdir().expect("temp dir");
    let options = RunOptions::new(base.path(), FloorAreaConfig::default());

    let err = run_floor_area(&options).unwrap_err();

    assert!(format!("{err:#}").contains("directory not found"));
}
