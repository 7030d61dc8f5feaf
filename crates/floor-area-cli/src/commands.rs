use anyhow::{Context, Result};
use comfy_table::{Cell, CellAlignment, Table};
use tracing::info_span;

use floor_area_cli::pipeline::{RunOptions, run_floor_area};
use floor_area_cli::types::RunResult;
use floor_area_model::{FloorAreaConfig, KeyRule};

use crate::cli::{RunArgs, ScenariosArgs};
use crate::summary::{align_column, apply_table_style};

pub fn run_scenarios(args: &ScenariosArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;

    let mut table = Table::new();
    table.set_header(vec!["Scenario", "Existing m²", "New build m²"]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for scenario in &config.scenarios {
        table.add_row(vec![
            Cell::new(&scenario.name),
            Cell::new(config.average_dwelling_m2),
            Cell::new(scenario.future_average_dwelling_m2),
        ]);
    }
    println!("{table}");

    let mut rules = Table::new();
    rules.set_header(vec!["Match", "Dwellings key", "Economic key"]);
    apply_table_style(&mut rules);
    for rule in config.key_map.rules() {
        let (kind, key, econ_key) = match rule {
            KeyRule::Exact { key, econ_key } => ("exact", key, econ_key),
            KeyRule::Contains { pattern, econ_key } => ("contains", pattern, econ_key),
        };
        rules.add_row(vec![kind, key.as_str(), econ_key.as_str()]);
    }
    rules.add_row(vec!["otherwise", "<key>", "<key>"]);
    println!("{rules}");
    println!(
        "Non-residential: {} m² per million GVA; base year: {:?}",
        config.nonres_m2_per_mgbp_gva, config.base_year
    );
    Ok(())
}

pub fn run_estimate(args: &RunArgs) -> Result<RunResult> {
    let span = info_span!("run", base_path = %args.base_path.display());
    let _guard = span.enter();

    let config = load_config(args.config.as_deref())?;
    let mut options = RunOptions::new(&args.base_path, config);
    if let Some(dir) = &args.input_dir {
        options.input_dir = dir.clone();
    }
    if let Some(dir) = &args.output_dir {
        options.output_dir = dir.clone();
    }
    options.scenarios = args.scenarios.clone();
    options.fail_fast = args.fail_fast;
    options.dry_run = args.dry_run;

    run_floor_area(&options)
}

fn load_config(path: Option<&std::path::Path>) -> Result<FloorAreaConfig> {
    FloorAreaConfig::load_or_default(path).context("load configuration")
}
