//! Floor area run over every dwellings input and future scenario.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, info, info_span, warn};

use floor_area_core::{FloorAreaEstimator, dwellings_from_frame, gva_from_frame};
use floor_area_ingest::{ScenarioInput, discover_scenario_inputs, read_csv_table};
use floor_area_model::{
    ColumnNames, DwellingProjection, FloorAreaConfig, FutureScenario, GvaProjection,
};
use floor_area_output::{output_path, write_floor_area_csv};

use crate::types::{PairStatus, PairSummary, RunResult};

/// Input directory under the base path.
pub const INPUT_DIR_NAME: &str = "data_as_provided";
/// Output directory under the base path.
pub const OUTPUT_DIR_NAME: &str = "data_processed";

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub config: FloorAreaConfig,
    /// Scenario names to run; empty runs every configured scenario.
    pub scenarios: Vec<String>,
    /// Abort on the first failed pair instead of skipping it.
    pub fail_fast: bool,
    /// Estimate without writing output files.
    pub dry_run: bool,
}

impl RunOptions {
    /// Options reading from `<base>/data_as_provided` and writing to
    /// `<base>/data_processed`.
    pub fn new(base_path: &Path, config: FloorAreaConfig) -> Self {
        Self {
            input_dir: base_path.join(INPUT_DIR_NAME),
            output_dir: base_path.join(OUTPUT_DIR_NAME),
            config,
            scenarios: Vec::new(),
            fail_fast: false,
            dry_run: false,
        }
    }
}

/// Selects scenarios by name, keeping configuration order.
pub fn select_scenarios<'a>(
    config: &'a FloorAreaConfig,
    names: &[String],
) -> Result<Vec<&'a FutureScenario>> {
    if names.is_empty() {
        return Ok(config.scenarios.iter().collect());
    }
    if let Some(unknown) = names.iter().find(|name| config.scenario(name).is_none()) {
        let known: Vec<&str> = config.scenarios.iter().map(|s| s.name.as_str()).collect();
        bail!(
            "unknown scenario '{unknown}' (configured: {})",
            known.join(", ")
        );
    }
    Ok(config
        .scenarios
        .iter()
        .filter(|scenario| names.contains(&scenario.name))
        .collect())
}

pub fn run_floor_area(options: &RunOptions) -> Result<RunResult> {
    let config = &options.config;
    let scenarios = select_scenarios(config, &options.scenarios)?;
    warn_on_suspicious_sizes(config, &scenarios);

    let inputs = discover_scenario_inputs(&options.input_dir, &config.key_map)
        .with_context(|| format!("discover inputs in {}", options.input_dir.display()))?;
    if inputs.is_empty() {
        warn!(
            input_dir = %options.input_dir.display(),
            "no arc_dwellings__*.csv inputs found"
        );
    }

    let estimator = FloorAreaEstimator::new(config.params());
    let mut result = RunResult {
        input_dir: options.input_dir.clone(),
        output_dir: options.output_dir.clone(),
        dry_run: options.dry_run,
        pairs: Vec::new(),
        errors: Vec::new(),
        has_errors: false,
    };

    for discovered in inputs {
        let input = match discovered {
            Ok(input) => input,
            Err(error) => {
                record_failure(options, &mut result, anyhow::Error::new(error))?;
                continue;
            }
        };
        let span = info_span!("scenario_input", key = %input.key, econ_key = %input.econ_key);
        let _guard = span.enter();

        let (dwellings, gva) = match load_projections(&input, &config.columns) {
            Ok(projections) => projections,
            Err(error) => {
                let error = error.context(format!("scenario input '{}'", input.key));
                record_failure(options, &mut result, error)?;
                continue;
            }
        };

        for scenario in &scenarios {
            let pair = process_pair(options, &estimator, &input, scenario, &dwellings, &gva);
            match pair {
                Ok(summary) => result.pairs.push(summary),
                Err(error) => {
                    let error = error.context(format!(
                        "scenario input '{}', scenario '{}'",
                        input.key, scenario.name
                    ));
                    let message = format!("{error:#}");
                    record_failure(options, &mut result, error)?;
                    result.pairs.push(PairSummary {
                        key: input.key.clone(),
                        econ_key: input.econ_key.clone(),
                        scenario: scenario.name.clone(),
                        summary: Default::default(),
                        status: PairStatus::Failed(message),
                    });
                }
            }
        }
    }

    Ok(result)
}

fn load_projections(
    input: &ScenarioInput,
    columns: &ColumnNames,
) -> Result<(DwellingProjection, GvaProjection)> {
    let dwellings_df = read_csv_table(&input.dwellings_path)?;
    let dwellings = dwellings_from_frame(&dwellings_df, columns)
        .with_context(|| format!("read {}", input.dwellings_path.display()))?;
    let gva_df = read_csv_table(&input.gva_path)?;
    let gva = gva_from_frame(&gva_df, columns)
        .with_context(|| format!("read {}", input.gva_path.display()))?;
    debug!(
        dwellings_rows = dwellings.len(),
        gva_rows = gva.len(),
        "loaded projections"
    );
    Ok((dwellings, gva))
}

fn process_pair(
    options: &RunOptions,
    estimator: &FloorAreaEstimator,
    input: &ScenarioInput,
    scenario: &FutureScenario,
    dwellings: &DwellingProjection,
    gva: &GvaProjection,
) -> Result<PairSummary> {
    let estimate = estimator.estimate(dwellings, gva, scenario.future_average_dwelling_m2)?;
    let summary = estimate.summary();

    let status = if options.dry_run {
        info!(
            scenario = %scenario.name,
            rows = summary.rows,
            timesteps = summary.timesteps,
            districts = summary.districts,
            "estimated floor area (dry run)"
        );
        PairStatus::Estimated
    } else {
        let path = output_path(&options.output_dir, &input.key, &scenario.name);
        write_floor_area_csv(&path, &estimate, &options.config.columns)?;
        PairStatus::Written(path)
    };

    Ok(PairSummary {
        key: input.key.clone(),
        econ_key: input.econ_key.clone(),
        scenario: scenario.name.clone(),
        summary,
        status,
    })
}

/// Skips the failed unit, or aborts the run under `--fail-fast`.
fn record_failure(
    options: &RunOptions,
    result: &mut RunResult,
    error: anyhow::Error,
) -> Result<()> {
    if options.fail_fast {
        return Err(error);
    }
    let message = format!("{error:#}");
    warn!(error = %message, "skipping");
    result.errors.push(message);
    result.has_errors = true;
    Ok(())
}

fn warn_on_suspicious_sizes(config: &FloorAreaConfig, scenarios: &[&FutureScenario]) {
    if config.average_dwelling_m2 <= 0.0 {
        warn!(
            average_dwelling_m2 = config.average_dwelling_m2,
            "existing dwelling size is not positive"
        );
    }
    for scenario in scenarios {
        if scenario.future_average_dwelling_m2 <= 0.0 {
            warn!(
                scenario = %scenario.name,
                future_average_dwelling_m2 = scenario.future_average_dwelling_m2,
                "future dwelling size is not positive"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_all_scenarios_by_default() {
        let config = FloorAreaConfig::default();
        let names: Vec<&str> = select_scenarios(&config, &[])
            .unwrap()
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["base", "compact", "expand"]);
    }

    #[test]
    fn selection_keeps_config_order() {
        let config = FloorAreaConfig::default();
        let wanted = vec!["expand".to_string(), "base".to_string()];
        let names: Vec<&str> = select_scenarios(&config, &wanted)
            .unwrap()
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["base", "expand"]);
    }

    #[test]
    fn unknown_scenario_is_an_error() {
        let config = FloorAreaConfig::default();
        let err = select_scenarios(&config, &["huge".to_string()]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown scenario 'huge' (configured: base, compact, expand)"
        );
    }

    #[test]
    fn default_directories_live_under_base_path() {
        let options = RunOptions::new(Path::new("/data/arc"), FloorAreaConfig::default());
        assert_eq!(options.input_dir, PathBuf::from("/data/arc/data_as_provided"));
        assert_eq!(options.output_dir, PathBuf::from("/data/arc/data_processed"));
    }
}
