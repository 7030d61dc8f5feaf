//! Floor area tool configuration.
//!
//! Every field has a default, so an empty TOML file is a valid configuration
//! reproducing the standard ARC scenario set.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::options::{
    BaseYearPolicy, ColumnNames, DEFAULT_AVERAGE_DWELLING_M2, DEFAULT_NONRES_M2_PER_MGBP_GVA,
    EstimationParams, FutureScenario, default_scenarios,
};
use crate::scenario_keys::ScenarioKeyMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloorAreaConfig {
    pub average_dwelling_m2: f64,
    pub nonres_m2_per_mgbp_gva: f64,
    pub base_year: BaseYearPolicy,
    pub columns: ColumnNames,
    pub scenarios: Vec<FutureScenario>,
    pub key_map: ScenarioKeyMap,
}

impl Default for FloorAreaConfig {
    fn default() -> Self {
        Self {
            average_dwelling_m2: DEFAULT_AVERAGE_DWELLING_M2,
            nonres_m2_per_mgbp_gva: DEFAULT_NONRES_M2_PER_MGBP_GVA,
            base_year: BaseYearPolicy::default(),
            columns: ColumnNames::default(),
            scenarios: default_scenarios(),
            key_map: ScenarioKeyMap::default(),
        }
    }
}

impl FloorAreaConfig {
    /// Reads and validates a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn params(&self) -> EstimationParams {
        EstimationParams {
            average_dwelling_m2: self.average_dwelling_m2,
            nonres_m2_per_mgbp_gva: self.nonres_m2_per_mgbp_gva,
            base_year: self.base_year,
        }
    }

    pub fn scenario(&self, name: &str) -> Option<&FutureScenario> {
        self.scenarios.iter().find(|scenario| scenario.name == name)
    }

    /// Scenario names end up in output file names, so they must be non-empty,
    /// unique and free of path separators and the `__` field delimiter.
    pub fn validate(&self) -> Result<()> {
        if self.scenarios.is_empty() {
            return Err(invalid("at least one scenario is required"));
        }
        let mut seen = BTreeSet::new();
        for scenario in &self.scenarios {
            let name = scenario.name.as_str();
            if name.trim().is_empty() {
                return Err(invalid("scenario name must not be empty"));
            }
            if name.contains(['/', '\\']) || name.contains("__") {
                return Err(invalid(format!(
                    "scenario name '{name}' must not contain path separators or '__'"
                )));
            }
            if !seen.insert(name) {
                return Err(invalid(format!("duplicate scenario name '{name}'")));
            }
        }
        let columns = [
            &self.columns.timestep,
            &self.columns.district,
            &self.columns.dwellings,
            &self.columns.gva,
            &self.columns.category,
            &self.columns.floor_area,
        ];
        if columns.iter().any(|column| column.trim().is_empty()) {
            return Err(invalid("column names must not be empty"));
        }
        Ok(())
    }
}

fn invalid(reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario_keys::KeyRule;

    #[test]
    fn empty_toml_is_default_config() {
        let config: FloorAreaConfig = toml::from_str("").unwrap();
        assert_eq!(config, FloorAreaConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parses_scenarios_and_key_map() {
        let config: FloorAreaConfig = toml::from_str(
            r#"
average_dwelling_m2 = 90.0
base_year = "per_district"

[columns]
district = "lad19cd"

[[scenarios]]
name = "small"
future_average_dwelling_m2 = 60.0

[[key_map]]
match = "exact"
key = "5-custom"
econ_key = "2-expansion"
"#,
        )
        .unwrap();
        assert_eq!(config.average_dwelling_m2, 90.0);
        assert_eq!(config.nonres_m2_per_mgbp_gva, 1.0);
        assert_eq!(config.base_year, BaseYearPolicy::PerDistrict);
        assert_eq!(config.columns.district, "lad19cd");
        assert_eq!(config.columns.timestep, "timestep");
        assert_eq!(config.scenarios, vec![FutureScenario::new("small", 60.0)]);
        assert_eq!(
            config.key_map.rules(),
            &[KeyRule::exact("5-custom", "2-expansion")]
        );
    }

    #[test]
    fn rejects_duplicate_scenarios() {
        let config = FloorAreaConfig {
            scenarios: vec![
                FutureScenario::new("base", 85.0),
                FutureScenario::new("base", 90.0),
            ],
            ..FloorAreaConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate scenario name 'base'"));
    }

    #[test]
    fn rejects_unsafe_scenario_names() {
        for name in ["", "a/b", "a__b"] {
            let config = FloorAreaConfig {
                scenarios: vec![FutureScenario::new(name, 85.0)],
                ..FloorAreaConfig::default()
            };
            assert!(config.validate().is_err(), "accepted {name:?}");
        }
    }

    #[test]
    fn params_follow_config() {
        let config = FloorAreaConfig {
            average_dwelling_m2: 80.0,
            nonres_m2_per_mgbp_gva: 2.0,
            ..FloorAreaConfig::default()
        };
        let params = config.params();
        assert_eq!(params.average_dwelling_m2, 80.0);
        assert_eq!(params.nonres_m2_per_mgbp_gva, 2.0);
        assert_eq!(params.base_year, BaseYearPolicy::Global);
    }
}
