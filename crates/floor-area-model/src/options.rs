//! Estimation parameters and future scenarios.

use serde::{Deserialize, Serialize};

/// Average floor area of an existing dwelling, in square meters.
pub const DEFAULT_AVERAGE_DWELLING_M2: f64 = 85.0;

/// Non-residential floor area per million currency units of GVA.
pub const DEFAULT_NONRES_M2_PER_MGBP_GVA: f64 = 1.0;

/// How the base timestep is chosen for each district.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseYearPolicy {
    /// One base timestep for the whole joined table: its minimum timestep.
    ///
    /// Districts without a row at that timestep get no base row and are
    /// dropped from the result.
    #[default]
    Global,
    /// Each district uses the minimum timestep of its own joined rows.
    PerDistrict,
}

/// Coefficients of the floor area allocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimationParams {
    /// Average size of the existing dwelling stock (m²).
    pub average_dwelling_m2: f64,
    /// Linear coefficient from GVA to non-residential floor area.
    pub nonres_m2_per_mgbp_gva: f64,
    pub base_year: BaseYearPolicy,
}

impl Default for EstimationParams {
    fn default() -> Self {
        Self {
            average_dwelling_m2: DEFAULT_AVERAGE_DWELLING_M2,
            nonres_m2_per_mgbp_gva: DEFAULT_NONRES_M2_PER_MGBP_GVA,
            base_year: BaseYearPolicy::default(),
        }
    }
}

impl EstimationParams {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_average_dwelling_m2(mut self, value: f64) -> Self {
        self.average_dwelling_m2 = value;
        self
    }

    #[must_use]
    pub fn with_nonres_m2_per_mgbp_gva(mut self, value: f64) -> Self {
        self.nonres_m2_per_mgbp_gva = value;
        self
    }

    #[must_use]
    pub fn with_base_year(mut self, policy: BaseYearPolicy) -> Self {
        self.base_year = policy;
        self
    }
}

/// A named assumption about the average size of newly built dwellings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FutureScenario {
    pub name: String,
    pub future_average_dwelling_m2: f64,
}

impl FutureScenario {
    pub fn new(name: impl Into<String>, future_average_dwelling_m2: f64) -> Self {
        Self {
            name: name.into(),
            future_average_dwelling_m2,
        }
    }
}

/// The `base`, `compact` and `expand` scenarios.
pub fn default_scenarios() -> Vec<FutureScenario> {
    vec![
        FutureScenario::new("base", 85.0),
        FutureScenario::new("compact", 76.0),
        FutureScenario::new("expand", 115.0),
    ]
}

/// Column names of the input and output CSV files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub timestep: String,
    pub district: String,
    pub dwellings: String,
    pub gva: String,
    pub category: String,
    pub floor_area: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            timestep: "timestep".to_string(),
            district: "lad_uk_2016".to_string(),
            dwellings: "dwellings".to_string(),
            gva: "gva".to_string(),
            category: "residential_or_non".to_string(),
            floor_area: "floor_area".to_string(),
        }
    }
}
