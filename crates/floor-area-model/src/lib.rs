//! Data model for floor area projections.
//!
//! Holds the typed projection datasets, the estimation parameters and named
//! future scenarios, the dwellings-to-economics scenario key map, and the TOML
//! configuration that ties them together.

pub mod config;
pub mod error;
pub mod ids;
pub mod options;
pub mod projection;
pub mod scenario_keys;

pub use config::FloorAreaConfig;
pub use error::{ConfigError, Result};
pub use ids::{DistrictId, Timestep};
pub use options::{
    BaseYearPolicy, ColumnNames, DEFAULT_AVERAGE_DWELLING_M2, DEFAULT_NONRES_M2_PER_MGBP_GVA,
    EstimationParams, FutureScenario, default_scenarios,
};
pub use projection::{
    DatasetKind, DwellingProjection, DwellingRecord, FloorAreaCategory, FloorAreaRecord, FloorAreaResult,
    FloorAreaWideRow, GvaProjection, GvaRecord, ResultSummary,
};
pub use scenario_keys::{KeyRule, ScenarioKeyMap};
