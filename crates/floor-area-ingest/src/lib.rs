//! Projection input discovery and loading.
//!
//! Finds `arc_dwellings__<key>.csv` files, pairs each with the GVA file of
//! its economic scenario, and reads CSV files into Polars DataFrames.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use floor_area_ingest::{discover_scenario_inputs, read_csv_table};
//! use floor_area_model::ScenarioKeyMap;
//!
//! let inputs = discover_scenario_inputs(Path::new("data_as_provided"), &ScenarioKeyMap::default())?;
//! for input in inputs.into_iter().flatten() {
//!     let dwellings = read_csv_table(&input.dwellings_path)?;
//!     let gva = read_csv_table(&input.gva_path)?;
//! }
//! ```

mod discovery;
mod error;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use reader::read_csv_table;

// === File Discovery ===
pub use discovery::{
    DWELLINGS_PREFIX, GVA_PREFIX, ScenarioInput, discover_scenario_inputs, gva_path,
    list_csv_files, parse_dwellings_key,
};
