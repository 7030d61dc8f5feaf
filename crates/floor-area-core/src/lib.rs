//! Floor area estimation from dwelling and GVA projections.
//!
//! The estimator joins a dwellings projection with a GVA projection on
//! `(timestep, district)`, allocates residential floor area relative to the
//! base timestep, derives non-residential floor area from GVA, and melts the
//! result into long form. Everything here is pure: no file access, no shared
//! state between calls.
//!
//! # Example
//!
//! ```
//! use floor_area_core::FloorAreaEstimator;
//! use floor_area_model::{
//!     DwellingProjection, DwellingRecord, EstimationParams, FloorAreaCategory, GvaProjection,
//!     GvaRecord,
//! };
//!
//! let dwellings = DwellingProjection::new(vec![
//!     DwellingRecord::new(2020, "A", 100.0),
//!     DwellingRecord::new(2025, "A", 120.0),
//! ]);
//! let gva = GvaProjection::new(vec![
//!     GvaRecord::new(2020, "A", 10.0),
//!     GvaRecord::new(2025, "A", 12.0),
//! ]);
//! let result = FloorAreaEstimator::new(EstimationParams::default())
//!     .estimate(&dwellings, &gva, 76.0)
//!     .unwrap();
//! assert_eq!(result.value(2025, "A", FloorAreaCategory::Residential), Some(10020.0));
//! ```

mod error;
mod estimator;
mod frame;
mod melt;

// === Error Types ===
pub use error::{EstimateError, Result};

// === Estimation ===
pub use estimator::{FloorAreaEstimator, estimate_floor_area};
pub use melt::melt;

// === DataFrame Adapters ===
pub use frame::{dwellings_from_frame, estimate_floor_area_frame, gva_from_frame, result_to_frame};
