//! Error types for floor area estimation.

use floor_area_model::{DatasetKind, Timestep};
use thiserror::Error;

/// Errors raised while converting or joining projection datasets.
///
/// Schema errors mean an input cannot be read as a projection at all; join
/// ambiguity errors mean a key is not unique where the join requires it.
#[derive(Debug, Error)]
pub enum EstimateError {
    // === Schema Errors ===
    /// Required column absent from an input frame.
    #[error("schema error: {dataset} data has no '{column}' column")]
    MissingColumn { dataset: DatasetKind, column: String },

    /// Cell is null or cannot be read as the column's type.
    #[error("schema error: invalid {column} value '{value}' at row {row} of {dataset} data")]
    InvalidValue {
        dataset: DatasetKind,
        column: String,
        /// Zero-based data row index.
        row: usize,
        value: String,
    },

    // === Join Ambiguity Errors ===
    /// The same `(timestep, district)` key occurs more than once in an input.
    #[error(
        "join ambiguity: {dataset} data has duplicate key (timestep {timestep}, district {district}) at rows {first_row} and {second_row}"
    )]
    DuplicateKey {
        dataset: DatasetKind,
        timestep: Timestep,
        district: String,
        first_row: usize,
        second_row: usize,
    },

    /// A district has more than one joined row at its base timestep.
    #[error("join ambiguity: district {district} has {count} rows at base timestep {timestep}")]
    AmbiguousBaseYear {
        district: String,
        timestep: Timestep,
        count: usize,
    },

    // === DataFrame Errors ===
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl EstimateError {
    pub fn is_schema_error(&self) -> bool {
        matches!(self, Self::MissingColumn { .. } | Self::InvalidValue { .. })
    }

    pub fn is_join_ambiguity(&self) -> bool {
        matches!(
            self,
            Self::DuplicateKey { .. } | Self::AmbiguousBaseYear { .. }
        )
    }
}

impl From<polars::prelude::PolarsError> for EstimateError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for estimation operations.
pub type Result<T> = std::result::Result<T, EstimateError>;
