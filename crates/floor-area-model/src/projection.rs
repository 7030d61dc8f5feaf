//! Projection datasets consumed and produced by the floor area estimator.
//!
//! All datasets keep the row order they were built with. The natural key of
//! every input row is `(timestep, district_id)`.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ids::{DistrictId, Timestep};

/// The two input datasets of an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    Dwellings,
    Gva,
}

impl DatasetKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dwellings => "dwellings",
            Self::Gva => "gva",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dwelling count for one district at one timestep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DwellingRecord {
    pub timestep: Timestep,
    pub district_id: DistrictId,
    pub dwellings: f64,
}

impl DwellingRecord {
    pub fn new(timestep: Timestep, district_id: impl Into<DistrictId>, dwellings: f64) -> Self {
        Self {
            timestep,
            district_id: district_id.into(),
            dwellings,
        }
    }
}

/// Gross value added (millions of currency) for one district at one timestep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GvaRecord {
    pub timestep: Timestep,
    pub district_id: DistrictId,
    pub gva: f64,
}

impl GvaRecord {
    pub fn new(timestep: Timestep, district_id: impl Into<DistrictId>, gva: f64) -> Self {
        Self {
            timestep,
            district_id: district_id.into(),
            gva,
        }
    }
}

/// Dwelling projection for one dwellings scenario.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DwellingProjection {
    pub rows: Vec<DwellingRecord>,
}

impl DwellingProjection {
    pub fn new(rows: Vec<DwellingRecord>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<DwellingRecord> for DwellingProjection {
    fn from_iter<I: IntoIterator<Item = DwellingRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// GVA projection for one economic scenario.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GvaProjection {
    pub rows: Vec<GvaRecord>,
}

impl GvaProjection {
    pub fn new(rows: Vec<GvaRecord>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<GvaRecord> for GvaProjection {
    fn from_iter<I: IntoIterator<Item = GvaRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Floor area category, rendered in the `residential_or_non` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloorAreaCategory {
    Residential,
    NonResidential,
}

impl FloorAreaCategory {
    /// Categories in melt order.
    pub const ALL: [FloorAreaCategory; 2] = [Self::Residential, Self::NonResidential];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Residential => "residential",
            Self::NonResidential => "non_residential",
        }
    }
}

impl fmt::Display for FloorAreaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FloorAreaCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "residential" => Ok(Self::Residential),
            "non_residential" => Ok(Self::NonResidential),
            other => Err(format!("unknown floor area category: {other}")),
        }
    }
}

/// Wide intermediate row: both floor areas for one `(timestep, district)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorAreaWideRow {
    pub timestep: Timestep,
    pub district_id: DistrictId,
    /// Residential floor area in square meters.
    pub residential: f64,
    /// Non-residential floor area in square meters.
    pub non_residential: f64,
}

impl FloorAreaWideRow {
    pub fn value(&self, category: FloorAreaCategory) -> f64 {
        match category {
            FloorAreaCategory::Residential => self.residential,
            FloorAreaCategory::NonResidential => self.non_residential,
        }
    }
}

/// One long-form output row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorAreaRecord {
    pub timestep: Timestep,
    pub district_id: DistrictId,
    pub residential_or_non: FloorAreaCategory,
    /// Floor area in square meters.
    pub floor_area: f64,
}

/// Long-form floor area estimate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FloorAreaResult {
    pub rows: Vec<FloorAreaRecord>,
}

/// Row, timestep and district counts of a result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSummary {
    pub rows: usize,
    pub timesteps: usize,
    pub districts: usize,
}

impl FloorAreaResult {
    pub fn new(rows: Vec<FloorAreaRecord>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Looks up the floor area of one `(timestep, district, category)` cell.
    pub fn value(
        &self,
        timestep: Timestep,
        district_id: &str,
        category: FloorAreaCategory,
    ) -> Option<f64> {
        self.rows
            .iter()
            .find(|row| {
                row.timestep == timestep
                    && row.district_id.as_str() == district_id
                    && row.residential_or_non == category
            })
            .map(|row| row.floor_area)
    }

    pub fn summary(&self) -> ResultSummary {
        let timesteps: BTreeSet<Timestep> = self.rows.iter().map(|row| row.timestep).collect();
        let districts: BTreeSet<&str> = self
            .rows
            .iter()
            .map(|row| row.district_id.as_str())
            .collect();
        ResultSummary {
            rows: self.rows.len(),
            timesteps: timesteps.len(),
            districts: districts.len(),
        }
    }
}
