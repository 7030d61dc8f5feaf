//! Floor area estimation.
//!
//! Residential floor area is split into the dwelling stock that already exists
//! at the base timestep and the dwellings built since. Existing dwellings keep
//! the average size of today's stock; new dwellings take the size assumed by
//! the future scenario:
//!
//! ```text
//! residential     = dwellings_base * average_dwelling_m2
//!                 + (dwellings - dwellings_base) * future_average_dwelling_m2
//! non_residential = gva * nonres_m2_per_mgbp_gva
//! ```
//!
//! Inputs are inner-joined on `(timestep, district)`. Keys must be unique in
//! each input; a duplicate would multiply rows in the join, so it is rejected
//! with a join ambiguity error before anything is computed.

use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap};

use floor_area_model::{
    BaseYearPolicy, DatasetKind, DistrictId, DwellingProjection, EstimationParams,
    FloorAreaResult, FloorAreaWideRow, GvaProjection, Timestep,
};
use tracing::{debug, instrument, warn};

use crate::error::{EstimateError, Result};
use crate::melt::melt;

/// Estimates floor area for one future scenario at a time.
#[derive(Debug, Clone, Default)]
pub struct FloorAreaEstimator {
    params: EstimationParams,
}

impl FloorAreaEstimator {
    pub fn new(params: EstimationParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &EstimationParams {
        &self.params
    }

    /// Estimates long-form floor area.
    ///
    /// `future_average_dwelling_m2` is the size of dwellings built after the
    /// base timestep. It is not validated: zero or negative sizes produce
    /// meaningless but well-formed output.
    ///
    /// # Errors
    ///
    /// [`EstimateError::DuplicateKey`] when a `(timestep, district)` key occurs
    /// twice in either input.
    pub fn estimate(
        &self,
        dwellings: &DwellingProjection,
        gva: &GvaProjection,
        future_average_dwelling_m2: f64,
    ) -> Result<FloorAreaResult> {
        let wide = self.estimate_wide(dwellings, gva, future_average_dwelling_m2)?;
        Ok(melt(&wide))
    }

    /// Estimates floor area with one row per joined `(timestep, district)`,
    /// in dwellings input order.
    #[instrument(
        skip_all,
        fields(
            dwellings_rows = dwellings.len(),
            gva_rows = gva.len(),
            future_average_dwelling_m2 = future_average_dwelling_m2
        )
    )]
    pub fn estimate_wide(
        &self,
        dwellings: &DwellingProjection,
        gva: &GvaProjection,
        future_average_dwelling_m2: f64,
    ) -> Result<Vec<FloorAreaWideRow>> {
        let joined = join_projections(dwellings, gva)?;
        debug!(joined_rows = joined.len(), "joined dwellings and gva");

        let base_timesteps = base_timesteps(&joined, self.params.base_year);
        let base_dwellings = attach_base_rows(&joined, &base_timesteps)?;

        let mut wide = Vec::with_capacity(joined.len());
        let mut dropped: BTreeSet<&str> = BTreeSet::new();
        for row in &joined {
            let district = row.district_id.as_str();
            let Some(&dwellings_base) = base_dwellings.get(district) else {
                dropped.insert(district);
                continue;
            };
            let dwellings_new = row.dwellings - dwellings_base;
            let residential = dwellings_base * self.params.average_dwelling_m2
                + dwellings_new * future_average_dwelling_m2;
            let non_residential = row.gva * self.params.nonres_m2_per_mgbp_gva;
            wide.push(FloorAreaWideRow {
                timestep: row.timestep,
                district_id: row.district_id.clone(),
                residential,
                non_residential,
            });
        }
        if !dropped.is_empty() {
            warn!(
                district_count = dropped.len(),
                districts = ?dropped,
                "districts without a row at the base timestep were dropped"
            );
        }
        Ok(wide)
    }
}

/// Estimates floor area with the given parameters.
pub fn estimate_floor_area(
    dwellings: &DwellingProjection,
    gva: &GvaProjection,
    params: &EstimationParams,
    future_average_dwelling_m2: f64,
) -> Result<FloorAreaResult> {
    FloorAreaEstimator::new(*params).estimate(dwellings, gva, future_average_dwelling_m2)
}

/// One row of the dwellings/GVA inner join.
#[derive(Debug, Clone, Copy)]
struct JoinedRow<'a> {
    timestep: Timestep,
    district_id: &'a DistrictId,
    dwellings: f64,
    gva: f64,
}

/// Inner-joins both projections on `(timestep, district)`, keeping the
/// dwellings row order.
fn join_projections<'a>(
    dwellings: &'a DwellingProjection,
    gva: &'a GvaProjection,
) -> Result<Vec<JoinedRow<'a>>> {
    index_unique_keys(
        DatasetKind::Dwellings,
        dwellings
            .rows
            .iter()
            .map(|row| (row.timestep, &row.district_id)),
    )?;
    let gva_index = index_unique_keys(
        DatasetKind::Gva,
        gva.rows.iter().map(|row| (row.timestep, &row.district_id)),
    )?;

    let joined = dwellings
        .rows
        .iter()
        .filter_map(|row| {
            let gva_row = gva_index.get(&(row.timestep, row.district_id.as_str()))?;
            Some(JoinedRow {
                timestep: row.timestep,
                district_id: &row.district_id,
                dwellings: row.dwellings,
                gva: gva.rows[*gva_row].gva,
            })
        })
        .collect();
    Ok(joined)
}

/// Maps each key to its row index, failing on the first repeated key.
fn index_unique_keys<'a>(
    dataset: DatasetKind,
    keys: impl Iterator<Item = (Timestep, &'a DistrictId)>,
) -> Result<HashMap<(Timestep, &'a str), usize>> {
    let mut index = HashMap::new();
    for (row, (timestep, district)) in keys.enumerate() {
        match index.entry((timestep, district.as_str())) {
            Entry::Occupied(first) => {
                return Err(EstimateError::DuplicateKey {
                    dataset,
                    timestep,
                    district: district.to_string(),
                    first_row: *first.get(),
                    second_row: row,
                });
            }
            Entry::Vacant(slot) => {
                slot.insert(row);
            }
        }
    }
    Ok(index)
}

/// Base timestep of every district present in the join.
fn base_timesteps<'a>(
    joined: &[JoinedRow<'a>],
    policy: BaseYearPolicy,
) -> HashMap<&'a str, Timestep> {
    let mut earliest: HashMap<&'a str, Timestep> = HashMap::new();
    for row in joined {
        earliest
            .entry(row.district_id.as_str())
            .and_modify(|timestep| *timestep = (*timestep).min(row.timestep))
            .or_insert(row.timestep);
    }
    match policy {
        BaseYearPolicy::PerDistrict => earliest,
        BaseYearPolicy::Global => {
            let Some(global) = earliest.values().copied().min() else {
                return earliest;
            };
            debug!(base_timestep = global, "using global base timestep");
            earliest
                .into_keys()
                .map(|district| (district, global))
                .collect()
        }
    }
}

/// Base-year dwellings per district.
///
/// A district with no joined row at its base timestep is absent from the map.
fn attach_base_rows<'a>(
    joined: &[JoinedRow<'a>],
    base_timesteps: &HashMap<&'a str, Timestep>,
) -> Result<HashMap<&'a str, f64>> {
    let mut base: HashMap<&'a str, (f64, usize)> = HashMap::new();
    for row in joined {
        let district = row.district_id.as_str();
        if base_timesteps.get(district) != Some(&row.timestep) {
            continue;
        }
        base.entry(district)
            .and_modify(|(_, count)| *count += 1)
            .or_insert((row.dwellings, 1));
    }
    let mut ambiguous: Vec<(&str, usize)> = base
        .iter()
        .filter(|(_, (_, count))| *count > 1)
        .map(|(district, (_, count))| (*district, *count))
        .collect();
    ambiguous.sort_unstable();
    if let Some((district, count)) = ambiguous.first() {
        return Err(EstimateError::AmbiguousBaseYear {
            district: (*district).to_string(),
            timestep: base_timesteps.get(*district).copied().unwrap_or_default(),
            count: *count,
        });
    }
    Ok(base
        .into_iter()
        .map(|(district, (dwellings, _))| (district, dwellings))
        .collect())
}
