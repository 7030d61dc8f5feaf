//! Property tests for the join, allocation and melt invariants.

use floor_area_core::{FloorAreaEstimator, melt};
use floor_area_model::{
    DwellingProjection, DwellingRecord, EstimationParams, FloorAreaCategory, GvaProjection,
    GvaRecord,
};
use proptest::prelude::*;

const BASE: i64 = 2020;

/// Per district, a run of (dwellings, gva) cells at 5-year timesteps from 2020.
fn districts() -> impl Strategy<Value = Vec<Vec<(f64, f64)>>> {
    prop::collection::vec(
        prop::collection::vec((0.0f64..1.0e6, 0.0f64..1.0e4), 1..8),
        1..6,
    )
}

fn build(cells: &[Vec<(f64, f64)>]) -> (DwellingProjection, GvaProjection) {
    let mut dwellings = Vec::new();
    let mut gva = Vec::new();
    for (district, series) in cells.iter().enumerate() {
        let id = format!("E0{district}");
        for (step, &(count, output)) in series.iter().enumerate() {
            let timestep = BASE + 5 * step as i64;
            dwellings.push(DwellingRecord::new(timestep, id.as_str(), count));
            gva.push(GvaRecord::new(timestep, id.as_str(), output));
        }
    }
    (DwellingProjection::new(dwellings), GvaProjection::new(gva))
}

proptest! {
    #[test]
    fn output_has_two_rows_per_joined_pair(cells in districts(), future in 50.0f64..150.0) {
        let (d, g) = build(&cells);
        let result = FloorAreaEstimator::default().estimate(&d, &g, future).unwrap();
        prop_assert_eq!(result.len(), 2 * d.len());
    }

    #[test]
    fn non_residential_is_linear_in_gva(cells in districts(), coefficient in 0.1f64..10.0) {
        let (d, g) = build(&cells);
        let params = EstimationParams::default().with_nonres_m2_per_mgbp_gva(coefficient);
        let wide = FloorAreaEstimator::new(params).estimate_wide(&d, &g, 85.0).unwrap();
        for (row, input) in wide.iter().zip(&g.rows) {
            prop_assert_eq!(row.non_residential, input.gva * coefficient);
        }
    }

    #[test]
    fn base_timestep_uses_existing_stock_size(cells in districts(), future in 50.0f64..150.0) {
        let (d, g) = build(&cells);
        let result = FloorAreaEstimator::default().estimate(&d, &g, future).unwrap();
        for input in d.rows.iter().filter(|row| row.timestep == BASE) {
            let residential = result
                .value(BASE, input.district_id.as_str(), FloorAreaCategory::Residential);
            prop_assert_eq!(residential, Some(input.dwellings * 85.0));
        }
    }

    #[test]
    fn melt_round_trips_wide_rows(cells in districts()) {
        let (d, g) = build(&cells);
        let wide = FloorAreaEstimator::default().estimate_wide(&d, &g, 76.0).unwrap();
        let long = melt(&wide);
        let n = wide.len();
        prop_assert_eq!(long.len(), 2 * n);
        for (i, row) in wide.iter().enumerate() {
            let residential = &long.rows[i];
            let non_residential = &long.rows[n + i];
            prop_assert_eq!(residential.timestep, row.timestep);
            prop_assert_eq!(&residential.district_id, &row.district_id);
            prop_assert_eq!(residential.residential_or_non, FloorAreaCategory::Residential);
            prop_assert_eq!(residential.floor_area, row.residential);
            prop_assert_eq!(&non_residential.district_id, &row.district_id);
            prop_assert_eq!(non_residential.residential_or_non, FloorAreaCategory::NonResidential);
            prop_assert_eq!(non_residential.floor_area, row.non_residential);
        }
    }
}
