//! Wide-to-long reshaping of floor area rows.

use floor_area_model::{FloorAreaCategory, FloorAreaRecord, FloorAreaResult, FloorAreaWideRow};

/// Melts wide rows into long form.
///
/// Each wide row yields one record per [`FloorAreaCategory`]. Records are
/// grouped by category: every `residential` record in wide-row order,
/// followed by every `non_residential` record in the same order.
pub fn melt(wide: &[FloorAreaWideRow]) -> FloorAreaResult {
    let rows = FloorAreaCategory::ALL
        .iter()
        .flat_map(|&category| {
            wide.iter().map(move |row| FloorAreaRecord {
                timestep: row.timestep,
                district_id: row.district_id.clone(),
                residential_or_non: category,
                floor_area: row.value(category),
            })
        })
        .collect();
    FloorAreaResult::new(rows)
}
