//! Floor area output files.
//!
//! Results are written in long form, one CSV per dwellings scenario key and
//! future scenario: `arc_floor_area__<key>__<scenario>.csv`.

mod error;
mod writer;

pub use error::{OutputError, Result};
pub use writer::{
    FLOOR_AREA_PREFIX, output_file_name, output_path, render_floor_area_csv, write_floor_area_csv,
};
