//! Library side of the `floor-area` command line tool.

pub mod logging;
pub mod pipeline;
pub mod types;
