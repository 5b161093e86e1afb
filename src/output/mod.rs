//! Output formatting for analysis results

pub mod table;
pub mod writer;

pub use table::format_params_table;
pub use writer::{format_result, OutputOptions};
