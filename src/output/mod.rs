//! Output formatting for trend-index results.
//!
//! - JSON: machine-readable serialization for the downstream
//!   figure-generation step
//! - Terminal: human-readable summary with colors and box drawing

mod json;
mod terminal;

pub use json::{to_json, to_json_pretty};
pub use terminal::format_summary;
