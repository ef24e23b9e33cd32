//! UI module for consistent CLI output
//!
//! Plain `[OK]`-style markers when piped or in CI, colored markers in a
//! terminal.

mod context;
mod output;

pub use context::UiContext;
pub use output::{key_value, key_value_status, section, step_ok_detail, step_warn_hint};
