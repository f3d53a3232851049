//! Export module for inspecting a network in external tools.
//!
//! Supports:
//! - **DOT**: Graphviz visualization
//! - **JSON**: Web dashboards and reports
//! - **Text**: Human-readable station listing

pub mod dot;
pub mod json;
pub mod text;

pub use dot::{export_dot, export_dot_styled, DotOptions};
pub use json::{export_json, export_json_value};
pub use text::render_text;
