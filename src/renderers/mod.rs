//! Pivot table renderers for different output formats
//!
//! Keeps presentation separate from the pivot transformation itself: each
//! renderer turns a `PivotData` into a string for one output target.

use crate::pivot::PivotData;

/// Message shown instead of a grid when the response carried no rows
pub const NO_DATA_MESSAGE: &str = "No data in response";

/// Simple trait for rendering a pivot table in different formats
pub trait OutputRenderer {
    /// Render the pivot table to a string in the specific format
    fn render(&self, data: &PivotData) -> String;
}

// Sub-modules
pub mod html;
pub mod json;
pub mod table;

// Re-exports for convenience
pub use html::HtmlRenderer;
pub use json::JsonRenderer;
pub use table::{TableBuilder, TableRenderer};
