//! Request Composer - compose Analytics Reporting API v4 requests and view results
//!
//! This crate provides two stateless transformations: flattening a nested v4
//! report response into a pivot table for grid display, and merging user
//! parameters into a fixed request skeleton rendered as syntax-highlighted
//! JSON. The request itself is never issued; the request line is carried as
//! a constant for display only.

// Core modules
pub mod config;
pub mod error;
pub mod types;

// Main functionality modules
pub mod composer;
pub mod highlight;
pub mod pivot;
pub mod renderers;

// Re-export main types for convenience
pub use composer::{compose, compose_preview, ReportRequest, ReportRequestBody, REQUEST_URI};
pub use config::{RequestParams, RequestParamsBuilder};
pub use error::{ComposerError, Result};
pub use highlight::{syntax_highlight, TokenClass};
pub use pivot::{build_pivot_data, PivotData};
pub use renderers::{
    HtmlRenderer, JsonRenderer, OutputRenderer, TableRenderer, NO_DATA_MESSAGE,
};
pub use types::{Report, ReportResponse};

#[cfg(test)]
mod tests {
    use super::*;

    /// Test that the two transforms compose end to end
    #[test]
    fn test_module_imports() {
        let params = RequestParams::builder()
            .view_id("999")
            .date_range("2020-01-01", "2020-02-01")
            .build()
            .unwrap();

        let preview = compose_preview(&params).unwrap();
        assert!(preview.contains("span"));

        let report = Report::default();
        assert!(build_pivot_data(&report).is_none());
    }

    #[test]
    fn test_error_types() {
        let error = ComposerError::invalid_params("test error");
        assert!(error.to_string().contains("Invalid request parameters"));
    }
}
