//! Request parameters and how they are obtained
//!
//! Parameters arrive either from CLI flags or from a small TOML file. They
//! are carried as plain strings and inserted into the request verbatim;
//! validation only rejects missing required fields, never reformats values.

pub mod builder;
pub mod loader;

pub use builder::RequestParamsBuilder;

use crate::error::{ComposerError, Result};
use serde::{Deserialize, Serialize};

/// User-supplied parameters overlaid onto the request skeleton
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RequestParams {
    /// Analytics view (profile) id
    pub view_id: String,
    /// Start of the reporting date range, passed through uncoerced
    pub start_date: String,
    /// End of the reporting date range, passed through uncoerced
    pub end_date: String,
    /// Comma-separated dimension names; `None` drops the field entirely
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
}

impl RequestParams {
    /// Create a new params builder
    pub fn builder() -> RequestParamsBuilder {
        RequestParamsBuilder::new()
    }

    /// Check that all required fields are present and non-empty.
    ///
    /// Values are not inspected beyond emptiness; a malformed date is still
    /// composed verbatim so the preview shows what would actually be sent.
    pub fn validate(&self) -> Result<()> {
        if self.view_id.trim().is_empty() {
            return Err(ComposerError::invalid_params("view id is required"));
        }
        if self.start_date.trim().is_empty() {
            return Err(ComposerError::invalid_params("start date is required"));
        }
        if self.end_date.trim().is_empty() {
            return Err(ComposerError::invalid_params("end date is required"));
        }
        Ok(())
    }
}
