//! JSON renderer for structured output

use super::OutputRenderer;
use crate::pivot::PivotData;

/// JSON renderer that produces structured JSON output
pub struct JsonRenderer {
    /// Whether to pretty-print the JSON output
    pub pretty: bool,
}

impl JsonRenderer {
    /// Create a new JSON renderer with pretty printing
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Create a JSON renderer with compact output
    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputRenderer for JsonRenderer {
    fn render(&self, data: &PivotData) -> String {
        if self.pretty {
            serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(data).unwrap_or_else(|_| "{}".to_string())
        }
    }
}
