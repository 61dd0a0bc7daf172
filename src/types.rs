//! Typed model of the Analytics Reporting API v4 response
//!
//! Mirrors the wire shape of a `reports:batchGet` response. Optional regions
//! (dimensions, pivot headers, pivot value regions) deserialize to `None` and
//! contribute nothing downstream.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level `reports:batchGet` response body
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    /// One report per request in the batch
    #[serde(default)]
    pub reports: Vec<Report>,
}

impl ReportResponse {
    /// Parse a response from raw JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a saved response from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Get the first report in the batch, if any
    pub fn first_report(&self) -> Option<&Report> {
        self.reports.first()
    }
}

/// A single report: column metadata plus row data
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(default)]
    pub column_header: ColumnHeader,
    #[serde(default)]
    pub data: ReportData,
}

/// Column metadata: dimension names and metric header entries
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnHeader {
    /// Requested dimension names, absent when the request had none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Vec<String>>,
    #[serde(default)]
    pub metric_header: MetricHeader,
}

/// Metric column metadata, with optional pivot breakdowns
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricHeader {
    #[serde(default)]
    pub metric_header_entries: Vec<MetricHeaderEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pivot_headers: Option<Vec<PivotHeader>>,
}

/// A single metric column: name and value type
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricHeaderEntry {
    pub name: String,
    /// Value type reported by the API (INTEGER, FLOAT, ...)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
}

/// Pivot header: one entry per synthesized pivot column
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PivotHeader {
    #[serde(default)]
    pub pivot_header_entries: Vec<PivotHeaderEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pivot_groups_count: Option<u32>,
}

/// A pivot column description: the dimension values it groups by and its metric
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PivotHeaderEntry {
    #[serde(default)]
    pub dimension_names: Vec<String>,
    #[serde(default)]
    pub dimension_values: Vec<String>,
    #[serde(default)]
    pub metric: MetricHeaderEntry,
}

/// Report row data
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportData {
    /// Absent when the query matched nothing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<ReportRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub totals: Option<Vec<DateRangeValues>>,
}

/// A single row: dimension values plus one metric value set per date range
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    #[serde(default)]
    pub dimensions: Vec<String>,
    #[serde(default)]
    pub metrics: Vec<DateRangeValues>,
}

/// Metric values for one date range, with optional pivot value regions
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeValues {
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pivot_value_regions: Option<Vec<PivotValueRegion>>,
}

/// Pivot metric values for one row, positionally aligned with the pivot header
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PivotValueRegion {
    #[serde(default)]
    pub values: Vec<String>,
}
