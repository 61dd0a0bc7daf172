//! Pivot builder: flatten a nested report response into headers and rows
//!
//! The grid shown to the user is a flat table. Columns are the requested
//! dimensions, then the metrics, then one synthesized column per pivot header
//! entry. Each row maps a header label to its cell value.

use crate::types::{ColumnHeader, Report, ReportRow};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Flattened pivot table produced from a report response
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PivotData {
    /// Column labels in display order: dimensions, metrics, pivot columns
    pub headers: Vec<String>,
    /// One record per report row, keyed by header label
    pub rows: Vec<HashMap<String, String>>,
}

impl PivotData {
    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Look up a cell by row index and header label
    pub fn cell(&self, row: usize, header: &str) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(header)).map(String::as_str)
    }
}

/// Build the flattened pivot table for a report.
///
/// Returns `None` when the report carries no data rows; callers render a
/// "no data" message instead of an empty grid.
pub fn build_pivot_data(report: &Report) -> Option<PivotData> {
    let rows = report.data.rows.as_ref().filter(|rows| !rows.is_empty())?;

    let headers = header_labels(&report.column_header);
    let records = rows
        .iter()
        .map(|row| build_record(&headers, row))
        .collect();

    Some(PivotData {
        headers,
        rows: records,
    })
}

/// Column labels in display order: dimensions, then metrics, then pivot columns.
fn header_labels(column_header: &ColumnHeader) -> Vec<String> {
    let mut headers = Vec::new();

    if let Some(dimensions) = &column_header.dimensions {
        headers.extend(dimensions.iter().cloned());
    }

    let metric_header = &column_header.metric_header;
    for entry in &metric_header.metric_header_entries {
        headers.push(entry.name.clone());
    }

    // Only the first pivot header contributes columns.
    if let Some(pivot_header) = metric_header
        .pivot_headers
        .as_ref()
        .and_then(|headers| headers.first())
    {
        for entry in &pivot_header.pivot_header_entries {
            let mut label = String::new();
            for (name, value) in entry.dimension_names.iter().zip(&entry.dimension_values) {
                label.push_str(name);
                label.push('=');
                label.push_str(value);
                label.push(' ');
            }
            label.push_str(&entry.metric.name);
            headers.push(label);
        }
    }

    headers
}

/// Cell values for one row in header order: dimensions, then the first metric
/// value set, then the first pivot value region.
fn row_cells(row: &ReportRow) -> Vec<String> {
    let mut cells = row.dimensions.clone();

    if let Some(metrics) = row.metrics.first() {
        cells.extend(metrics.values.iter().cloned());

        if let Some(region) = metrics
            .pivot_value_regions
            .as_ref()
            .and_then(|regions| regions.first())
        {
            cells.extend(region.values.iter().cloned());
        }
    }

    cells
}

/// Zip header labels with cell values into a record.
///
/// A count mismatch degrades silently: the zip truncates to the shorter side,
/// so short rows simply leave the trailing columns unset.
fn build_record(headers: &[String], row: &ReportRow) -> HashMap<String, String> {
    headers
        .iter()
        .cloned()
        .zip(row_cells(row))
        .collect()
}
