//! Request composer: merge user parameters into the batchGet skeleton
//!
//! The skeleton is constructed fresh for every call. Supplied parameter
//! values are inserted verbatim, without validation or coercion, so the
//! preview always shows exactly what would be sent.

use crate::config::RequestParams;
use crate::error::Result;
use crate::highlight;
use serde::{Deserialize, Serialize};

/// Request line for the Reporting API v4 batch endpoint. Shown alongside the
/// composed body; the call itself is never issued from this crate.
pub const REQUEST_URI: &str =
    "POST https://analyticsreporting.googleapis.com/v4/reports:batchGet?";

/// Body of a `reports:batchGet` call
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequestBody {
    pub report_requests: Vec<ReportRequest>,
}

/// A single report request within the batch
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub date_ranges: Vec<DateRange>,
    pub view_id: String,
    /// Omitted from the serialized request when no dimensions are selected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Vec<Dimension>>,
    pub metrics: Vec<Metric>,
    pub order_bys: Vec<OrderBy>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Dimension {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Metric {
    pub expression: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBy {
    pub field_name: String,
    pub order_type: String,
}

impl ReportRequest {
    /// The fixed request skeleton the composer overlays parameters onto.
    ///
    /// Built fresh per call so concurrent callers never observe each other's
    /// parameter values.
    pub fn skeleton() -> Self {
        Self {
            date_ranges: vec![DateRange {
                start_date: "2015-01-01".to_string(),
                end_date: "2015-02-01".to_string(),
            }],
            view_id: "1174".to_string(),
            dimensions: Some(Vec::new()),
            metrics: vec![Metric {
                expression: "ga:sessions".to_string(),
            }],
            order_bys: vec![OrderBy {
                field_name: "ga:sessionCount".to_string(),
                order_type: "HISTOGRAM_BUCKET".to_string(),
            }],
        }
    }
}

/// Merge request parameters into a fresh skeleton.
///
/// The view id and date range are overwritten with the supplied values,
/// verbatim. A supplied dimensions string is split on commas into one
/// `{name}` entry per token; with no dimensions the field is dropped so the
/// serialized request carries no `dimensions` key at all.
pub fn compose(params: &RequestParams) -> ReportRequestBody {
    let mut request = ReportRequest::skeleton();

    request.view_id = params.view_id.clone();
    if let Some(range) = request.date_ranges.first_mut() {
        range.start_date = params.start_date.clone();
        range.end_date = params.end_date.clone();
    }

    request.dimensions = match params.dimensions.as_deref() {
        Some(names) if !names.is_empty() => Some(
            names
                .split(',')
                .map(|name| Dimension {
                    name: name.to_string(),
                })
                .collect(),
        ),
        _ => None,
    };

    ReportRequestBody {
        report_requests: vec![request],
    }
}

/// Serialize a composed request with two-space indentation
pub fn to_pretty_json(body: &ReportRequestBody) -> Result<String> {
    Ok(serde_json::to_string_pretty(body)?)
}

/// Compose and render the syntax-highlighted preview fragment
pub fn compose_preview(params: &RequestParams) -> Result<String> {
    let json = to_pretty_json(&compose(params))?;
    Ok(highlight::syntax_highlight(&json))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RequestParams;

    fn params(dimensions: Option<&str>) -> RequestParams {
        RequestParams {
            view_id: "999".to_string(),
            start_date: "2020-01-01".to_string(),
            end_date: "2020-02-01".to_string(),
            dimensions: dimensions.map(String::from),
        }
    }

    #[test]
    fn test_compose_overwrites_view_id_and_dates() {
        let body = compose(&params(None));
        let request = &body.report_requests[0];

        assert_eq!(request.view_id, "999");
        assert_eq!(request.date_ranges[0].start_date, "2020-01-01");
        assert_eq!(request.date_ranges[0].end_date, "2020-02-01");
    }

    #[test]
    fn test_no_dimensions_key_when_unset() {
        let json = to_pretty_json(&compose(&params(None))).unwrap();
        assert!(!json.contains("dimensions"));
        assert!(json.contains(r#""viewId": "999""#));

        // An empty string behaves the same as no dimensions at all.
        let json = to_pretty_json(&compose(&params(Some("")))).unwrap();
        assert!(!json.contains("dimensions"));
    }

    #[test]
    fn test_dimensions_split_on_commas() {
        let body = compose(&params(Some("ga:country,ga:city")));
        let dimensions = body.report_requests[0].dimensions.as_ref().unwrap();

        let names: Vec<&str> = dimensions.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["ga:country", "ga:city"]);
    }

    #[test]
    fn test_dimension_tokens_pass_through_uncoerced() {
        let body = compose(&params(Some("ga:country,,  ga:city ")));
        let dimensions = body.report_requests[0].dimensions.as_ref().unwrap();

        let names: Vec<&str> = dimensions.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["ga:country", "", "  ga:city "]);
    }

    #[test]
    fn test_skeleton_is_fresh_per_call() {
        let body = compose(&params(None));
        assert_eq!(body.report_requests[0].view_id, "999");

        // A later call starts from the pristine skeleton, not the merged one.
        let skeleton = ReportRequest::skeleton();
        assert_eq!(skeleton.view_id, "1174");
        assert_eq!(skeleton.date_ranges[0].start_date, "2015-01-01");
        assert_eq!(skeleton.dimensions.as_ref().unwrap().len(), 0);
    }

    #[test]
    fn test_output_round_trips_through_json() {
        let body = compose(&params(Some("ga:country")));
        let json = to_pretty_json(&body).unwrap();

        let reparsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let original = serde_json::to_value(&body).unwrap();
        assert_eq!(reparsed, original);
    }

    #[test]
    fn test_skeleton_fields_preserved() {
        let json = to_pretty_json(&compose(&params(None))).unwrap();

        assert!(json.contains(r#""expression": "ga:sessions""#));
        assert!(json.contains(r#""fieldName": "ga:sessionCount""#));
        assert!(json.contains(r#""orderType": "HISTOGRAM_BUCKET""#));
    }
}
