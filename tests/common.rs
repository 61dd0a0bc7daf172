//! Shared fixtures for integration tests

use request_composer::{ReportResponse, RequestParams};

/// A realistic saved `reports:batchGet` response with one pivot header
pub const PIVOT_RESPONSE_JSON: &str = r#"{
  "reports": [
    {
      "columnHeader": {
        "dimensions": ["ga:country", "ga:city"],
        "metricHeader": {
          "metricHeaderEntries": [
            {"name": "ga:sessions", "type": "INTEGER"}
          ],
          "pivotHeaders": [
            {
              "pivotHeaderEntries": [
                {
                  "dimensionNames": ["ga:browser"],
                  "dimensionValues": ["Chrome"],
                  "metric": {"name": "ga:pageviews", "type": "INTEGER"}
                },
                {
                  "dimensionNames": ["ga:browser"],
                  "dimensionValues": ["Firefox"],
                  "metric": {"name": "ga:pageviews", "type": "INTEGER"}
                }
              ],
              "totalPivotGroupsCount": 2
            }
          ]
        }
      },
      "data": {
        "rows": [
          {
            "dimensions": ["France", "Paris"],
            "metrics": [
              {
                "values": ["12"],
                "pivotValueRegions": [{"values": ["7", "5"]}]
              }
            ]
          },
          {
            "dimensions": ["Spain", "Madrid"],
            "metrics": [
              {
                "values": ["30"],
                "pivotValueRegions": [{"values": ["20", "10"]}]
              }
            ]
          }
        ],
        "rowCount": 2
      }
    }
  ]
}"#;

/// A response whose report matched no rows
pub const EMPTY_RESPONSE_JSON: &str = r#"{
  "reports": [
    {
      "columnHeader": {
        "metricHeader": {
          "metricHeaderEntries": [{"name": "ga:sessions", "type": "INTEGER"}]
        }
      },
      "data": {"rowCount": 0}
    }
  ]
}"#;

pub fn pivot_response() -> ReportResponse {
    ReportResponse::from_json(PIVOT_RESPONSE_JSON).expect("fixture must parse")
}

pub fn empty_response() -> ReportResponse {
    ReportResponse::from_json(EMPTY_RESPONSE_JSON).expect("fixture must parse")
}

pub fn sample_params() -> RequestParams {
    RequestParams {
        view_id: "999".to_string(),
        start_date: "2020-01-01".to_string(),
        end_date: "2020-02-01".to_string(),
        dimensions: None,
    }
}
