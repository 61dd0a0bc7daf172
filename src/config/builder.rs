use crate::config::RequestParams;
use crate::error::Result;

/// Builder for RequestParams to improve API ergonomics
#[derive(Debug, Default)]
pub struct RequestParamsBuilder {
    view_id: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    dimensions: Option<String>,
}

impl RequestParamsBuilder {
    /// Create a new params builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the view id
    #[must_use]
    pub fn view_id<S: Into<String>>(mut self, view_id: S) -> Self {
        self.view_id = Some(view_id.into());
        self
    }

    /// Set the reporting date range
    #[must_use]
    pub fn date_range<S: Into<String>>(mut self, start_date: S, end_date: S) -> Self {
        self.start_date = Some(start_date.into());
        self.end_date = Some(end_date.into());
        self
    }

    /// Set the comma-separated dimensions string
    #[must_use]
    pub fn dimensions<S: Into<String>>(mut self, dimensions: S) -> Self {
        self.dimensions = Some(dimensions.into());
        self
    }

    /// Build validated request parameters
    pub fn build(self) -> Result<RequestParams> {
        let params = RequestParams {
            view_id: self.view_id.unwrap_or_default(),
            start_date: self.start_date.unwrap_or_default(),
            end_date: self.end_date.unwrap_or_default(),
            dimensions: self.dimensions,
        };
        params.validate()?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_produces_valid_params() {
        let params = RequestParamsBuilder::new()
            .view_id("999")
            .date_range("2020-01-01", "2020-02-01")
            .dimensions("ga:country,ga:city")
            .build()
            .unwrap();

        assert_eq!(params.view_id, "999");
        assert_eq!(params.start_date, "2020-01-01");
        assert_eq!(params.dimensions.as_deref(), Some("ga:country,ga:city"));
    }

    #[test]
    fn test_builder_rejects_missing_required_fields() {
        let result = RequestParamsBuilder::new().view_id("999").build();
        assert!(result.is_err());
    }
}
