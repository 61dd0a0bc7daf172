//! HTML renderer for on-screen previews
//!
//! Produces small fragments meant to be embedded in a surrounding page: a
//! `<table>` for the pivot grid and a `<pre>` block for the highlighted
//! request preview.

use super::OutputRenderer;
use crate::highlight::escape_html;
use crate::pivot::PivotData;

/// HTML renderer that produces embeddable fragments
pub struct HtmlRenderer;

impl HtmlRenderer {
    /// Create a new HTML renderer
    pub fn new() -> Self {
        Self
    }

    /// Wrap an already-highlighted request preview in its `<pre>` container
    pub fn render_request_preview(&self, highlighted: &str) -> String {
        format!(
            "<pre id=\"query-output\">{}</pre>\n",
            highlighted
        )
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputRenderer for HtmlRenderer {
    fn render(&self, data: &PivotData) -> String {
        let mut html = String::new();

        html.push_str("<table class=\"pivot-table\">\n<thead>\n<tr>");
        for header in &data.headers {
            html.push_str(&format!("<th>{}</th>", escape_html(header)));
        }
        html.push_str("</tr>\n</thead>\n<tbody>\n");

        for row in &data.rows {
            html.push_str("<tr>");
            for header in &data.headers {
                let value = row.get(header).map(String::as_str).unwrap_or_default();
                html.push_str(&format!("<td>{}</td>", escape_html(value)));
            }
            html.push_str("</tr>\n");
        }

        html.push_str("</tbody>\n</table>\n");
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_pivot_table_fragment() {
        let mut row = HashMap::new();
        row.insert("ga:country".to_string(), "<France>".to_string());
        let data = PivotData {
            headers: vec!["ga:country".to_string()],
            rows: vec![row],
        };

        let html = HtmlRenderer::new().render(&data);
        assert!(html.contains("<table class=\"pivot-table\">"));
        assert!(html.contains("<th>ga:country</th>"));
        assert!(html.contains("<td>&lt;France&gt;</td>"));
    }

    #[test]
    fn test_request_preview_wrapper() {
        let html = HtmlRenderer::new()
            .render_request_preview("<span class=\"number\">1</span>");
        assert!(html.starts_with("<pre id=\"query-output\">"));
        assert!(html.contains("<span class=\"number\">1</span>"));
        assert!(html.trim_end().ends_with("</pre>"));
    }
}
