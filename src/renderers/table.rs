use super::OutputRenderer;
use crate::pivot::PivotData;
use comfy_table::{
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Attribute, Cell, ContentArrangement, Table,
};

/// Builder for consistently styled terminal tables
pub struct TableBuilder {
    table: Table,
}

impl TableBuilder {
    /// Create a new table builder with default styling
    pub fn new() -> Self {
        let mut table = Table::new();

        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic);

        Self { table }
    }

    /// Set table headers, rendered bold
    pub fn headers<I, S>(&mut self, headers: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let header_cells: Vec<Cell> = headers
            .into_iter()
            .map(|h| Cell::new(h.into()).add_attribute(Attribute::Bold))
            .collect();

        self.table.set_header(header_cells);
        self
    }

    /// Add a row to the table
    pub fn row<I, S>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row_cells: Vec<Cell> = cells.into_iter().map(|cell| Cell::new(cell.into())).collect();

        self.table.add_row(row_cells);
        self
    }

    /// Build and return the formatted table as a string
    pub fn build(self) -> String {
        self.table.to_string()
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the pivot table as a terminal grid
pub struct TableRenderer;

impl TableRenderer {
    /// Create a new table renderer
    pub fn new() -> Self {
        Self
    }
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputRenderer for TableRenderer {
    fn render(&self, data: &PivotData) -> String {
        let mut builder = TableBuilder::new();
        builder.headers(data.headers.iter().cloned());

        // Cells are looked up per header so short rows render blank columns.
        for row in &data.rows {
            builder.row(
                data.headers
                    .iter()
                    .map(|header| row.get(header).cloned().unwrap_or_default()),
            );
        }

        builder.build()
    }
}
