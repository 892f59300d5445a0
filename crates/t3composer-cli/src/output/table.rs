//! Table formatting utilities.

use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table as ComfyTable, presets};

/// Table builder for formatted output
pub struct Table {
    inner: ComfyTable,
    colors_enabled: bool,
}

impl std::fmt::Debug for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("rows", &self.inner.row_count())
            .finish()
    }
}

impl Table {
    /// Create a borderless table
    pub fn new() -> Self {
        let colors_enabled = crate::output::colors_enabled();
        let mut table = ComfyTable::new();
        table.load_preset(presets::NOTHING);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        Self {
            inner: table,
            colors_enabled,
        }
    }

    /// Set the table headers
    pub fn headers<I, T>(&mut self, headers: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let cells: Vec<Cell> = headers
            .into_iter()
            .map(|h| {
                let mut cell = Cell::new(h.as_ref());
                if self.colors_enabled {
                    cell = cell.add_attribute(Attribute::Bold);
                }
                cell
            })
            .collect();
        self.inner.set_header(cells);
        self
    }

    /// Add a row to the table
    pub fn row<I, T>(&mut self, row: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: std::fmt::Display,
    {
        self.inner.add_row(row);
        self
    }

    /// Add a row with styled cells
    pub fn styled_row(&mut self, cells: Vec<Cell>) -> &mut Self {
        self.inner.add_row(cells);
        self
    }

    /// Create an error-styled cell
    pub fn error_cell(&self, text: impl std::fmt::Display) -> Cell {
        self.colored(text, Color::Red)
    }

    /// Create a warning-styled cell
    pub fn warning_cell(&self, text: impl std::fmt::Display) -> Cell {
        self.colored(text, Color::Yellow)
    }

    /// Create a dim-styled cell
    pub fn dim_cell(&self, text: impl std::fmt::Display) -> Cell {
        self.colored(text, Color::DarkGrey)
    }

    fn colored(&self, text: impl std::fmt::Display, color: Color) -> Cell {
        let cell = Cell::new(text);
        if self.colors_enabled {
            cell.fg(color)
        } else {
            cell
        }
    }

    /// Print the table to stdout
    pub fn print(&self) {
        println!("{}", self.inner);
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}
