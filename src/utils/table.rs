//! Table rendering utilities for CLI outputs.
//! Cells may carry ANSI colors; widths are measured on the visible text.

use crate::utils::colors::strip_ansi;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            width: header.width(),
        }
    }
}

pub enum Row {
    Cells(Vec<String>),
    /// One cell spanning every column.
    Spanning(Vec<String>),
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
}

fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_width(s));
    format!("{s}{}", " ".repeat(fill))
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(visible_width(cell));
        }
        self.rows.push(Row::Cells(row));
    }

    /// Add a row made of lines that span the whole table width.
    pub fn add_spanning_row(&mut self, lines: Vec<String>) {
        self.rows.push(Row::Spanning(lines));
    }

    fn total_width(&self) -> usize {
        self.columns.iter().map(|c| c.width + 1).sum::<usize>()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');
        out.push_str(&"-".repeat(self.total_width()));
        out.push('\n');

        // Rows
        for row in &self.rows {
            match row {
                Row::Cells(cells) => {
                    for (i, col) in self.columns.iter().enumerate() {
                        let cell = cells.get(i).map(String::as_str).unwrap_or("");
                        out.push_str(&pad(cell, col.width));
                        out.push(' ');
                    }
                    out.push('\n');
                }
                Row::Spanning(lines) => {
                    for line in lines {
                        out.push_str(line);
                        out.push('\n');
                    }
                }
            }
        }

        out
    }
}
