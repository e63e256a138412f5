//! Mapping-sheet layout shared by mixers and amplifiers.
//!
//! Each graph owns an anchor cell (row, col) in the mapping sheet. The cell
//! two rows above the anchor and one column right holds the line count N.
//! Each of the N rows starting at the anchor describes one line in nine
//! adjacent cells:
//!
//! ```text
//! label | x sheet | x column | x first row | x last row | y sheet | y column | y first row | y last row
//! ```
//!
//! Row numbers are 1-based and inclusive, as shown in the spreadsheet.
//! Rows whose label cell holds no text are skipped.

use std::path::PathBuf;

use crate::data::loader::Sheet;
use crate::data::parser::column_index;
use crate::data::sheet_cache::SheetCache;
use crate::error::{CatalogError, Result};
use crate::state::data_series::{DataSeries, GraphData};

/// Where one axis of a line lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisRef {
    pub sheet: String,
    pub column: usize,
    pub first_row: usize,
    pub last_row: usize,
}

impl AxisRef {
    fn read(&self, sheet: &Sheet) -> Vec<f64> {
        sheet.column_values(self.column, self.first_row.saturating_sub(1), self.last_row)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRef {
    pub label: String,
    pub x: AxisRef,
    pub y: AxisRef,
}

/// The mapping sheet of one workbook.
#[derive(Debug, Clone)]
pub struct MappingTable {
    workbook: PathBuf,
    sheet: &'static str,
}

impl MappingTable {
    pub fn new(workbook: PathBuf, sheet: &'static str) -> Self {
        Self { workbook, sheet }
    }

    /// Resolve every line of the block anchored at (`row`, `col`).
    pub fn load(&self, row: usize, col: usize, sheets: &mut SheetCache) -> Result<GraphData> {
        let mapping = sheets.get(&self.workbook, self.sheet)?;
        let lines = self.line_refs(&mapping, row, col)?;

        let mut graph = GraphData::new();
        for line in lines {
            let x_sheet = sheets.get(&self.workbook, &line.x.sheet)?;
            let y_sheet = sheets.get(&self.workbook, &line.y.sheet)?;
            graph.push(DataSeries::new(line.label, line.x.read(&x_sheet), line.y.read(&y_sheet)));
        }
        Ok(graph)
    }

    /// Parse the line descriptions of one block without reading any data.
    pub fn line_refs(&self, mapping: &Sheet, row: usize, col: usize) -> Result<Vec<LineRef>> {
        let count_row = row
            .checked_sub(2)
            .ok_or_else(|| self.layout_error(row, col, "anchor row leaves no room for the line count"))?;
        let count = mapping
            .cell(count_row, col + 1)
            .as_index()
            .ok_or_else(|| self.layout_error(count_row, col + 1, "expected a line count"))?;
        // rows past the end of the sheet hold no labels
        let count = count.min(mapping.height().saturating_sub(row));

        let mut lines = Vec::with_capacity(count);
        for r in row..row + count {
            let Some(label) = mapping.cell(r, col).as_text() else {
                tracing::debug!("{:?} {}: row {r} has no label, skipped", self.workbook, self.sheet);
                continue;
            };
            lines.push(LineRef {
                label: label.to_string(),
                x: self.axis_ref(mapping, r, col + 1)?,
                y: self.axis_ref(mapping, r, col + 5)?,
            });
        }
        Ok(lines)
    }

    /// Four cells starting at `col`: sheet name, column letters, first row, last row.
    fn axis_ref(&self, mapping: &Sheet, row: usize, col: usize) -> Result<AxisRef> {
        let sheet = mapping
            .cell(row, col)
            .as_text()
            .ok_or_else(|| self.layout_error(row, col, "expected a sheet name"))?;
        let column = mapping
            .cell(row, col + 1)
            .as_text()
            .and_then(column_index)
            .ok_or_else(|| self.layout_error(row, col + 1, "expected column letters"))?;
        let first_row = mapping
            .cell(row, col + 2)
            .as_index()
            .ok_or_else(|| self.layout_error(row, col + 2, "expected a first row number"))?;
        let last_row = mapping
            .cell(row, col + 3)
            .as_index()
            .ok_or_else(|| self.layout_error(row, col + 3, "expected a last row number"))?;

        Ok(AxisRef {
            sheet: sheet.trim().to_string(),
            column,
            first_row,
            last_row,
        })
    }

    fn layout_error(&self, row: usize, col: usize, reason: &str) -> CatalogError {
        CatalogError::parse(
            format!("{} sheet {}", self.workbook.display(), self.sheet),
            format!("row {}, column {}: {reason}", row + 1, col + 1),
        )
    }
}
