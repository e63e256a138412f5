use std::path::Path;

use crate::data::parser;
use crate::error::{CatalogError, Result};

/// One spreadsheet cell, reduced to the shapes the catalog cares about.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

static EMPTY: Cell = Cell::Empty;

impl Cell {
    /// The cell's text, if it holds non-empty text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) if !s.trim().is_empty() => Some(s.as_str()),
            _ => None,
        }
    }

    /// Numeric value of the cell. Text holding a number is parsed.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(v) => Some(*v),
            Cell::Text(s) => parser::parse_number(s),
            _ => None,
        }
    }

    /// Non-negative integral value, used for row numbers and line counts.
    pub fn as_index(&self) -> Option<usize> {
        let v = self.as_f64()?;
        if v.is_finite() && v >= 0.0 && v.fract() == 0.0 {
            Some(v as usize)
        } else {
            None
        }
    }
}

/// A headerless sheet in absolute coordinates: `cell(0, 0)` is A1.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    rows: Vec<Vec<Cell>>,
}

impl Sheet {
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Cell at a zero-based (row, col); out-of-range positions read as empty.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY)
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Values of one column over the half-open row range `[start, end)`,
    /// clamped to the sheet. Non-numeric cells become NaN.
    pub fn column_values(&self, col: usize, start: usize, end: usize) -> Vec<f64> {
        let end = end.min(self.rows.len());
        if start >= end {
            return Vec::new();
        }
        (start..end)
            .map(|row| self.cell(row, col).as_f64().unwrap_or(f64::NAN))
            .collect()
    }
}

/// Anything that can turn (file, sheet name) into a parsed [`Sheet`].
pub trait SheetSource {
    fn read_sheet(&self, file: &Path, sheet: &str) -> Result<Sheet>;
}

/// Reads `.xlsx` / `.xls` / `.ods` workbooks through calamine.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExcelSource;

impl SheetSource for ExcelSource {
    fn read_sheet(&self, file: &Path, sheet: &str) -> Result<Sheet> {
        use calamine::{open_workbook_auto, Data, Reader};

        let mut workbook = open_workbook_auto(file)
            .map_err(|e| CatalogError::parse(file.display(), format!("cannot open workbook: {e}")))?;

        let range = workbook
            .worksheet_range(sheet)
            .map_err(|e| CatalogError::parse(file.display(), format!("cannot read sheet {sheet:?}: {e}")))?;

        // calamine trims leading empty rows/columns; pad them back so indices stay absolute.
        let (row_offset, col_offset) = range
            .start()
            .map(|(r, c)| (r as usize, c as usize))
            .unwrap_or((0, 0));

        let mut rows: Vec<Vec<Cell>> = vec![Vec::new(); row_offset];
        for row in range.rows() {
            let mut cells = vec![Cell::Empty; col_offset];
            cells.extend(row.iter().map(|cell| match cell {
                Data::Empty => Cell::Empty,
                Data::String(s) => Cell::Text(s.clone()),
                Data::Float(f) => Cell::Number(*f),
                Data::Int(i) => Cell::Number(*i as f64),
                Data::Bool(b) => Cell::Bool(*b),
                Data::DateTime(dt) => Cell::Number(dt.as_f64()),
                Data::DateTimeIso(s) => Cell::Text(s.clone()),
                Data::DurationIso(s) => Cell::Text(s.clone()),
                Data::Error(_) => Cell::Empty,
            }));
            rows.push(cells);
        }

        tracing::debug!("Parsed sheet {sheet:?} of {:?}: {} rows", file, rows.len());
        Ok(Sheet::from_rows(rows))
    }
}
