#![allow(dead_code)]

use std::cell::Cell as Counter;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use rfcatalog::data::loader::{Cell, Sheet, SheetSource};
use rfcatalog::{CatalogError, Result};

/// Sheets held in memory, counting every read.
#[derive(Default)]
pub struct MemorySource {
    sheets: HashMap<(PathBuf, String), Sheet>,
    pub reads: Rc<Counter<usize>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sheet(mut self, file: &str, name: &str, sheet: Sheet) -> Self {
        self.sheets.insert((PathBuf::from(file), name.to_string()), sheet);
        self
    }
}

impl SheetSource for MemorySource {
    fn read_sheet(&self, file: &Path, sheet: &str) -> Result<Sheet> {
        self.reads.set(self.reads.get() + 1);
        self.sheets
            .get(&(file.to_path_buf(), sheet.to_string()))
            .cloned()
            .ok_or_else(|| CatalogError::ParseFailure {
                origin: file.display().to_string(),
                reason: format!("no sheet {sheet}"),
            })
    }
}

pub fn text(s: &str) -> Cell {
    Cell::Text(s.to_string())
}

pub fn num(v: f64) -> Cell {
    Cell::Number(v)
}

/// A sheet with the given cells set at zero-based (row, col); the rest empty.
pub fn sparse_sheet(cells: Vec<(usize, usize, Cell)>) -> Sheet {
    let height = cells.iter().map(|(r, _, _)| r + 1).max().unwrap_or(0);
    let width = cells.iter().map(|(_, c, _)| c + 1).max().unwrap_or(0);
    let mut rows = vec![vec![Cell::Empty; width]; height];
    for (r, c, cell) in cells {
        rows[r][c] = cell;
    }
    Sheet::from_rows(rows)
}

/// A sheet from dense rows.
pub fn grid(rows: Vec<Vec<Cell>>) -> Sheet {
    Sheet::from_rows(rows)
}

/// One mapping row at `row`, starting at `col`.
pub fn mapping_row(
    row: usize,
    col: usize,
    label: Cell,
    x: (&str, &str, usize, usize),
    y: (&str, &str, usize, usize),
) -> Vec<(usize, usize, Cell)> {
    vec![
        (row, col, label),
        (row, col + 1, text(x.0)),
        (row, col + 2, text(x.1)),
        (row, col + 3, num(x.2 as f64)),
        (row, col + 4, num(x.3 as f64)),
        (row, col + 5, text(y.0)),
        (row, col + 6, text(y.1)),
        (row, col + 7, num(y.2 as f64)),
        (row, col + 8, num(y.3 as f64)),
    ]
}

/// Data sheet: header row, then frequency in A and two traces in B and C.
pub fn data_sheet() -> Sheet {
    grid(vec![
        vec![text("Freq"), text("+25C"), text("-40C")],
        vec![num(2.0), num(10.0), num(9.0)],
        vec![num(4.0), num(11.0), num(9.5)],
        vec![num(6.0), num(12.0), num(10.0)],
    ])
}

pub fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 1e-9, "{actual:?} vs {expected:?}");
    }
}
