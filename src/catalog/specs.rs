use std::collections::HashMap;

use crate::catalog::{Catalog, CatalogRecord, OperatingRange, ProductKind};
use crate::data::loader::{Cell, Sheet};
use crate::error::{CatalogError, Result};

impl Catalog {
    /// Build a catalog from a spec table: header names in row 0, the model
    /// id in column 0, one model per following row. Rows without a model id
    /// are skipped.
    pub fn from_sheet(kind: ProductKind, sheet: &Sheet) -> Result<Self> {
        let header: HashMap<String, usize> = sheet
            .rows()
            .first()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter_map(|(i, c)| c.as_text().map(|t| (t.trim().to_string(), i)))
                    .collect()
            })
            .unwrap_or_default();

        let source_col = *header.get(kind.source_column()).ok_or_else(|| {
            CatalogError::parse(
                format!("{kind} spec table"),
                format!("missing {:?} column", kind.source_column()),
            )
        })?;

        let number = |row: usize, column: &str| -> Option<f64> {
            header
                .get(column)
                .and_then(|&col| sheet.cell(row, col).as_f64())
                .filter(|v| !v.is_nan())
        };

        let mut records = Vec::new();
        for row in 1..sheet.height() {
            let Some(model) = model_id(sheet.cell(row, 0)) else {
                continue;
            };
            let source = match sheet.cell(row, source_col) {
                Cell::Text(s) => s.trim().to_string(),
                other => model_id(other).unwrap_or_default(),
            };

            let ranges = kind
                .dimensions()
                .iter()
                .map(|&d| {
                    let (lo, hi) = d.columns();
                    (
                        d,
                        OperatingRange {
                            low: number(row, lo),
                            high: number(row, hi),
                        },
                    )
                })
                .collect();

            let specs = kind
                .scalar_columns()
                .iter()
                .map(|&c| (c.to_string(), number(row, c)))
                .collect();

            records.push(CatalogRecord {
                model,
                kind,
                source,
                ranges,
                specs,
            });
        }

        tracing::info!("Loaded {} {kind} records", records.len());
        Ok(Catalog::from_records(kind, records))
    }
}

fn model_id(cell: &Cell) -> Option<String> {
    match cell {
        Cell::Text(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Cell::Number(v) if v.fract() == 0.0 => Some(format!("{}", *v as i64)),
        Cell::Number(v) => Some(v.to_string()),
        _ => None,
    }
}
