use std::io::Write;

use crate::error::{CatalogError, Result};
use crate::state::data_series::GraphData;

/// Write a graph as long-form CSV: a `label,x,y` header, then one row per
/// sample, series in line order. NaN samples are written as empty cells.
pub fn write_csv<W: Write>(graph: &GraphData, writer: W) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(["label", "x", "y"])?;

    for series in &graph.series {
        for (x, y) in series.points() {
            let (x, y) = (format_value(x), format_value(y));
            out.write_record([series.label.as_str(), x.as_str(), y.as_str()])?;
        }
    }

    out.flush().map_err(|e| CatalogError::Csv(e.into()))?;
    Ok(())
}

fn format_value(v: f64) -> String {
    if v.is_finite() {
        format!("{v}")
    } else {
        String::new()
    }
}
