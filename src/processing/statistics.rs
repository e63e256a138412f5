use serde::Serialize;

use crate::state::data_series::{DataSeries, GraphData};

/// Min / max / median of one series over a frequency window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindowStats {
    pub min: f64,
    pub max: f64,
    pub median: f64,
}

impl WindowStats {
    /// Reduce y-values to min/max/median, ignoring NaN.
    pub fn compute(values: &[f64]) -> Option<Self> {
        let mut vals: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
        if vals.is_empty() {
            return None;
        }

        // sort_by is a stable merge sort
        vals.sort_by(|a, b| a.total_cmp(b));
        let count = vals.len();
        let median = if count % 2 == 0 {
            (vals[count / 2 - 1] + vals[count / 2]) / 2.0
        } else {
            vals[count / 2]
        };

        Some(WindowStats {
            min: vals[0],
            max: vals[count - 1],
            median,
        })
    }

    /// Statistics of the y-values whose x lies in `[low, high]`.
    ///
    /// x is assumed ascending: the scan stops at the first x above `high`.
    pub fn over_window(series: &DataSeries, low: f64, high: f64) -> Option<Self> {
        let mut in_range = Vec::new();
        for (x, y) in series.points() {
            if low <= x && x <= high {
                in_range.push(y);
            } else if x > high {
                break;
            }
        }
        Self::compute(&in_range)
    }
}

/// Window statistics of a graph: the first series, and the second one when
/// the graph has exactly two series. Both are `None` when the primary series
/// has no samples in the window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RangeStats {
    pub primary: Option<WindowStats>,
    pub secondary: Option<WindowStats>,
}

impl RangeStats {
    pub const EMPTY: RangeStats = RangeStats {
        primary: None,
        secondary: None,
    };

    pub fn compute(graph: &GraphData, low: f64, high: f64) -> Self {
        let Some(first) = graph.first() else {
            return Self::EMPTY;
        };
        let Some(primary) = WindowStats::over_window(first, low, high) else {
            return Self::EMPTY;
        };

        let secondary = if graph.len() == 2 {
            WindowStats::over_window(&graph.series[1], low, high)
        } else {
            None
        };

        RangeStats {
            primary: Some(primary),
            secondary,
        }
    }

    /// Flatten to `(min, max, median, min_b, max_b, median_b)`.
    pub fn as_tuple(
        &self,
    ) -> (
        Option<f64>,
        Option<f64>,
        Option<f64>,
        Option<f64>,
        Option<f64>,
        Option<f64>,
    ) {
        let a = self.primary;
        let b = self.secondary;
        (
            a.map(|s| s.min),
            a.map(|s| s.max),
            a.map(|s| s.median),
            b.map(|s| s.min),
            b.map(|s| s.max),
            b.map(|s| s.median),
        )
    }
}

/// Smallest and largest x across the first series of each graph.
pub fn x_extent<'a>(graphs: impl IntoIterator<Item = &'a GraphData>) -> Option<(f64, f64)> {
    let mut extent: Option<(f64, f64)> = None;
    for graph in graphs {
        let Some(series) = graph.first() else { continue };
        for &x in &series.x {
            extent = Some(match extent {
                None => (x, x),
                Some((lo, hi)) => (lo.min(x), hi.max(x)),
            });
        }
    }
    extent
}

/// Fraction of the y-span added above and below by [`y_extent`].
pub const Y_PADDING: f64 = 0.1;

/// Smallest and largest y over every series, for samples with x strictly
/// inside `(xmin, xmax)`, padded by [`Y_PADDING`] of the span on both sides.
pub fn y_extent<'a>(
    graphs: impl IntoIterator<Item = &'a GraphData>,
    xmin: f64,
    xmax: f64,
) -> Option<(f64, f64)> {
    let mut extent: Option<(f64, f64)> = None;
    for graph in graphs {
        for series in &graph.series {
            for (x, y) in series.points() {
                if xmin < x && x < xmax && !y.is_nan() {
                    extent = Some(match extent {
                        None => (y, y),
                        Some((lo, hi)) => (lo.min(y), hi.max(y)),
                    });
                }
            }
        }
    }
    extent.map(|(lo, hi)| {
        let pad = (hi - lo) * Y_PADDING;
        (lo - pad, hi + pad)
    })
}
