use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogRecord, Dimension};

/// A requested window on one operating dimension. Both bounds `None` means
/// the dimension is not constrained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeQuery {
    pub low: Option<f64>,
    pub high: Option<f64>,
}

impl RangeQuery {
    pub fn new(low: Option<f64>, high: Option<f64>) -> Self {
        Self { low, high }
    }

    pub fn between(low: f64, high: f64) -> Self {
        Self::new(Some(low), Some(high))
    }

    /// A single frequency: the query `[value, value]`.
    pub fn point(value: f64) -> Self {
        Self::between(value, value)
    }

    pub fn is_wildcard(&self) -> bool {
        self.low.is_none() && self.high.is_none()
    }

    /// Fill a missing bound with the other one, turning a half-specified
    /// query into an exact-point query.
    pub fn normalized(self) -> Self {
        match (self.low, self.high) {
            (None, Some(h)) => Self::point(h),
            (Some(l), None) => Self::point(l),
            _ => self,
        }
    }

    /// Whether the normalized query window lies inside `[low, high]`.
    /// A wildcard query is always contained.
    pub fn contained_in(&self, low: Option<f64>, high: Option<f64>) -> bool {
        let q = self.normalized();
        match (q.low, q.high, low, high) {
            (None, None, _, _) => true,
            (Some(ql), Some(qh), Some(rl), Some(rh)) => rl <= ql && qh <= rh,
            _ => false,
        }
    }

    /// Smallest window enclosing every bound given across `queries`, used to
    /// merge separate RF and LO inputs into one statistics window.
    pub fn hull(queries: &[RangeQuery]) -> Option<(f64, f64)> {
        queries
            .iter()
            .flat_map(|q| [q.low, q.high])
            .flatten()
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

/// Per-dimension windows; a record matches when every constrained dimension
/// is contained in its published operating range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub queries: Vec<(Dimension, RangeQuery)>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Criteria on the single `Frequency` dimension.
    pub fn frequency(low: Option<f64>, high: Option<f64>) -> Self {
        Self::new().with(Dimension::Frequency, RangeQuery::new(low, high))
    }

    pub fn with(mut self, dimension: Dimension, query: RangeQuery) -> Self {
        match self.queries.iter_mut().find(|(d, _)| *d == dimension) {
            Some(entry) => entry.1 = query,
            None => self.queries.push((dimension, query)),
        }
        self
    }

    pub fn matches(&self, record: &CatalogRecord) -> bool {
        self.queries.iter().all(|(dimension, query)| {
            if query.is_wildcard() {
                return true;
            }
            match record.range(*dimension) {
                Some(range) => query.contained_in(range.low, range.high),
                None => false,
            }
        })
    }
}
