use serde::{Deserialize, Serialize};

/// One labeled curve: x is frequency in GHz (ascending), y the metric value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSeries {
    pub label: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl DataSeries {
    pub fn new(label: impl Into<String>, x: Vec<f64>, y: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            x,
            y,
        }
    }

    pub fn point_count(&self) -> usize {
        self.x.len().min(self.y.len())
    }

    /// (x, y) pairs, truncated to the shorter axis.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// Every series resolved for one graph of one component, in insertion order.
/// The order is the spreadsheet row order or the fixed declaration order of
/// the product type, and it governs line order when the graph is drawn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
    pub series: Vec<DataSeries>,
}

impl GraphData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a series. A label that is already present is replaced in place,
    /// keeping its original position.
    pub fn push(&mut self, series: DataSeries) {
        match self.series.iter_mut().find(|s| s.label == series.label) {
            Some(existing) => *existing = series,
            None => self.series.push(series),
        }
    }

    pub fn with(mut self, series: DataSeries) -> Self {
        self.push(series);
        self
    }

    pub fn labels(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.label.as_str()).collect()
    }

    pub fn get(&self, label: &str) -> Option<&DataSeries> {
        self.series.iter().find(|s| s.label == label)
    }

    pub fn first(&self) -> Option<&DataSeries> {
        self.series.first()
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_label_keeps_position() {
        let mut graph = GraphData::new()
            .with(DataSeries::new("a", vec![1.0], vec![1.0]))
            .with(DataSeries::new("b", vec![1.0], vec![2.0]));
        graph.push(DataSeries::new("a", vec![1.0], vec![3.0]));

        assert_eq!(graph.labels(), vec!["a", "b"]);
        assert_eq!(graph.get("a").map(|s| s.y[0]), Some(3.0));
    }
}
