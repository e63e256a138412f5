use std::collections::HashMap;

use crate::catalog::CatalogRecord;
use crate::config::CatalogConfig;
use crate::data::sheet_cache::SheetCache;
use crate::error::Result;
use crate::network::ports::PortRoleMap;
use crate::network::NetworkLoader;
use crate::processing::statistics::RangeStats;
use crate::products::{self, Product};
use crate::state::data_series::GraphData;

/// A live catalog model with its resolved graphs.
///
/// Each graph is resolved at most once; later requests return the stored
/// series untouched.
pub struct Component {
    record: CatalogRecord,
    product: Box<dyn Product>,
    graphs: HashMap<String, GraphData>,
}

impl Component {
    pub fn new(record: CatalogRecord, product: Box<dyn Product>) -> Self {
        Self {
            record,
            product,
            graphs: HashMap::new(),
        }
    }

    pub fn open(
        record: CatalogRecord,
        config: &CatalogConfig,
        networks: &dyn NetworkLoader,
    ) -> Result<Self> {
        let product = products::open(&record, config, networks)?;
        Ok(Self::new(record, product))
    }

    pub fn record(&self) -> &CatalogRecord {
        &self.record
    }

    pub fn model(&self) -> &str {
        self.product.model()
    }

    pub fn port_roles(&self) -> Option<&PortRoleMap> {
        self.product.port_roles()
    }

    /// The graph if it has already been resolved.
    pub fn cached_graph(&self, graph: &str) -> Option<&GraphData> {
        self.graphs.get(graph)
    }

    pub fn resolve_graph(&mut self, graph: &str, sheets: &mut SheetCache) -> Result<&GraphData> {
        if !self.graphs.contains_key(graph) {
            let data = self.product.load_graph(graph, sheets)?;
            tracing::debug!("{}: resolved {graph:?} with {} series", self.model(), data.len());
            self.graphs.insert(graph.to_string(), data);
        }
        Ok(&self.graphs[graph])
    }

    /// Series labels of a graph, in line order.
    pub fn line_labels(&mut self, graph: &str, sheets: &mut SheetCache) -> Result<Vec<String>> {
        let data = self.resolve_graph(graph, sheets)?;
        Ok(data.labels().into_iter().map(String::from).collect())
    }

    pub fn range_stats(
        &mut self,
        graph: &str,
        low: f64,
        high: f64,
        sheets: &mut SheetCache,
    ) -> Result<RangeStats> {
        let data = self.resolve_graph(graph, sheets)?;
        Ok(RangeStats::compute(data, low, high))
    }
}
