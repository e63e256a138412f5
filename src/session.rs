use std::collections::HashMap;

use crate::catalog::search::SearchCriteria;
use crate::catalog::{Catalog, CatalogRecord, ProductKind};
use crate::config::CatalogConfig;
use crate::data::loader::{ExcelSource, SheetSource};
use crate::data::sheet_cache::SheetCache;
use crate::error::{CatalogError, Result};
use crate::network::{NetworkLoader, NoNetworkReader};
use crate::processing::statistics::{self, RangeStats};
use crate::products::{self, GraphInfo};
use crate::state::component::Component;
use crate::state::data_series::GraphData;

/// Query entry point: owns the sheet cache, the loaded catalogs and every
/// component opened so far (at most one per model).
///
/// Not thread-safe; use one session per caller thread.
pub struct Session {
    config: CatalogConfig,
    sheets: SheetCache,
    networks: Box<dyn NetworkLoader>,
    catalogs: HashMap<ProductKind, Catalog>,
    components: HashMap<(ProductKind, String), Component>,
}

impl Session {
    /// Session reading workbooks with calamine and no network-file reader.
    pub fn new(config: CatalogConfig) -> Self {
        Self::with_sources(config, Box::new(ExcelSource), Box::new(NoNetworkReader))
    }

    pub fn with_sources(
        config: CatalogConfig,
        sheets: Box<dyn SheetSource>,
        networks: Box<dyn NetworkLoader>,
    ) -> Self {
        Self {
            config,
            sheets: SheetCache::new(sheets),
            networks,
            catalogs: HashMap::new(),
            components: HashMap::new(),
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn sheet_cache(&self) -> &SheetCache {
        &self.sheets
    }

    /// Use an already-built catalog instead of reading the spec table.
    pub fn insert_catalog(&mut self, catalog: Catalog) {
        self.catalogs.insert(catalog.kind(), catalog);
    }

    /// The catalog of a type, read from its spec table on first use.
    pub fn catalog(&mut self, kind: ProductKind) -> Result<&Catalog> {
        if !self.catalogs.contains_key(&kind) {
            let path = self.config.spec_path(kind);
            let sheet = self.sheets.get(&path, &self.config.spec_sheet)?;
            let catalog = Catalog::from_sheet(kind, &sheet)?;
            self.catalogs.insert(kind, catalog);
        }
        Ok(&self.catalogs[&kind])
    }

    /// Records of `kind` whose operating ranges contain the criteria windows.
    /// Reads spec data only; no component is opened.
    pub fn search(&mut self, kind: ProductKind, criteria: &SearchCriteria) -> Result<Vec<&CatalogRecord>> {
        Ok(self.catalog(kind)?.search(criteria))
    }

    pub fn graph_info(kind: ProductKind, graph: &str) -> Option<&'static GraphInfo> {
        products::graph_info(kind, graph)
    }

    /// The component of a model, opened on first use.
    pub fn component(&mut self, kind: ProductKind, model: &str) -> Result<&mut Component> {
        let key = (kind, model.to_string());
        if !self.components.contains_key(&key) {
            let record = self
                .catalog(kind)?
                .get(model)
                .cloned()
                .ok_or_else(|| unknown_model(kind, model))?;
            let component = Component::open(record, &self.config, self.networks.as_ref())?;
            self.components.insert(key.clone(), component);
        }
        self.components
            .get_mut(&key)
            .ok_or_else(|| unknown_model(kind, model))
    }

    pub fn resolve_graph(&mut self, kind: ProductKind, model: &str, graph: &str) -> Result<&GraphData> {
        self.component(kind, model)?;
        let component = self
            .components
            .get_mut(&(kind, model.to_string()))
            .ok_or_else(|| unknown_model(kind, model))?;
        component.resolve_graph(graph, &mut self.sheets)
    }

    pub fn line_labels(&mut self, kind: ProductKind, model: &str, graph: &str) -> Result<Vec<String>> {
        let data = self.resolve_graph(kind, model, graph)?;
        Ok(data.labels().into_iter().map(String::from).collect())
    }

    pub fn range_stats(
        &mut self,
        kind: ProductKind,
        model: &str,
        graph: &str,
        low: f64,
        high: f64,
    ) -> Result<RangeStats> {
        let data = self.resolve_graph(kind, model, graph)?;
        Ok(RangeStats::compute(data, low, high))
    }

    /// x-range spanned by the first series of `graph` across `models`.
    pub fn x_extent(&mut self, kind: ProductKind, models: &[&str], graph: &str) -> Result<Option<(f64, f64)>> {
        let graphs = self.resolve_all(kind, models, graph)?;
        Ok(statistics::x_extent(graphs))
    }

    /// Padded y-range of every series of `graph` across `models`, for
    /// samples strictly inside `(xmin, xmax)`.
    pub fn y_extent(
        &mut self,
        kind: ProductKind,
        models: &[&str],
        graph: &str,
        xmin: f64,
        xmax: f64,
    ) -> Result<Option<(f64, f64)>> {
        let graphs = self.resolve_all(kind, models, graph)?;
        Ok(statistics::y_extent(graphs, xmin, xmax))
    }

    fn resolve_all(&mut self, kind: ProductKind, models: &[&str], graph: &str) -> Result<Vec<&GraphData>> {
        for model in models {
            self.resolve_graph(kind, model, graph)?;
        }
        Ok(models
            .iter()
            .filter_map(|m| self.components.get(&(kind, m.to_string())))
            .filter_map(|c| c.cached_graph(graph))
            .collect())
    }
}

fn unknown_model(kind: ProductKind, model: &str) -> CatalogError {
    CatalogError::UnknownModel {
        kind,
        model: model.to_string(),
    }
}
