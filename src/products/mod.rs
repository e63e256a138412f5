//! Per-type graph resolution.
//!
//! Mixers and amplifiers read their curves through a mapping sheet
//! ([`mapping`]); couplers, baluns and power dividers compute theirs from
//! network-parameter traces ([`passive`]).

pub mod amplifier;
pub mod balun;
pub mod coupler;
pub mod mapping;
pub mod mixer;
pub mod passive;
pub mod power_divider;

use crate::catalog::{CatalogRecord, ProductKind};
use crate::config::CatalogConfig;
use crate::data::sheet_cache::SheetCache;
use crate::error::{CatalogError, Result};
use crate::network::ports::PortRoleMap;
use crate::network::NetworkLoader;
use crate::state::data_series::GraphData;

/// Name and axis labels of a graph a product type publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphInfo {
    pub name: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub x_unit: &'static str,
    pub y_unit: &'static str,
}

impl GraphInfo {
    pub const fn new(
        name: &'static str,
        x_label: &'static str,
        y_label: &'static str,
        x_unit: &'static str,
        y_unit: &'static str,
    ) -> Self {
        Self {
            name,
            x_label,
            y_label,
            x_unit,
            y_unit,
        }
    }
}

/// Graphs of a product type, in display order.
pub fn graphs(kind: ProductKind) -> &'static [GraphInfo] {
    match kind {
        ProductKind::Mixer => mixer::GRAPHS,
        ProductKind::Amplifier => amplifier::GRAPHS,
        ProductKind::Coupler => coupler::GRAPHS,
        ProductKind::Balun => balun::GRAPHS,
        ProductKind::PowerDivider => power_divider::GRAPHS,
    }
}

pub fn graph_info(kind: ProductKind, graph: &str) -> Option<&'static GraphInfo> {
    graphs(kind).iter().find(|g| g.name == graph)
}

pub(crate) fn unknown_graph(kind: ProductKind, graph: &str) -> CatalogError {
    CatalogError::UnknownGraph {
        kind,
        graph: graph.to_string(),
    }
}

/// Graph source of one catalog model.
pub trait Product {
    fn kind(&self) -> ProductKind;

    fn model(&self) -> &str;

    /// Produce every series of `graph`. Not memoized here; see
    /// [`crate::state::component::Component`].
    fn load_graph(&self, graph: &str, sheets: &mut SheetCache) -> Result<GraphData>;

    /// Inferred port roles, for network-backed types.
    fn port_roles(&self) -> Option<&PortRoleMap> {
        None
    }
}

/// Construct the product behind a record: mapped types only remember their
/// workbook, network-backed types open their file and infer port roles.
pub fn open(
    record: &CatalogRecord,
    config: &CatalogConfig,
    networks: &dyn NetworkLoader,
) -> Result<Box<dyn Product>> {
    let path = config.source_path(record.kind, &record.source);
    let model = record.model.as_str();
    tracing::info!("Opening {} {model} from {:?}", record.kind, path);

    let product: Box<dyn Product> = match record.kind {
        ProductKind::Mixer => Box::new(mixer::Mixer::new(model, path)),
        ProductKind::Amplifier => Box::new(amplifier::Amplifier::new(model, path)),
        ProductKind::Coupler => Box::new(coupler::Coupler::new(model, networks.open(&path)?)?),
        ProductKind::Balun => Box::new(balun::Balun::new(model, networks.open(&path)?)?),
        ProductKind::PowerDivider => {
            Box::new(power_divider::PowerDivider::new(model, networks.open(&path)?)?)
        }
    };

    Ok(product)
}
