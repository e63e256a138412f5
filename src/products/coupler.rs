use crate::catalog::ProductKind;
use crate::data::sheet_cache::SheetCache;
use crate::error::Result;
use crate::network::ports::{infer_roles, PortLayout, PortRole, PortRoleMap, RoleKeyword};
use crate::network::{NetworkData, NetworkParameters, ParamFormat};
use crate::processing::math_ops::DerivedMetric;
use crate::products::passive::Passive;
use crate::products::{unknown_graph, GraphInfo, Product};
use crate::state::data_series::GraphData;

pub const RETURN_LOSS: &str = "Return Loss";
pub const INSERTION_LOSS: &str = "Insertion Loss";
pub const DIRECTIVITY: &str = "Directivity";
pub const COUPLED_RATIO: &str = "Coupled Ratio";

pub const GRAPHS: &[GraphInfo] = &[
    GraphInfo::new(RETURN_LOSS, "Frequency", "Return Loss", "GHz", "dB"),
    GraphInfo::new(INSERTION_LOSS, "Frequency", "Insertion Loss", "GHz", "dB"),
    GraphInfo::new(DIRECTIVITY, "Frequency", "Directivity", "GHz", "dB"),
    GraphInfo::new(COUPLED_RATIO, "Frequency", "Coupled Ratio", "GHz", "dB"),
];

pub const LAYOUT: PortLayout = PortLayout {
    marker: "Coupler",
    line_keywords: &["input", "output", "coupled"],
    roles: &[
        RoleKeyword { role: PortRole::Coupled, keyword: "coupled" },
        RoleKeyword { role: PortRole::Input, keyword: "input" },
        RoleKeyword { role: PortRole::Output, keyword: "output" },
    ],
};

pub struct Coupler {
    inner: Passive,
}

impl Coupler {
    pub fn new(model: &str, params: Box<dyn NetworkParameters>) -> Result<Self> {
        let network = NetworkData::new(model, params);
        let ports = infer_roles(model, network.comments(), &LAYOUT)?;
        Ok(Self {
            inner: Passive {
                model: model.to_string(),
                network,
                ports,
            },
        })
    }
}

impl Product for Coupler {
    fn kind(&self) -> ProductKind {
        ProductKind::Coupler
    }

    fn model(&self) -> &str {
        &self.inner.model
    }

    fn port_roles(&self) -> Option<&PortRoleMap> {
        Some(&self.inner.ports)
    }

    fn load_graph(&self, graph: &str, _sheets: &mut SheetCache) -> Result<GraphData> {
        use PortRole::{Coupled, Input, Output};
        let p = &self.inner;

        match graph {
            RETURN_LOSS => p.return_loss(&[("Coupled", Coupled), ("Input", Input), ("Output", Output)]),
            INSERTION_LOSS => {
                let il = p.trace(Output, Input, ParamFormat::Db)?;
                Ok(GraphData::new().with(p.series(INSERTION_LOSS, il)))
            }
            DIRECTIVITY => {
                // coupling S(c,in) against isolation S(c,out)
                let y = p.derived(
                    DIRECTIVITY,
                    (Coupled, Input),
                    (Coupled, Output),
                    ParamFormat::Db,
                    DerivedMetric::Directivity,
                )?;
                Ok(GraphData::new().with(p.series(DIRECTIVITY, y)))
            }
            COUPLED_RATIO => {
                let y = p.derived(
                    COUPLED_RATIO,
                    (Coupled, Input),
                    (Output, Input),
                    ParamFormat::Db,
                    DerivedMetric::CoupledRatio,
                )?;
                Ok(GraphData::new().with(p.series(COUPLED_RATIO, y)))
            }
            _ => Err(unknown_graph(self.kind(), graph)),
        }
    }
}
