use crate::catalog::ProductKind;
use crate::data::sheet_cache::SheetCache;
use crate::error::Result;
use crate::network::ports::{infer_roles, PortLayout, PortRole, PortRoleMap, RoleKeyword};
use crate::network::{NetworkData, NetworkParameters, ParamFormat};
use crate::processing::math_ops::DerivedMetric;
use crate::products::passive::Passive;
use crate::products::{unknown_graph, GraphInfo, Product};
use crate::state::data_series::GraphData;

pub const RETURN_LOSS: &str = "Common Port Return Loss";
pub const INSERTION_LOSS: &str = "Insertion Loss as a mode converter";
pub const ISOLATION: &str = "Isolation";
pub const AMPLITUDE_BALANCE: &str = "Amplitude Balance";
pub const PHASE_BALANCE: &str = "Phase Balance";

/// Balun amplitude balance is published in centibels.
pub const AMPLITUDE_BALANCE_SCALE: f64 = 10.0;

pub const GRAPHS: &[GraphInfo] = &[
    GraphInfo::new(RETURN_LOSS, "Frequency", RETURN_LOSS, "GHz", "dB"),
    GraphInfo::new(INSERTION_LOSS, "Frequency", INSERTION_LOSS, "GHz", "dB"),
    GraphInfo::new(ISOLATION, "Frequency", ISOLATION, "GHz", "dB"),
    GraphInfo::new(AMPLITUDE_BALANCE, "Frequency", AMPLITUDE_BALANCE, "GHz", "cB"),
    GraphInfo::new(PHASE_BALANCE, "Frequency", PHASE_BALANCE, "GHz", "degrees"),
];

// "0" also matches inside "180"; headers list the 0-degree output first.
pub const LAYOUT: PortLayout = PortLayout {
    marker: "Balun",
    line_keywords: &["output", "common"],
    roles: &[
        RoleKeyword { role: PortRole::Common, keyword: "common" },
        RoleKeyword { role: PortRole::Output180, keyword: "180" },
        RoleKeyword { role: PortRole::Output0, keyword: "0" },
    ],
};

pub struct Balun {
    inner: Passive,
}

impl Balun {
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

impl Product for Balun {
    fn kind(&self) -> ProductKind {
        ProductKind::Balun
    }

    fn model(&self) -> &str {
        &self.inner.model
    }

    fn port_roles(&self) -> Option<&PortRoleMap> {
        Some(&self.inner.ports)
    }

    fn load_graph(&self, graph: &str, _sheets: &mut SheetCache) -> Result<GraphData> {
        use PortRole::{Common, Output0, Output180};
        let p = &self.inner;

        match graph {
            RETURN_LOSS => p.return_loss(&[("Common", Common), ("Out 0", Output0), ("Out 180", Output180)]),
            INSERTION_LOSS => {
                let out0 = p.trace(Common, Output0, ParamFormat::Db)?;
                let out180 = p.trace(Common, Output180, ParamFormat::Db)?;
                Ok(GraphData::new()
                    .with(p.filtered_series("Out 0", out0))
                    .with(p.filtered_series("Out 180", out180)))
            }
            ISOLATION => {
                let iso = p.trace(Output0, Output180, ParamFormat::Db)?;
                Ok(GraphData::new().with(p.series(ISOLATION, iso)))
            }
            AMPLITUDE_BALANCE => {
                let y = p.derived(
                    AMPLITUDE_BALANCE,
                    (Common, Output0),
                    (Common, Output180),
                    ParamFormat::Db,
                    DerivedMetric::AmplitudeBalance { scale: AMPLITUDE_BALANCE_SCALE },
                )?;
                Ok(GraphData::new().with(p.series(AMPLITUDE_BALANCE, y)))
            }
            PHASE_BALANCE => {
                let y = p.derived(
                    PHASE_BALANCE,
                    (Common, Output0),
                    (Common, Output180),
                    ParamFormat::Degrees,
                    DerivedMetric::PhaseBalance,
                )?;
                Ok(GraphData::new().with(p.series(PHASE_BALANCE, y)))
            }
            _ => Err(unknown_graph(self.kind(), graph)),
        }
    }
}
