use crate::catalog::ProductKind;
use crate::data::sheet_cache::SheetCache;
use crate::error::Result;
use crate::network::ports::{infer_divider_roles, PortRole, PortRoleMap};
use crate::network::{NetworkData, NetworkParameters, ParamFormat};
use crate::processing::math_ops::DerivedMetric;
use crate::products::passive::Passive;
use crate::products::{unknown_graph, GraphInfo, Product};
use crate::state::data_series::{DataSeries, GraphData};

pub const RETURN_LOSS: &str = "Return Loss";
pub const INSERTION_LOSS: &str = "Insertion Loss";
pub const ISOLATION: &str = "Isolation";
pub const AMPLITUDE_BALANCE: &str = "Amplitude Balance";
pub const PHASE_BALANCE: &str = "Phase Balance";

pub const AMPLITUDE_BALANCE_SCALE: f64 = 1.0;

/// Models with this prefix publish no phase balance.
pub const NO_PHASE_BALANCE_PREFIX: &str = "PBR";

pub const GRAPHS: &[GraphInfo] = &[
    GraphInfo::new(RETURN_LOSS, "Frequency", "Return Loss", "GHz", "dB"),
    GraphInfo::new(INSERTION_LOSS, "Frequency", "Insertion Loss", "GHz", "dB"),
    GraphInfo::new(ISOLATION, "Frequency", "Isolation", "GHz", "dB"),
    GraphInfo::new(AMPLITUDE_BALANCE, "Frequency", "Amplitude Bal", "GHz", "cB"),
    GraphInfo::new(PHASE_BALANCE, "Frequency", "Phase Bal", "GHz", "degrees"),
];

pub struct PowerDivider {
    inner: Passive,
}

impl PowerDivider {
    pub fn new(model: &str, params: Box<dyn NetworkParameters>) -> Result<Self> {
        let network = NetworkData::new(model, params);
        let ports = infer_divider_roles(model, network.comments())?;
        Ok(Self {
            inner: Passive {
                model: model.to_string(),
                network,
                ports,
            },
        })
    }
}

impl Product for PowerDivider {
    fn kind(&self) -> ProductKind {
        ProductKind::PowerDivider
    }

    fn model(&self) -> &str {
        &self.inner.model
    }

    fn port_roles(&self) -> Option<&PortRoleMap> {
        Some(&self.inner.ports)
    }

    fn load_graph(&self, graph: &str, _sheets: &mut SheetCache) -> Result<GraphData> {
        use PortRole::{Common, Output1, Output2};
        let p = &self.inner;

        match graph {
            RETURN_LOSS => p.return_loss(&[("Common", Common), ("Out 1", Output1), ("Out 2", Output2)]),
            INSERTION_LOSS => {
                let out1 = p.trace(Common, Output1, ParamFormat::Db)?;
                let out2 = p.trace(Common, Output2, ParamFormat::Db)?;
                Ok(GraphData::new()
                    .with(p.filtered_series("Out 1", out1))
                    .with(p.filtered_series("Out 2", out2)))
            }
            ISOLATION => {
                let iso = p.trace(Output1, Output2, ParamFormat::Db)?;
                Ok(GraphData::new().with(p.series(ISOLATION, iso)))
            }
            AMPLITUDE_BALANCE => {
                let y = p.derived(
                    AMPLITUDE_BALANCE,
                    (Common, Output1),
                    (Common, Output2),
                    ParamFormat::Db,
                    DerivedMetric::AmplitudeBalance { scale: AMPLITUDE_BALANCE_SCALE },
                )?;
                Ok(GraphData::new().with(p.filtered_series(AMPLITUDE_BALANCE, y)))
            }
            PHASE_BALANCE => {
                if p.model.starts_with(NO_PHASE_BALANCE_PREFIX) {
                    return Ok(GraphData::new().with(DataSeries::new(PHASE_BALANCE, Vec::new(), Vec::new())));
                }
                // signed: second output minus first
                let y = p.derived(
                    PHASE_BALANCE,
                    (Common, Output2),
                    (Common, Output1),
                    ParamFormat::Degrees,
                    DerivedMetric::Difference,
                )?;
                Ok(GraphData::new().with(p.filtered_series(PHASE_BALANCE, y)))
            }
            _ => Err(unknown_graph(self.kind(), graph)),
        }
    }
}
