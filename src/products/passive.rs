use crate::error::Result;
use crate::network::ports::{PortRole, PortRoleMap};
use crate::network::{NetworkData, ParamFormat};
use crate::processing::math_ops::{combine, DerivedMetric};
use crate::processing::outliers::reject_outliers;
use crate::state::data_series::{DataSeries, GraphData};

/// A network-backed component: its opened file and inferred port roles.
pub struct Passive {
    pub model: String,
    pub network: NetworkData,
    pub ports: PortRoleMap,
}

impl Passive {
    /// S(`to`, `from`) for two semantic roles.
    pub fn trace(&self, to: PortRole, from: PortRole, format: ParamFormat) -> Result<Vec<f64>> {
        let to = self.ports.port(to)?;
        let from = self.ports.port(from)?;
        self.network.trace(to, from, format)
    }

    /// Series against the sweep frequency axis.
    pub fn series(&self, label: &str, y: Vec<f64>) -> DataSeries {
        let mut x = self.network.frequency_ghz();
        x.truncate(y.len());
        DataSeries::new(label, x, y)
    }

    /// Like [`Passive::series`], with sequential spikes removed.
    pub fn filtered_series(&self, label: &str, y: Vec<f64>) -> DataSeries {
        let (x, y) = reject_outliers(&self.network.frequency_ghz(), &y);
        DataSeries::new(label, x, y)
    }

    /// One reflection trace S(p, p) per labeled role.
    pub fn return_loss(&self, roles: &[(&str, PortRole)]) -> Result<GraphData> {
        let mut graph = GraphData::new();
        for &(label, role) in roles {
            graph.push(self.series(label, self.trace(role, role, ParamFormat::Db)?));
        }
        Ok(graph)
    }

    /// `metric` applied to two traces, as a single series named `label`.
    pub fn derived(
        &self,
        label: &str,
        a: (PortRole, PortRole),
        b: (PortRole, PortRole),
        format: ParamFormat,
        metric: DerivedMetric,
    ) -> Result<Vec<f64>> {
        let a = self.trace(a.0, a.1, format)?;
        let b = self.trace(b.0, b.1, format)?;
        let values = combine(&a, &b, metric);
        tracing::debug!("{}: derived {label} over {} samples", self.model, values.len());
        Ok(values)
    }
}
