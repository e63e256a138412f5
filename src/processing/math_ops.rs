/// Composite metrics computed sample-by-sample from two raw traces `a` and `b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DerivedMetric {
    /// `-(a - b)`: a = coupling, b = isolation.
    Directivity,
    /// `a - b`: a = coupled-port loss, b = insertion loss.
    CoupledRatio,
    /// `scale * (a - b)` between two output paths.
    AmplitudeBalance { scale: f64 },
    /// `|a - b|` between two output phases, regardless of their signs.
    PhaseBalance,
    /// `a - b` with the sign kept.
    Difference,
}

impl DerivedMetric {
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            DerivedMetric::Directivity => -(a - b),
            DerivedMetric::CoupledRatio => a - b,
            DerivedMetric::AmplitudeBalance { scale } => scale * (a - b),
            DerivedMetric::PhaseBalance => (a - b).abs(),
            DerivedMetric::Difference => a - b,
        }
    }
}

/// Apply a metric pairwise. Traces come from the same sweep; a length
/// mismatch truncates to the shorter one.
pub fn combine(a: &[f64], b: &[f64], metric: DerivedMetric) -> Vec<f64> {
    a.iter()
        .zip(b.iter())
        .map(|(&a, &b)| metric.apply(a, b))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directivity_negates_difference() {
        let d = combine(&[-20.0, -21.0], &[-45.0, -40.0], DerivedMetric::Directivity);
        assert_eq!(d, vec![-25.0, -19.0]);
    }

    #[test]
    fn amplitude_balance_scales() {
        let metric = DerivedMetric::AmplitudeBalance { scale: 10.0 };
        let bal = combine(&[-3.5, -3.0], &[-3.0, -3.25], metric);
        assert_eq!(bal, vec![-5.0, 2.5]);
    }

    #[test]
    fn phase_balance_ignores_sign_agreement() {
        let p = combine(&[170.0, -10.0, 5.0], &[-10.0, 170.0, 3.0], DerivedMetric::PhaseBalance);
        assert_eq!(p, vec![180.0, 180.0, 2.0]);
    }

    #[test]
    fn truncates_to_shorter() {
        assert_eq!(combine(&[1.0, 2.0, 3.0], &[1.0], DerivedMetric::Difference).len(), 1);
    }
}
