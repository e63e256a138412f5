/// Largest change in slope between consecutive accepted samples.
pub const MAX_SLOPE_CHANGE: f64 = 1.0;

/// Drop single-sample spikes from an ordered series.
///
/// The first two samples are always kept. Every later sample is kept only if
/// its difference from the last kept sample differs from the last kept
/// difference by less than [`MAX_SLOPE_CHANGE`]. Rejected samples never
/// become the reference for later comparisons.
pub fn reject_outliers(x: &[f64], y: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let n = x.len().min(y.len());
    let mut out_x = Vec::with_capacity(n);
    let mut out_y = Vec::with_capacity(n);

    let mut prev: Option<f64> = None;
    let mut prev_diff: Option<f64> = None;

    for i in 0..n {
        let (xv, yv) = (x[i], y[i]);
        let keep = match (prev, prev_diff) {
            (None, _) => true,
            (Some(_), None) => true,
            (Some(p), Some(d)) => (d - (yv - p)).abs() < MAX_SLOPE_CHANGE,
        };
        if !keep {
            continue;
        }

        prev_diff = prev.map(|p| yv - p);
        prev = Some(yv);
        out_x.push(xv);
        out_y.push(yv);
    }

    (out_x, out_y)
}
