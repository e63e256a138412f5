//! Tests for windowed graph statistics and plot extents.

use rfcatalog::processing::statistics::{x_extent, y_extent};
use rfcatalog::{DataSeries, GraphData, RangeStats, WindowStats};

fn single() -> GraphData {
    GraphData::new().with(DataSeries::new("typ", vec![1.0, 2.0, 3.0, 4.0], vec![5.0, 1.0, 3.0, 9.0]))
}

#[test]
fn full_window_over_one_series() {
    let stats = RangeStats::compute(&single(), 1.0, 4.0);
    assert_eq!(
        stats.primary,
        Some(WindowStats { min: 1.0, max: 9.0, median: 4.0 })
    );
    assert_eq!(stats.secondary, None);
}

#[test]
fn window_bounds_are_inclusive() {
    let stats = RangeStats::compute(&single(), 2.0, 3.0);
    assert_eq!(
        stats.primary,
        Some(WindowStats { min: 1.0, max: 3.0, median: 2.0 })
    );
}

#[test]
fn empty_window_gives_all_none() {
    let stats = RangeStats::compute(&single(), 5.0, 6.0);
    assert_eq!(stats, RangeStats::EMPTY);
    assert_eq!(stats.as_tuple(), (None, None, None, None, None, None));
}

#[test]
fn empty_graph_gives_all_none() {
    assert_eq!(RangeStats::compute(&GraphData::new(), 0.0, 10.0), RangeStats::EMPTY);
}

#[test]
fn two_series_report_both() {
    let graph = single().with(DataSeries::new("-40C", vec![1.0, 2.0, 3.0], vec![7.0, 8.0, 6.0]));
    let (min, max, median, min_b, max_b, median_b) = RangeStats::compute(&graph, 1.0, 3.0).as_tuple();

    assert_eq!((min, max, median), (Some(1.0), Some(5.0), Some(3.0)));
    assert_eq!((min_b, max_b, median_b), (Some(6.0), Some(8.0), Some(7.0)));
}

#[test]
fn three_series_report_only_the_first() {
    let graph = single()
        .with(DataSeries::new("-40C", vec![1.0, 2.0], vec![7.0, 8.0]))
        .with(DataSeries::new("+85C", vec![1.0, 2.0], vec![2.0, 3.0]));
    let stats = RangeStats::compute(&graph, 1.0, 4.0);

    assert!(stats.primary.is_some());
    assert_eq!(stats.secondary, None);
}

#[test]
fn scan_stops_after_window() {
    // unsorted tail beyond the window is never reached
    let series = DataSeries::new("typ", vec![1.0, 2.0, 9.0, 1.5], vec![4.0, 6.0, 100.0, -50.0]);
    let stats = WindowStats::over_window(&series, 1.0, 2.0).unwrap();
    assert_eq!((stats.min, stats.max), (4.0, 6.0));
}

#[test]
fn nan_samples_are_ignored() {
    let series = DataSeries::new("typ", vec![1.0, 2.0, 3.0], vec![2.0, f64::NAN, 4.0]);
    let stats = WindowStats::over_window(&series, 0.0, 5.0).unwrap();
    assert_eq!(stats.median, 3.0);

    let all_nan = DataSeries::new("typ", vec![1.0], vec![f64::NAN]);
    assert_eq!(WindowStats::over_window(&all_nan, 0.0, 5.0), None);
}

#[test]
fn x_extent_uses_first_series_of_each_graph() {
    let a = single().with(DataSeries::new("wide", vec![-100.0, 100.0], vec![0.0, 0.0]));
    let b = GraphData::new().with(DataSeries::new("b", vec![0.5, 3.0], vec![0.0, 0.0]));

    assert_eq!(x_extent([&a, &b]), Some((0.5, 4.0)));
    assert_eq!(x_extent([&GraphData::new()]), None);
}

#[test]
fn y_extent_is_padded_and_strictly_inside() {
    let graph = single();
    // x in (1, 4) keeps samples at 2 and 3: y in [1, 3], span 2
    let (lo, hi) = y_extent([&graph], 1.0, 4.0).unwrap();
    assert!((lo - 0.8).abs() < 1e-12);
    assert!((hi - 3.2).abs() < 1e-12);

    assert_eq!(y_extent([&graph], 4.0, 5.0), None);
}
