//! Tests for mapping-sheet graph resolution (amplifiers and mixers).

mod common;

use std::path::PathBuf;

use common::*;
use rfcatalog::data::loader::Sheet;
use rfcatalog::data::sheet_cache::SheetCache;
use rfcatalog::products::amplifier::{self, Amplifier};
use rfcatalog::products::mapping::MappingTable;
use rfcatalog::products::mixer::{self, Mixer};
use rfcatalog::network::NoNetworkReader;
use rfcatalog::products::{self, Product};
use rfcatalog::{CatalogConfig, CatalogError, CatalogRecord, ProductKind};

const WORKBOOK: &str = "wb.xlsx";

/// Block at (row, col) with two labeled lines around a numeric "label" row.
fn mapping_block(row: usize, col: usize) -> Vec<(usize, usize, rfcatalog::data::loader::Cell)> {
    let mut cells = vec![(row - 2, col + 1, num(3.0))];
    cells.extend(mapping_row(row, col, text("+25C"), ("Data", "A", 2, 4), ("Data", "B", 2, 4)));
    cells.push((row + 1, col, num(5.0)));
    cells.extend(mapping_row(row + 2, col, text("-40C"), ("Data", "A", 2, 4), ("Data", "C", 2, 4)));
    cells
}

fn cache_with(mapping_sheet: &str, mapping: Sheet) -> SheetCache {
    let source = MemorySource::new()
        .with_sheet(WORKBOOK, mapping_sheet, mapping)
        .with_sheet(WORKBOOK, "Data", data_sheet());
    SheetCache::new(Box::new(source))
}

#[test]
fn amplifier_reads_lines_in_row_order() {
    let mut sheets = cache_with(amplifier::MAPPING_SHEET, sparse_sheet(mapping_block(10, 10)));
    let amp = Amplifier::new("AMM-6702", PathBuf::from(WORKBOOK));

    let graph = amp.load_graph(amplifier::SMALL_SIGNAL_GAIN, &mut sheets).unwrap();

    assert_eq!(graph.labels(), vec!["+25C", "-40C"]);
    assert_eq!(graph.series[0].x, vec![2.0, 4.0, 6.0]);
    assert_eq!(graph.series[0].y, vec![10.0, 11.0, 12.0]);
    assert_eq!(graph.series[1].y, vec![9.0, 9.5, 10.0]);
}

#[test]
fn non_text_label_rows_are_skipped_not_terminal() {
    let table = MappingTable::new(PathBuf::from(WORKBOOK), "Mapping");
    let lines = table.line_refs(&sparse_sheet(mapping_block(10, 0)), 10, 0).unwrap();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1].label, "-40C");
    assert_eq!(lines[1].y.column, 2);
    assert_eq!((lines[1].y.first_row, lines[1].y.last_row), (2, 4));
}

#[test]
fn mixer_uses_its_own_sheet_and_anchor() {
    let mut sheets = cache_with(mixer::MAPPING_SHEET, sparse_sheet(mapping_block(20, 20)));
    let m = Mixer::new("M1-0408", PathBuf::from(WORKBOOK));

    let graph = m.load_graph(mixer::IF_RESPONSE, &mut sheets).unwrap();
    assert_eq!(graph.len(), 2);

    // nothing anchored at the conversion-loss block
    let err = m.load_graph(mixer::CONVERSION_LOSS, &mut sheets).unwrap_err();
    assert!(matches!(err, CatalogError::ParseFailure { .. }));
}

#[test]
fn zero_line_count_gives_empty_graph() {
    let mapping = sparse_sheet(vec![(8, 1, num(0.0))]);
    let mut sheets = cache_with(amplifier::MAPPING_SHEET, mapping);
    let amp = Amplifier::new("AMM-6702", PathBuf::from(WORKBOOK));

    let graph = amp.load_graph(amplifier::OUTPUT_COMPRESSION, &mut sheets).unwrap();
    assert!(graph.is_empty());
}

#[test]
fn unknown_graph_is_rejected() {
    let mut sheets = cache_with(amplifier::MAPPING_SHEET, Sheet::default());
    let amp = Amplifier::new("AMM-6702", PathBuf::from(WORKBOOK));

    let err = amp.load_graph("Spectrum Analyzer", &mut sheets).unwrap_err();
    assert!(matches!(err, CatalogError::UnknownGraph { .. }));
}

#[test]
fn missing_data_sheet_propagates() {
    let mut cells = vec![(8, 1, num(1.0))];
    cells.extend(mapping_row(10, 0, text("typ"), ("Nope", "A", 2, 4), ("Data", "B", 2, 4)));
    let mut sheets = cache_with(amplifier::MAPPING_SHEET, sparse_sheet(cells));
    let amp = Amplifier::new("AMM-6702", PathBuf::from(WORKBOOK));

    let err = amp.load_graph(amplifier::OUTPUT_COMPRESSION, &mut sheets).unwrap_err();
    assert!(matches!(err, CatalogError::ParseFailure { .. }));
}

#[test]
fn row_range_is_clamped_to_sheet() {
    let mut cells = vec![(8, 1, num(1.0))];
    cells.extend(mapping_row(10, 0, text("typ"), ("Data", "A", 3, 50), ("Data", "B", 3, 50)));
    let mut sheets = cache_with(amplifier::MAPPING_SHEET, sparse_sheet(cells));
    let amp = Amplifier::new("AMM-6702", PathBuf::from(WORKBOOK));

    let graph = amp.load_graph(amplifier::OUTPUT_COMPRESSION, &mut sheets).unwrap();
    assert_eq!(graph.series[0].x, vec![4.0, 6.0]);
    assert_eq!(graph.series[0].y, vec![11.0, 12.0]);
}

#[test]
fn oversized_line_count_is_bounded_by_sheet() {
    let mut cells = vec![(8, 1, num(1e18))];
    cells.extend(mapping_row(10, 0, text("typ"), ("Data", "A", 2, 4), ("Data", "B", 2, 4)));
    let table = MappingTable::new(PathBuf::from(WORKBOOK), "Mapping");

    let lines = table.line_refs(&sparse_sheet(cells), 10, 0).unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].label, "typ");
}

#[test]
fn overlong_column_letters_are_a_layout_error() {
    let mut cells = vec![(8, 1, num(1.0))];
    cells.extend(mapping_row(10, 0, text("typ"), ("Data", "ZZZZZZZZZZZZZZZ", 2, 4), ("Data", "B", 2, 4)));
    let table = MappingTable::new(PathBuf::from(WORKBOOK), "Mapping");

    let err = table.line_refs(&sparse_sheet(cells), 10, 0).unwrap_err();
    assert!(matches!(err, CatalogError::ParseFailure { .. }));
}

#[test]
fn mapped_products_open_from_records() {
    let config = CatalogConfig::default();
    for kind in [ProductKind::Mixer, ProductKind::Amplifier] {
        let record = CatalogRecord {
            model: "M1-0008".to_string(),
            kind,
            source: "M1-0008".to_string(),
            ranges: Vec::new(),
            specs: Vec::new(),
        };
        let product = products::open(&record, &config, &NoNetworkReader).unwrap();
        assert_eq!(product.kind(), kind);
        assert_eq!(product.model(), "M1-0008");
    }
}
