use std::path::PathBuf;

use crate::catalog::ProductKind;
use crate::data::sheet_cache::SheetCache;
use crate::error::Result;
use crate::products::mapping::MappingTable;
use crate::products::{unknown_graph, GraphInfo, Product};
use crate::state::data_series::GraphData;

pub const MAPPING_SHEET: &str = "MappingLaAm";

pub const OUTPUT_COMPRESSION: &str = "Output Compression Points";
pub const SMALL_SIGNAL_GAIN: &str = "Small Signal Gain";
pub const NOISE_FIGURE: &str = "Noise Figure";
pub const OUTPUT_IP3: &str = "Output IP3";
pub const INPUT_RETURN_LOSS: &str = "Input Return Loss";
pub const OUTPUT_RETURN_LOSS: &str = "Output Return Loss";
pub const REVERSE_ISOLATION: &str = "Reverse Isolation";

pub const GRAPHS: &[GraphInfo] = &[
    GraphInfo::new(OUTPUT_COMPRESSION, "Frequency", "Output Comp. Points", "GHz", "dBm"),
    GraphInfo::new(SMALL_SIGNAL_GAIN, "Frequency", "Sm. Signal Gain", "GHz", "dB"),
    GraphInfo::new(NOISE_FIGURE, "Frequency", "Noise Figure", "GHz", "dB"),
    GraphInfo::new(OUTPUT_IP3, "Frequency", "OIP3", "GHz", "dBm"),
    GraphInfo::new(INPUT_RETURN_LOSS, "Frequency", "Input Return Loss", "GHz", "dB"),
    GraphInfo::new(OUTPUT_RETURN_LOSS, "Frequency", "Output Return Loss", "GHz", "dB"),
    GraphInfo::new(REVERSE_ISOLATION, "Frequency", "Reverse Isolation", "GHz", "dB"),
];

/// Anchor (row, col) of each graph's block in the mapping sheet.
fn anchor(graph: &str) -> Option<(usize, usize)> {
    match graph {
        OUTPUT_COMPRESSION => Some((10, 0)),
        SMALL_SIGNAL_GAIN => Some((10, 10)),
        NOISE_FIGURE => Some((10, 20)),
        OUTPUT_IP3 => Some((20, 0)),
        INPUT_RETURN_LOSS => Some((20, 10)),
        OUTPUT_RETURN_LOSS => Some((20, 20)),
        REVERSE_ISOLATION => Some((30, 0)),
        _ => None,
    }
}

pub struct Amplifier {
    model: String,
    mapping: MappingTable,
}

impl Amplifier {
    pub fn new(model: &str, workbook: PathBuf) -> Self {
        Self {
            model: model.to_string(),
            mapping: MappingTable::new(workbook, MAPPING_SHEET),
        }
    }
}

impl Product for Amplifier {
    fn kind(&self) -> ProductKind {
        ProductKind::Amplifier
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn load_graph(&self, graph: &str, sheets: &mut SheetCache) -> Result<GraphData> {
        let (row, col) = anchor(graph).ok_or_else(|| unknown_graph(self.kind(), graph))?;
        self.mapping.load(row, col, sheets)
    }
}
