use std::path::PathBuf;

use crate::catalog::ProductKind;
use crate::data::sheet_cache::SheetCache;
use crate::error::Result;
use crate::products::mapping::MappingTable;
use crate::products::{unknown_graph, GraphInfo, Product};
use crate::state::data_series::GraphData;

pub const MAPPING_SHEET: &str = "Mapping";

pub const CONVERSION_LOSS: &str = "Conversion Loss";
pub const INPUT_IP3: &str = "Input IP3";
pub const LO_RF_ISOLATION: &str = "LO to RF Isolation";
pub const LO_IF_ISOLATION: &str = "LO to IF Isolation";
pub const RF_IF_ISOLATION: &str = "RF to IF Isolation";
pub const IF_RESPONSE: &str = "IF Response";
pub const CONVERSION_LOSS_VS_LO: &str = "Conversion Loss vs. LO Power";
pub const INPUT_IP3_VS_LO: &str = "Input IP3 vs. LO Power";

pub const GRAPHS: &[GraphInfo] = &[
    GraphInfo::new(CONVERSION_LOSS, "RF Freq", "Conv. Loss", "GHz", "dB"),
    GraphInfo::new(INPUT_IP3, "RF Freq", "Input IP3", "GHz", "dBm"),
    GraphInfo::new(LO_RF_ISOLATION, "LO Freq", "LO-RF Isolation", "GHz", "dB"),
    GraphInfo::new(LO_IF_ISOLATION, "LO Freq", "LO-IF Isolation", "GHz", "dB"),
    GraphInfo::new(RF_IF_ISOLATION, "RF Freq", "RF-IF Isolation", "GHz", "dB"),
    GraphInfo::new(IF_RESPONSE, "IF Freq", "Relative IF Response", "GHz", "dB"),
    GraphInfo::new(CONVERSION_LOSS_VS_LO, "RF Freq", "Conv. Loss", "GHz", "dB"),
    GraphInfo::new(INPUT_IP3_VS_LO, "RF Freq", "Input IP3", "GHz", "dBm"),
];

fn anchor(graph: &str) -> Option<(usize, usize)> {
    match graph {
        CONVERSION_LOSS => Some((10, 0)),
        INPUT_IP3 => Some((10, 10)),
        LO_RF_ISOLATION => Some((10, 20)),
        LO_IF_ISOLATION => Some((20, 0)),
        RF_IF_ISOLATION => Some((20, 10)),
        IF_RESPONSE => Some((20, 20)),
        CONVERSION_LOSS_VS_LO => Some((30, 0)),
        INPUT_IP3_VS_LO => Some((30, 10)),
        _ => None,
    }
}

pub struct Mixer {
    model: String,
    mapping: MappingTable,
}

impl Mixer {
    pub fn new(model: &str, workbook: PathBuf) -> Self {
        Self {
            model: model.to_string(),
            mapping: MappingTable::new(workbook, MAPPING_SHEET),
        }
    }
}

impl Product for Mixer {
    fn kind(&self) -> ProductKind {
        ProductKind::Mixer
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn load_graph(&self, graph: &str, sheets: &mut SheetCache) -> Result<GraphData> {
        let (row, col) = anchor(graph).ok_or_else(|| unknown_graph(self.kind(), graph))?;
        self.mapping.load(row, col, sheets)
    }
}
