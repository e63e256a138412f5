//! Static per-model specification records and range-containment search.

pub mod search;
pub mod specs;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::search::SearchCriteria;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProductKind {
    Mixer,
    Amplifier,
    Coupler,
    Balun,
    PowerDivider,
}

impl ProductKind {
    pub const ALL: [ProductKind; 5] = [
        ProductKind::Mixer,
        ProductKind::Amplifier,
        ProductKind::Coupler,
        ProductKind::Balun,
        ProductKind::PowerDivider,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProductKind::Mixer => "mixer",
            ProductKind::Amplifier => "amplifier",
            ProductKind::Coupler => "coupler",
            ProductKind::Balun => "balun",
            ProductKind::PowerDivider => "power divider",
        }
    }

    /// Folder under the data directory holding this type's files.
    pub fn folder(&self) -> &'static str {
        match self {
            ProductKind::Mixer => "mixerexcels",
            ProductKind::Amplifier => "ampexcels",
            ProductKind::Coupler => "coupler-files",
            ProductKind::Balun => "balun-files",
            ProductKind::PowerDivider => "powdiv-files",
        }
    }

    /// File name of the specification table inside [`ProductKind::folder`].
    pub fn spec_file(&self) -> &'static str {
        match self {
            ProductKind::Mixer => "mixerproductspecs.xlsx",
            ProductKind::Amplifier => "ampproductspecs.xlsx",
            ProductKind::Coupler => "couplerproductspecs.xlsx",
            ProductKind::Balun => "balunproductspecs.xlsx",
            ProductKind::PowerDivider => "powdivproductspecs.xlsx",
        }
    }

    /// Spec column naming the backing data file of a model.
    pub fn source_column(&self) -> &'static str {
        if self.uses_mapping_table() {
            "excel"
        } else {
            "file"
        }
    }

    /// Mixers and amplifiers keep their curves in a mapped workbook; the
    /// passive types keep them in a network-parameter file.
    pub fn uses_mapping_table(&self) -> bool {
        matches!(self, ProductKind::Mixer | ProductKind::Amplifier)
    }

    pub fn dimensions(&self) -> &'static [Dimension] {
        match self {
            ProductKind::Mixer => &[Dimension::Rf, Dimension::Lo, Dimension::If, Dimension::LoDrive],
            _ => &[Dimension::Frequency],
        }
    }

    /// Type-specific scalar spec columns carried on each record.
    pub fn scalar_columns(&self) -> &'static [&'static str] {
        match self {
            ProductKind::Mixer => &["rf-high-b", "lo-high-b", "p1db"],
            ProductKind::Amplifier => &["ssg", "sop"],
            ProductKind::Coupler => &["vswr", "mn-coup", "direct"],
            ProductKind::Balun => &["ampBal"],
            ProductKind::PowerDivider => &[],
        }
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProductKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mixer" | "mixers" | "m" => Ok(ProductKind::Mixer),
            "amplifier" | "amplifiers" | "amp" => Ok(ProductKind::Amplifier),
            "coupler" | "couplers" => Ok(ProductKind::Coupler),
            "balun" | "baluns" => Ok(ProductKind::Balun),
            "power-divider" | "power divider" | "powdiv" | "pd" => Ok(ProductKind::PowerDivider),
            other => Err(format!("unknown product type: {other}")),
        }
    }
}

/// An operating-range axis published in the spec tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dimension {
    Frequency,
    Rf,
    Lo,
    If,
    LoDrive,
}

impl Dimension {
    /// (low, high) column names in the spec table.
    pub fn columns(&self) -> (&'static str, &'static str) {
        match self {
            Dimension::Frequency => ("freq-low", "freq-high"),
            Dimension::Rf => ("rf-low", "rf-high"),
            Dimension::Lo => ("lo-low", "lo-high"),
            Dimension::If => ("if-low", "if-high"),
            Dimension::LoDrive => ("lodr-low", "lodr-high"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OperatingRange {
    pub low: Option<f64>,
    pub high: Option<f64>,
}

/// Published specification of one model. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogRecord {
    pub model: String,
    pub kind: ProductKind,
    /// Workbook base name (mapped types) or network file name (passives).
    pub source: String,
    pub ranges: Vec<(Dimension, OperatingRange)>,
    pub specs: Vec<(String, Option<f64>)>,
}

impl CatalogRecord {
    pub fn range(&self, dimension: Dimension) -> Option<OperatingRange> {
        self.ranges
            .iter()
            .find(|(d, _)| *d == dimension)
            .map(|(_, r)| *r)
    }

    pub fn spec(&self, column: &str) -> Option<f64> {
        self.specs
            .iter()
            .find(|(c, _)| c == column)
            .and_then(|(_, v)| *v)
    }

    pub fn datasheet_url(&self, base: &str) -> String {
        format!("{base}{}.pdf", self.model)
    }
}

/// Every record of one product type, in spec-table row order.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    kind: ProductKind,
    records: Vec<CatalogRecord>,
}

impl Catalog {
    pub fn from_records(kind: ProductKind, records: Vec<CatalogRecord>) -> Self {
        Self { kind, records }
    }

    pub fn kind(&self) -> ProductKind {
        self.kind
    }

    pub fn records(&self) -> &[CatalogRecord] {
        &self.records
    }

    pub fn get(&self, model: &str) -> Option<&CatalogRecord> {
        self.records.iter().find(|r| r.model == model)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose operating ranges contain every constrained window.
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<&CatalogRecord> {
        self.records
            .iter()
            .filter(|r| criteria.matches(r))
            .collect()
    }
}
