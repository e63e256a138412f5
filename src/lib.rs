//! RF component catalog engine.
//!
//! Resolves named performance curves for mixers, amplifiers, couplers,
//! baluns and power dividers from mapped spreadsheets or network-parameter
//! files, computes windowed min/max/median statistics over them, and filters
//! the catalog by operating-range containment.
//!
//! ```text
//!  spec tables ──► catalog ──► search
//!                     │
//!                     ▼
//!  workbooks ──► sheet cache ──► products ──► component (memoized graphs)
//!  network files ──► ports ──┘                    │
//!                                                 ▼
//!                                        statistics / export
//! ```

pub mod catalog;
pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod network;
pub mod processing;
pub mod products;
pub mod session;
pub mod state;

pub use catalog::search::{RangeQuery, SearchCriteria};
pub use catalog::{Catalog, CatalogRecord, Dimension, OperatingRange, ProductKind};
pub use config::CatalogConfig;
pub use error::{CatalogError, Result};
pub use processing::statistics::{RangeStats, WindowStats};
pub use session::Session;
pub use state::data_series::{DataSeries, GraphData};
