//! Network-parameter (S-parameter) access.
//!
//! File parsing lives outside this crate: callers hand in a [`NetworkLoader`]
//! that turns a file path into something implementing [`NetworkParameters`].

pub mod ports;

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use crate::error::{CatalogError, Result};

/// Hz per GHz.
const HZ_PER_GHZ: f64 = 1e9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamFormat {
    /// Magnitude in dB.
    Db,
    /// Phase angle in degrees.
    Degrees,
}

impl fmt::Display for ParamFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamFormat::Db => write!(f, "dB"),
            ParamFormat::Degrees => write!(f, "phase"),
        }
    }
}

/// Read access to one parsed network-parameter file.
pub trait NetworkParameters {
    /// Free-text comment header of the file.
    fn comments(&self) -> &str;

    /// Sweep frequencies in Hz, ascending.
    fn frequency_hz(&self) -> &[f64];

    /// Trace of S(`to`, `from`) in the given format, one value per frequency.
    fn parameter(&self, to: u8, from: u8, format: ParamFormat) -> Option<&[f64]>;
}

/// Opens network-parameter files.
pub trait NetworkLoader {
    fn open(&self, path: &Path) -> Result<Box<dyn NetworkParameters>>;
}

impl<F> NetworkLoader for F
where
    F: Fn(&Path) -> Result<Box<dyn NetworkParameters>>,
{
    fn open(&self, path: &Path) -> Result<Box<dyn NetworkParameters>> {
        self(path)
    }
}

/// Loader used when no network-file reader is linked in.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNetworkReader;

impl NetworkLoader for NoNetworkReader {
    fn open(&self, path: &Path) -> Result<Box<dyn NetworkParameters>> {
        Err(CatalogError::parse(
            path.display(),
            "no network-parameter reader is configured",
        ))
    }
}

/// Network parameters held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryNetwork {
    comments: String,
    frequency_hz: Vec<f64>,
    traces: HashMap<(u8, u8, ParamFormat), Vec<f64>>,
}

impl MemoryNetwork {
    pub fn new(comments: impl Into<String>, frequency_hz: Vec<f64>) -> Self {
        Self {
            comments: comments.into(),
            frequency_hz,
            traces: HashMap::new(),
        }
    }

    pub fn with_trace(mut self, to: u8, from: u8, format: ParamFormat, values: Vec<f64>) -> Self {
        self.traces.insert((to, from, format), values);
        self
    }
}

impl NetworkParameters for MemoryNetwork {
    fn comments(&self) -> &str {
        &self.comments
    }

    fn frequency_hz(&self) -> &[f64] {
        &self.frequency_hz
    }

    fn parameter(&self, to: u8, from: u8, format: ParamFormat) -> Option<&[f64]> {
        self.traces.get(&(to, from, format)).map(|v| v.as_slice())
    }
}

/// A component's opened network file, with lookups that fail loudly.
pub struct NetworkData {
    model: String,
    params: Box<dyn NetworkParameters>,
}

impl NetworkData {
    pub fn new(model: impl Into<String>, params: Box<dyn NetworkParameters>) -> Self {
        Self {
            model: model.into(),
            params,
        }
    }

    pub fn comments(&self) -> &str {
        self.params.comments()
    }

    /// Sweep frequencies converted to GHz.
    pub fn frequency_ghz(&self) -> Vec<f64> {
        self.params
            .frequency_hz()
            .iter()
            .map(|hz| hz / HZ_PER_GHZ)
            .collect()
    }

    pub fn trace(&self, to: u8, from: u8, format: ParamFormat) -> Result<Vec<f64>> {
        self.params
            .parameter(to, from, format)
            .map(|v| v.to_vec())
            .ok_or_else(|| CatalogError::MissingParameter {
                model: self.model.clone(),
                to,
                from,
                format,
            })
    }
}
