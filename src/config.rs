use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::ProductKind;
use crate::error::{CatalogError, Result};

pub const DEFAULT_DATASHEET_URL: &str = "https://www.markimicrowave.com/Assets/DataSheets/";

/// Where catalog data lives. Every field has a default, so `{}` is a valid
/// config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Root holding one folder per product type.
    pub data_dir: PathBuf,
    /// Sheet name of every specification table.
    pub spec_sheet: String,
    /// Prefix of datasheet links; the model id and `.pdf` are appended.
    pub datasheet_base_url: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            spec_sheet: "Sheet1".to_string(),
            datasheet_base_url: DEFAULT_DATASHEET_URL.to_string(),
        }
    }
}

impl CatalogConfig {
    /// Load a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn spec_path(&self, kind: ProductKind) -> PathBuf {
        self.data_dir.join(kind.folder()).join(kind.spec_file())
    }

    /// Backing file of a model: `<excel>.xlsx` for mapped types, the network
    /// file name as given for passives.
    pub fn source_path(&self, kind: ProductKind, source: &str) -> PathBuf {
        let folder = self.data_dir.join(kind.folder());
        if kind.uses_mapping_table() {
            folder.join(format!("{source}.xlsx"))
        } else {
            folder.join(source)
        }
    }
}
