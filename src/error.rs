use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::ProductKind;
use crate::network::ports::PortRole;
use crate::network::ParamFormat;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The network file header does not carry the type marker for this product.
    #[error("{model}: network file comments do not describe a {expected}")]
    UnexpectedComponentType { model: String, expected: &'static str },

    #[error("cannot parse {origin}: {reason}")]
    ParseFailure { origin: String, reason: String },

    #[error("{model}: the {role} port could not be inferred from the file comments")]
    UnresolvedPortRole { model: String, role: PortRole },

    #[error("{model}: no {format} trace for S{to}{from}")]
    MissingParameter {
        model: String,
        to: u8,
        from: u8,
        format: ParamFormat,
    },

    #[error("{kind} has no graph named {graph:?}")]
    UnknownGraph { kind: ProductKind, graph: String },

    #[error("{kind} catalog has no model {model:?}")]
    UnknownModel { kind: ProductKind, model: String },

    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("csv export failed: {0}")]
    Csv(#[from] csv::Error),
}

impl CatalogError {
    pub(crate) fn parse(origin: impl ToString, reason: impl ToString) -> Self {
        CatalogError::ParseFailure {
            origin: origin.to_string(),
            reason: reason.to_string(),
        }
    }
}
