//! Port-role inference from the comment header of a network-parameter file.
//!
//! The header is free text. Everything before the first occurrence of a
//! role's keyword is scanned for the digits 3, 2, 1 (in that priority) and the
//! first digit present is the role's port. Keywords that are substrings of
//! each other ("0" inside "180") are not disambiguated.

use std::fmt;

use crate::error::{CatalogError, Result};

/// Digits tried against the text preceding a role keyword, highest first.
const PORT_PRIORITY: [(char, u8); 3] = [('3', 3), ('2', 2), ('1', 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PortRole {
    Common,
    Coupled,
    Input,
    Output,
    Output0,
    Output180,
    Output1,
    Output2,
}

impl PortRole {
    pub fn label(&self) -> &'static str {
        match self {
            PortRole::Common => "common",
            PortRole::Coupled => "coupled",
            PortRole::Input => "input",
            PortRole::Output => "output",
            PortRole::Output0 => "0-degree output",
            PortRole::Output180 => "180-degree output",
            PortRole::Output1 => "first output",
            PortRole::Output2 => "second output",
        }
    }
}

impl fmt::Display for PortRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A role and the lowercase literal whose preceding text names its port.
#[derive(Debug, Clone, Copy)]
pub struct RoleKeyword {
    pub role: PortRole,
    pub keyword: &'static str,
}

/// How a product type identifies itself and its ports in the header.
#[derive(Debug, Clone, Copy)]
pub struct PortLayout {
    /// Case-sensitive literal some header line must contain.
    pub marker: &'static str,
    /// Lowercase literals selecting the lines that describe ports.
    pub line_keywords: &'static [&'static str],
    pub roles: &'static [RoleKeyword],
}

/// Semantic role to physical (1-based) port. Unresolved roles are kept so the
/// failure surfaces when a graph actually needs that port.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortRoleMap {
    model: String,
    ports: Vec<(PortRole, Option<u8>)>,
}

impl PortRoleMap {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ports: Vec::new(),
        }
    }

    pub fn set(&mut self, role: PortRole, port: Option<u8>) {
        match self.ports.iter_mut().find(|(r, _)| *r == role) {
            Some(entry) => entry.1 = port,
            None => self.ports.push((role, port)),
        }
    }

    /// The inferred port, or `None` when the header did not reveal it.
    pub fn get(&self, role: PortRole) -> Option<u8> {
        self.ports
            .iter()
            .find(|(r, _)| *r == role)
            .and_then(|(_, p)| *p)
    }

    /// The inferred port, or an [`CatalogError::UnresolvedPortRole`] error.
    pub fn port(&self, role: PortRole) -> Result<u8> {
        self.get(role).ok_or_else(|| CatalogError::UnresolvedPortRole {
            model: self.model.clone(),
            role,
        })
    }
}

/// First priority digit found in the text before the first `keyword`.
/// When the keyword is absent the whole text is scanned.
pub fn port_before(text: &str, keyword: &str) -> Option<u8> {
    let prefix = text.split(keyword).next().unwrap_or("");
    PORT_PRIORITY
        .iter()
        .find(|(digit, _)| prefix.contains(*digit))
        .map(|&(_, port)| port)
}

/// Infer every role of `layout` from a header.
pub fn infer_roles(model: &str, comments: &str, layout: &PortLayout) -> Result<PortRoleMap> {
    let mut has_marker = false;
    let mut scratch = String::new();
    for line in comments.lines() {
        if line.contains(layout.marker) {
            has_marker = true;
        }
        let lower = line.to_lowercase();
        if layout.line_keywords.iter().any(|k| lower.contains(k)) {
            scratch.push_str(&lower);
        }
    }

    if !has_marker {
        return Err(CatalogError::UnexpectedComponentType {
            model: model.to_string(),
            expected: layout.marker,
        });
    }

    let mut map = PortRoleMap::new(model);
    for rk in layout.roles {
        let port = port_before(&scratch, rk.keyword);
        if port.is_none() {
            tracing::warn!("{model}: no port found for the {} role", rk.role);
        }
        map.set(rk.role, port);
    }
    Ok(map)
}

/// Marker of power-divider headers.
pub const DIVIDER_MARKER: &str = "Power Divider";
const DIVIDER_CONFIG_LINE: &str = "Port Configuration";

/// Power dividers describe their ports on one tab-separated
/// "Port Configuration" line. Only the common port is read; the two outputs
/// are the remaining ports in ascending order.
pub fn infer_divider_roles(model: &str, comments: &str) -> Result<PortRoleMap> {
    let mut has_marker = false;
    let mut config_line = None;
    for line in comments.lines() {
        if line.contains(DIVIDER_MARKER) {
            has_marker = true;
        }
        if line.contains(DIVIDER_CONFIG_LINE) {
            config_line = Some(line);
        }
    }

    if !has_marker {
        return Err(CatalogError::UnexpectedComponentType {
            model: model.to_string(),
            expected: DIVIDER_MARKER,
        });
    }

    let config = config_line
        .ok_or_else(|| CatalogError::parse(model, "header has no Port Configuration line"))?;
    let value = config
        .split('\t')
        .nth(1)
        .ok_or_else(|| CatalogError::parse(model, "Port Configuration line has no tab-separated value"))?
        .to_lowercase();

    let (common, out1, out2) = match port_before(&value, "common") {
        Some(3) => (Some(3), Some(1), Some(2)),
        Some(2) => (Some(2), Some(1), Some(3)),
        Some(1) => (Some(1), Some(2), Some(3)),
        _ => {
            tracing::warn!("{model}: no common port in {value:?}");
            (None, None, None)
        }
    };

    let mut map = PortRoleMap::new(model);
    map.set(PortRole::Common, common);
    map.set(PortRole::Output1, out1);
    map.set(PortRole::Output2, out2);
    Ok(map)
}
