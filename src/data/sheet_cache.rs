use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::data::loader::{ExcelSource, Sheet, SheetSource};
use crate::error::Result;

/// Memoized parsed sheets keyed by (file, sheet name).
///
/// Entries are never evicted or invalidated: backing workbooks are treated as
/// immutable for the lifetime of the cache. A failed parse is not cached, so
/// the next lookup for the same pair parses again.
pub struct SheetCache {
    source: Box<dyn SheetSource>,
    sheets: HashMap<(PathBuf, String), Rc<Sheet>>,
}

impl SheetCache {
    pub fn new(source: Box<dyn SheetSource>) -> Self {
        Self {
            source,
            sheets: HashMap::new(),
        }
    }

    /// Return the parsed sheet, reading it from the source on first use only.
    pub fn get(&mut self, file: &Path, sheet: &str) -> Result<Rc<Sheet>> {
        let key = (file.to_path_buf(), sheet.to_string());
        if let Some(parsed) = self.sheets.get(&key) {
            tracing::debug!("Sheet {sheet:?} of {:?} retrieved", file);
            return Ok(Rc::clone(parsed));
        }

        let parsed = Rc::new(self.source.read_sheet(file, sheet)?);
        tracing::debug!("Sheet {sheet:?} of {:?} read", file);
        self.sheets.insert(key, Rc::clone(&parsed));
        Ok(parsed)
    }

    pub fn contains(&self, file: &Path, sheet: &str) -> bool {
        self.sheets
            .contains_key(&(file.to_path_buf(), sheet.to_string()))
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

impl Default for SheetCache {
    fn default() -> Self {
        Self::new(Box::new(ExcelSource))
    }
}
