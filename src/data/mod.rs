//! Spreadsheet access: calamine-backed sheet reading, column-letter
//! resolution and the parsed-sheet cache.

pub mod loader;
pub mod parser;
pub mod sheet_cache;
