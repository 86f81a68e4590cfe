// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

/// What to do with a row that doesn't have all six cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RowPolicy {
    /// Leave the row out, log it and report its index.
    #[default]
    Skip,
    /// Abort the whole extraction; nothing is written.
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Element whose direct `<tr>` children are the color rows
    pub table_id: String,
    /// Element that receives the JSON text
    pub output_id: String,
    pub row_policy: RowPolicy,
    /// Indented JSON instead of the compact single line
    pub pretty: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            table_id: DEFAULT_TABLE_ID.into(),
            output_id: DEFAULT_OUTPUT_ID.into(),
            row_policy: RowPolicy::Skip,
            pretty: false,
        }
    }
}

impl ExtractOptions {
    pub fn strict(mut self) -> Self {
        self.row_policy = RowPolicy::Fail;
        self
    }
}

/// Where the CLI/GUI reads from and writes to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IoOptions {
    pub input: Option<PathBuf>,
    /// JSON file; `None` prints to stdout
    pub json_out: Option<PathBuf>,
    /// Copy of the page with the output field filled in
    pub page_out: Option<PathBuf>,
    pub swatch_out: Option<PathBuf>,
    /// Text (or a file holding it) whose color words pick the swatch colors
    pub text: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub extract: ExtractOptions,
    pub io: IoOptions,
}
