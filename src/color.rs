// src/color.rs
use serde::{Deserialize, Serialize};

use crate::config::consts::{CELLS_PER_ROW, CODE_CELL, NAME_CELL, RGB_CELLS};
use crate::document::Row;
use crate::error::{Error, Result};

/// One color as it leaves the page. Everything but `name` is kept as the
/// table had it; channels stay text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRecord {
    pub name: String,
    pub color: String,
    pub rgb: [String; 3],
}

impl ColorRecord {
    pub fn new<N, C, R>(name: N, color: C, rgb: [R; 3]) -> Self
    where
        N: AsRef<str>,
        C: Into<String>,
        R: Into<String>,
    {
        Self {
            name: name.as_ref().to_lowercase(),
            color: color.into(),
            rgb: rgb.map(Into::into),
        }
    }

    /// Map `[_, name, code, r, g, b, ...]`. `index` is only used for the error.
    pub fn from_row(row: &Row, index: usize) -> Result<Self> {
        let malformed = || Error::MalformedRow { index, cells: row.len(), expected: CELLS_PER_ROW };
        let cell = |i: usize| row.cell(i).ok_or_else(malformed);

        let [r, g, b] = RGB_CELLS;
        Ok(Self::new(cell(NAME_CELL)?, cell(CODE_CELL)?, [cell(r)?, cell(g)?, cell(b)?]))
    }
}
