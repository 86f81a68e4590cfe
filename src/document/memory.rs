// src/document/memory.rs
use std::collections::HashMap;

use super::{OutputField, Row, RowSource};
use crate::error::{Error, Result};

/// A page built by hand: tables by id and output fields by id.
#[derive(Clone, Debug, Default)]
pub struct MemoryDocument {
    tables: HashMap<String, Vec<Row>>,
    fields: HashMap<String, String>,
}

impl MemoryDocument {
    pub fn new() -> Self { Self::default() }

    pub fn with_table<I, R>(mut self, id: &str, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Row>,
    {
        self.tables.insert(id.to_string(), rows.into_iter().map(Into::into).collect());
        self
    }

    /// Adds an empty output field.
    pub fn with_field(mut self, id: &str) -> Self {
        self.fields.insert(id.to_string(), String::new());
        self
    }
}

impl RowSource for MemoryDocument {
    fn rows(&self, root_id: &str) -> Result<Vec<Row>> {
        self.tables
            .get(root_id)
            .cloned()
            .ok_or_else(|| Error::MissingElement { id: root_id.to_string() })
    }
}

impl OutputField for MemoryDocument {
    fn write_output(&mut self, id: &str, value: &str) -> Result<()> {
        let field = self
            .fields
            .get_mut(id)
            .ok_or_else(|| Error::MissingElement { id: id.to_string() })?;
        *field = value.to_string();
        Ok(())
    }

    fn read_output(&self, id: &str) -> Result<String> {
        self.fields
            .get(id)
            .cloned()
            .ok_or_else(|| Error::MissingElement { id: id.to_string() })
    }
}
