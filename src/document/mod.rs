// src/document/mod.rs
// The page as the extractor sees it: rows to read, one field to write.

mod html;
mod memory;

pub use html::HtmlDocument;
pub use memory::MemoryDocument;

use crate::error::Result;

/// One table row: cell texts in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<String>,
}

impl Row {
    pub fn new(cells: Vec<String>) -> Self { Self { cells } }

    /// Text of cell `idx`, or `None` past the end of a short row.
    pub fn cell(&self, idx: usize) -> Option<&str> {
        self.cells.get(idx).map(String::as_str)
    }

    pub fn cells(&self) -> &[String] { &self.cells }
    pub fn len(&self) -> usize { self.cells.len() }
    pub fn is_empty(&self) -> bool { self.cells.is_empty() }
}

impl From<Vec<String>> for Row {
    fn from(cells: Vec<String>) -> Self { Self::new(cells) }
}

impl<S: Into<String>> FromIterator<S> for Row {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Read-only access to the rows under an element.
pub trait RowSource {
    /// Direct child rows of the element `root_id`, in order.
    /// `Error::MissingElement` if there is no such element.
    fn rows(&self, root_id: &str) -> Result<Vec<Row>>;
}

/// A writable text field addressed by id.
pub trait OutputField {
    fn write_output(&mut self, id: &str, value: &str) -> Result<()>;
    fn read_output(&self, id: &str) -> Result<String>;
}

/// Everything a page load needs.
pub trait Document: RowSource + OutputField {}

impl<T: RowSource + OutputField> Document for T {}
