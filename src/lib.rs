// src/lib.rs

#[macro_use]
pub mod log;

pub mod cli;
pub mod color;
pub mod config;
pub mod core;
pub mod document;
pub mod error;
pub mod extract;
pub mod file;
pub mod gui;
pub mod page;
pub mod palette;
pub mod swatch;

pub use color::ColorRecord;
pub use config::options::{ExtractOptions, RowPolicy};
pub use document::{Document, HtmlDocument, MemoryDocument, OutputField, Row, RowSource};
pub use error::{Error, Result};
pub use extract::{extract_records, run, to_json, Extraction, Summary};
pub use page::{Page, PageState};
