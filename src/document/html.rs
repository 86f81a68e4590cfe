// src/document/html.rs
use std::{fs, path::Path};

use super::{OutputField, Row, RowSource};
use crate::core::html::{self, Element};
use crate::core::sanitize::decode_entities;
use crate::error::{Error, Result};

/// A page as HTML source. Writing the output field rewrites the source,
/// so `html()` afterwards is the filled-in page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HtmlDocument {
    html: String,
}

impl HtmlDocument {
    pub fn new<S: Into<String>>(html: S) -> Self {
        Self { html: html.into() }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(fs::read_to_string(path)?))
    }

    pub fn html(&self) -> &str { &self.html }

    pub fn into_html(self) -> String { self.html }

    fn element(&self, id: &str) -> Result<Element> {
        html::find_by_id(&self.html, id).ok_or_else(|| Error::MissingElement { id: id.to_string() })
    }
}

impl RowSource for HtmlDocument {
    fn rows(&self, root_id: &str) -> Result<Vec<Row>> {
        let root = self.element(root_id)?;
        let rows = html::children(&self.html, &root, &["tr"])
            .iter()
            .map(|tr| {
                html::children(&self.html, tr, &["td", "th"])
                    .into_iter()
                    .map(|cell| html::text_content(&self.html, cell.inner))
                    .collect::<Row>()
            })
            .collect();
        Ok(rows)
    }
}

impl OutputField for HtmlDocument {
    fn write_output(&mut self, id: &str, value: &str) -> Result<()> {
        let el = self.element(id)?;
        self.html = match el.name.as_str() {
            "textarea" => html::replace_inner(&self.html, &el, value),
            "input" => html::replace_attr(&self.html, &el, "value", value),
            other => return Err(Error::NotWritable { id: id.to_string(), tag: other.to_string() }),
        };
        Ok(())
    }

    fn read_output(&self, id: &str) -> Result<String> {
        let el = self.element(id)?;
        match el.name.as_str() {
            "textarea" => {
                // a newline right after the open tag is not part of the value
                let raw = &self.html[el.inner];
                let raw = raw.strip_prefix("\r\n").or_else(|| raw.strip_prefix('\n')).unwrap_or(raw);
                Ok(decode_entities(raw))
            }
            "input" => Ok(html::attr_value(&self.html[el.open], "value").unwrap_or_default()),
            other => Err(Error::NotWritable { id: id.to_string(), tag: other.to_string() }),
        }
    }
}
