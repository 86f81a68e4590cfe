// src/page.rs
// A loaded page: the extractor fires once when the host says the page is ready.

use crate::config::options::ExtractOptions;
use crate::document::Document;
use crate::error::Result;
use crate::extract::{self, Summary};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageState {
    Idle,
    Done,
}

pub struct Page<D> {
    doc: D,
    opts: ExtractOptions,
    state: PageState,
}

impl<D: Document> Page<D> {
    pub fn new(doc: D, opts: ExtractOptions) -> Self {
        Self { doc, opts, state: PageState::Idle }
    }

    /// The page-ready signal. The first call runs the extraction; every later
    /// call returns `Ok(None)` and leaves the document alone. A failed run
    /// still counts as the one run.
    pub fn on_load(&mut self) -> Result<Option<Summary>> {
        if self.state == PageState::Done {
            logd!("on_load: page already loaded, ignoring");
            return Ok(None);
        }
        self.state = PageState::Done;
        extract::run(&mut self.doc, &self.opts).map(Some)
    }

    pub fn state(&self) -> PageState { self.state }
    pub fn document(&self) -> &D { &self.doc }
    pub fn into_document(self) -> D { self.doc }
}
