// src/gui/actions.rs
//
// Button handlers. Each Load is a fresh page that fires exactly once.

use std::path::PathBuf;

use eframe::egui;

use crate::{
    document::HtmlDocument,
    file,
    config::consts::DEFAULT_OUT_FILE,
    page::Page,
};

use super::app::App;

pub fn load(app: &mut App) {
    let path = PathBuf::from(app.cfg.input_path.trim());
    logf!("Load: {}", path.display());

    let doc = match HtmlDocument::from_file(&path) {
        Ok(doc) => doc,
        Err(e) => {
            loge!("Load: {}: {e}", path.display());
            app.status(format!("Can't read {}: {e}", path.display()));
            return;
        }
    };

    let mut page = Page::new(doc, app.extract_options());
    match page.on_load() {
        Ok(Some(summary)) => {
            let msg = if summary.skipped.is_empty() {
                format!("Loaded {} color(s)", summary.records.len())
            } else {
                format!(
                    "Loaded {} color(s), skipped {} short row(s): {}",
                    summary.records.len(),
                    summary.skipped.len(),
                    summary.skipped.iter().map(|(i, _)| i.to_string()).collect::<Vec<_>>().join(", ")
                )
            };
            app.records = summary.records;
            app.skipped = summary.skipped;
            app.output = summary.json;
            app.page_html = Some(page.into_document().into_html());
            app.status(msg);
            app.save_config();
        }
        Ok(None) => {}
        Err(e) => {
            app.records.clear();
            app.skipped.clear();
            app.output.clear();
            app.page_html = None;
            app.status(format!("Error: {e}"));
        }
    }
}

pub fn copy(app: &mut App, ctx: &egui::Context) {
    if app.output.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: output field is empty");
        return;
    }
    ctx.copy_text(app.output.clone());
    logf!("Copy: {} byte(s)", app.output.len());
    app.status("Copied to clipboard");
}

pub fn export(app: &mut App) {
    if app.output.is_empty() {
        app.status("Nothing to export");
        return;
    }
    let res = file::resolve_out_path(&app.cfg.out_path, DEFAULT_OUT_FILE)
        .and_then(|path| file::write_text(&path, &app.output));
    match res {
        Ok(path) => {
            app.status(format!("Exported to {}", path.display()));
            app.save_config();
        }
        Err(e) => {
            loge!("Export: {e}");
            app.status(format!("Export error: {e}"));
        }
    }
}
