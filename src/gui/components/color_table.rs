// src/gui/components/color_table.rs
//
// Preview of the extracted records. Purely a view.

use eframe::egui::{self, Color32, Sense};
use egui_extras::{Column, TableBuilder};

use crate::{color::ColorRecord, gui::app::App};

const HEADERS: [&str; 6] = ["", "Name", "Code", "R", "G", "B"];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.records.is_empty() {
        ui.label("No colors loaded.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::exact(22.0))
        .column(Column::auto().resizable(true).at_least(120.0))
        .column(Column::auto().at_least(80.0))
        .columns(Column::auto().at_least(36.0), 3)
        .header(20.0, |mut header| {
            for h in HEADERS {
                header.col(|ui| { ui.strong(h); });
            }
        })
        .body(|body| {
            body.rows(18.0, app.records.len(), |mut row| {
                let Some(rec) = app.records.get(row.index()) else { return };
                row.col(|ui| chip(ui, rec));
                row.col(|ui| { ui.label(&rec.name); });
                row.col(|ui| { ui.monospace(&rec.color); });
                for ch in &rec.rgb {
                    row.col(|ui| { ui.monospace(ch); });
                }
            });
        });
}

/// Small filled square in the row's color; nothing if the channels aren't numbers.
fn chip(ui: &mut egui::Ui, rec: &ColorRecord) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(16.0, 14.0), Sense::hover());
    let parsed: Vec<u8> = rec.rgb.iter().filter_map(|c| c.trim().parse().ok()).collect();
    if let [r, g, b] = parsed[..] {
        ui.painter().rect_filled(rect, 2.0, Color32::from_rgb(r, g, b));
    }
}
