// src/gui/components/toolbar.rs

use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Page:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.cfg.input_path)
                .hint_text("index.html")
                .desired_width(320.0),
        );
        let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Load").clicked() || enter {
            actions::load(app);
        }

        ui.separator();

        // Options apply on the next Load
        if ui.checkbox(&mut app.cfg.strict, "Strict rows").changed() {
            logf!("UI: strict → {}", app.cfg.strict);
        }
        if ui.checkbox(&mut app.cfg.pretty, "Pretty JSON").changed() {
            logf!("UI: pretty → {}", app.cfg.pretty);
        }
    });
}
