// src/gui/components/output_field.rs
//
// The output field plus Copy/Export.

use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Output");
    ui.horizontal(|ui| {
        if ui.button("Copy").clicked() {
            let ctx = ui.ctx().clone();
            actions::copy(app, &ctx);
        }
        if ui.button("Export").clicked() {
            actions::export(app);
        }
        ui.text_edit_singleline(&mut app.cfg.out_path);
    });
    ui.separator();

    egui::ScrollArea::vertical().id_salt("output_scroll").show(ui, |ui| {
        ui.add(
            egui::TextEdit::multiline(&mut app.output)
                .code_editor()
                .desired_width(f32::INFINITY)
                .desired_rows(24),
        );
    });
}
