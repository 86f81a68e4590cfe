// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    color::ColorRecord,
    config::{
        consts::GUI_CONFIG_FILE,
        gui_config::{self, GuiConfig},
        options::ExtractOptions,
    },
};

use super::{actions, components};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let cfg = gui_config::load(GUI_CONFIG_FILE);
    eframe::run_native(
        "Saved Colors",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(cfg)))),
    )?;
    Ok(())
}

pub struct App {
    pub cfg: GuiConfig,

    // result of the last page load
    pub records: Vec<ColorRecord>,
    pub skipped: Vec<(usize, usize)>,
    /// The output field: JSON text, editable like the page's textarea
    pub output: String,
    /// Source of the loaded page with the output field filled in
    pub page_html: Option<String>,

    status: String,
}

impl App {
    pub fn new(cfg: GuiConfig) -> Self {
        logf!("Init: input={:?}, strict={}, pretty={}", cfg.input_path, cfg.strict, cfg.pretty);
        let mut app = Self {
            cfg,
            records: Vec::new(),
            skipped: Vec::new(),
            output: String::new(),
            page_html: None,
            status: "Idle".into(),
        };
        if !app.cfg.input_path.is_empty() {
            actions::load(&mut app);
        }
        app
    }

    pub fn extract_options(&self) -> ExtractOptions {
        let mut opts = ExtractOptions { pretty: self.cfg.pretty, ..ExtractOptions::default() };
        if self.cfg.strict {
            opts = opts.strict();
        }
        opts
    }

    pub fn status<S: Into<String>>(&mut self, msg: S) {
        self.status = msg.into();
    }

    pub fn save_config(&self) {
        if let Err(e) = gui_config::save(GUI_CONFIG_FILE, &self.cfg) {
            loge!("Config: save failed: {e}");
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            components::toolbar::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(format!("Status: {}", self.status));
        });

        egui::SidePanel::right("output")
            .resizable(true)
            .default_width(360.0)
            .show(ctx, |ui| {
                components::output_field::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::color_table::draw(ui, self);
        });
    }
}
