// src/config/gui_config.rs
use std::{fs, io, path::Path};

use super::consts::DEFAULT_OUT_FILE;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuiConfig {
    pub strict: bool,
    pub pretty: bool,
    pub input_path: String,
    pub out_path: String,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            strict: false,
            pretty: false,
            input_path: String::new(),
            out_path: DEFAULT_OUT_FILE.into(),
        }
    }
}

/// Missing or unreadable file gives the defaults; unknown keys are ignored.
pub fn load<P: AsRef<Path>>(path: P) -> GuiConfig {
    match fs::read_to_string(path) {
        Ok(text) => parse(&text),
        Err(_) => GuiConfig::default(),
    }
}

pub fn parse(text: &str) -> GuiConfig {
    let mut cfg = GuiConfig::default();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        let Some((key, val)) = line.split_once('=') else { continue };
        let val = val.trim();
        match key.trim() {
            "strict" => cfg.strict = flag(val),
            "pretty" => cfg.pretty = flag(val),
            "input" => cfg.input_path = val.to_string(),
            "out_path" => cfg.out_path = val.to_string(),
            _ => {}
        }
    }
    cfg
}

pub fn render(cfg: &GuiConfig) -> String {
    let mut s = String::new();
    s.push_str(&format!("strict={}\n", cfg.strict as u8));
    s.push_str(&format!("pretty={}\n", cfg.pretty as u8));
    if !cfg.input_path.is_empty() {
        s.push_str(&format!("input={}\n", cfg.input_path));
    }
    s.push_str(&format!("out_path={}\n", cfg.out_path));
    s
}

pub fn save<P: AsRef<Path>>(path: P, cfg: &GuiConfig) -> io::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, render(cfg))
}

fn flag(val: &str) -> bool {
    val == "1" || val.eq_ignore_ascii_case("true")
}
