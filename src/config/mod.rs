// src/config/mod.rs

pub mod consts;
pub mod gui_config;
pub mod options;
