// src/gui/components/mod.rs
pub mod color_table;
pub mod output_field;
pub mod toolbar;
