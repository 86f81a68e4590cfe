// src/error.rs
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no element with id \"{id}\" in document")]
    MissingElement { id: String },

    #[error("element \"{id}\" is a <{tag}> and cannot hold a value")]
    NotWritable { id: String, tag: String },

    #[error("row {index} has {cells} cell(s), expected at least {expected}")]
    MalformedRow { index: usize, cells: usize, expected: usize },

    #[error("color \"{name}\": channel value \"{value}\" is not in 0..=255")]
    InvalidChannel { name: String, value: String },

    #[error("{0}")]
    Usage(String),

    #[error("no colors to draw")]
    EmptyPalette,

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}
