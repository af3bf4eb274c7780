//! Error types for ebis-karekod

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid dispatch date: {0}")]
    InvalidDispatchDate(String),

    #[error("Invalid density class: {0} (expected N, H or A)")]
    InvalidDensityClass(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("QR encoding error: {0}")]
    Qr(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Preset not found: {0}")]
    PresetNotFound(String),

    #[error("CSV error: {0}")]
    Csv(String),
}

pub type Result<T> = std::result::Result<T, Error>;
