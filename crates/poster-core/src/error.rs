// File: crates/poster-core/src/error.rs
// Summary: Typed error enums for dimensions, colors, image loading and configuration.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DimensionError {
    #[error("canvas must be non-empty, got {width}x{height}")]
    Empty { width: u32, height: u32 },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("empty color string")]
    Empty,
    #[error("invalid hex color '{0}'")]
    Hex(String),
    #[error("invalid functional color '{0}'")]
    Functional(String),
    #[error("unknown color name '{0}'")]
    Unknown(String),
}

/// Failure to produce a decoded map bitmap.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("io error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("decode failed: {0}")]
    Decode(#[from] image::ImageError),
    #[error("image has no pixels")]
    EmptyImage,
    #[error("skia rejected {width}x{height} raster")]
    Raster { width: u32, height: u32 },
    #[error("unsupported image source: {0}")]
    Unsupported(String),
    #[error("{0}")]
    Other(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("invalid dimensions: {0}")]
    Dimensions(#[from] DimensionError),
    #[error("invalid color for {field}: {source}")]
    Color {
        field: &'static str,
        #[source]
        source: ColorError,
    },
    #[error("invalid setting: {0}")]
    Invalid(String),
}
