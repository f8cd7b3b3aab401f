//! Common error types.

use std::path::Path;

/// A shortcut type equivalent to `Result<T, cardforge::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error that occurs within the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown texture: {0}")]
    UnknownTexture(String),
    #[error("invalid texture size {0}x{1}")]
    InvalidTextureSize(u32, u32),
    #[error("unknown stat: {0}")]
    UnknownStat(String),
    #[error("featured stats are full, at most {0} can be selected")]
    FeaturedStatsFull(usize),
    #[error("stat `{0}` is already featured")]
    DuplicateFeaturedStat(String),
    #[error("cairo error: {0}")]
    CairoError(#[from] cairo::Error),
    #[error("image surface is in use: {0}")]
    SurfaceBorrowed(#[from] cairo::BorrowError),
    #[error("libvips error: {0}")]
    VipsError(String),
    #[error("failed to open image {0}: {1}")]
    FailedOpenImage(String, String),
    #[error("failed to write image {0}: {1}")]
    FailedWriteImage(String, String),
    #[error("failed to open config {0}: {1}")]
    FailedOpenConfig(String, String),
    #[error("failed to open card {0}: {1}")]
    FailedOpenCard(String, String),
    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),
    #[error("missing environment variable: {0}")]
    MissingVariable(&'static str),
}

impl Error {
    pub fn open_image(path: impl AsRef<Path>, e: impl ToString) -> Self {
        Self::FailedOpenImage(path.as_ref().display().to_string(), e.to_string())
    }

    pub fn write_image(path: impl AsRef<Path>, e: impl ToString) -> Self {
        Self::FailedWriteImage(path.as_ref().display().to_string(), e.to_string())
    }

    pub fn open_config(path: impl AsRef<Path>, e: impl ToString) -> Self {
        Self::FailedOpenConfig(path.as_ref().display().to_string(), e.to_string())
    }

    pub fn open_card(path: impl AsRef<Path>, e: impl ToString) -> Self {
        Self::FailedOpenCard(path.as_ref().display().to_string(), e.to_string())
    }
}
