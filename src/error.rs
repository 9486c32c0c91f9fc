use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WebpifyError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Walkdir error: {0}")]
    Walkdir(#[from] walkdir::Error),

    #[error("Directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("WebP encoding failed: {0}")]
    Encode(String),

    #[error("Failed to get metadata for {}", .0.display())]
    Metadata(PathBuf),

    #[error("Invalid quality value: {0}. Must be between 1 and 100")]
    InvalidQuality(u8),
}

impl WebpifyError {
    /// The message without this enum's own prefix for wrapped errors, for
    /// callers that add a prefix of their own.
    pub fn detail(&self) -> String {
        match self {
            WebpifyError::Io(e) => e.to_string(),
            WebpifyError::Image(e) => e.to_string(),
            WebpifyError::Walkdir(e) => e.to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, WebpifyError>;

/// Why a single file could not be converted.
///
/// These never abort a batch; they are carried inside a
/// [`ConversionResult`](crate::converter::ConversionResult).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Unsupported format: {0}. Supported: png, jpeg, jpg, gif")]
    UnsupportedFormat(String),

    #[error("Image processing failed: {0}")]
    Processing(String),

    #[error("I/O error: {0}")]
    Storage(String),
}
