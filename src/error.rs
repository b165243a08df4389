//! Error types for the signature-capture surface

use thiserror::Error;

/// Result type alias for pad operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the capture surface
#[derive(Error, Debug)]
pub enum Error {
    /// Export was requested before anything was drawn
    #[error("Nothing has been drawn yet")]
    EmptySignature,

    /// The platform failed to provide a drawing surface
    #[error("Drawing surface unavailable")]
    SurfaceUnavailable,

    /// Failed to encode the raster into an image format
    #[error("Image encoding failed: {0}")]
    EncodeError(String),

    /// A recorded stroke trace could not be parsed or replayed
    #[error("Invalid stroke trace: {0}")]
    TraceError(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}
