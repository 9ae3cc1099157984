//! Error types for rendering and container writing.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while validating a render spec or writing a container.
///
/// All errors are fatal to the current render: there are no retries and no
/// partial-result recovery. A render that fails mid-write leaves a truncated
/// file that callers should discard.
#[derive(Debug, Error)]
pub enum Error {
    /// A render parameter was rejected before any bytes were written.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Only 16-bit signed PCM is implemented; wider depths are a documented
    /// extension point, not a supported input.
    #[error("unsupported bit depth: {0} bits per sample (only 16-bit PCM is supported)")]
    UnsupportedFormat(u16),

    /// The sink could not be opened or written.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
