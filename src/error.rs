//! Error types for frame effects.

use thiserror::Error;

/// Error type for frame effects.
///
/// Only buffer preconditions and the image I/O layer can fail. Numeric edge
/// cases (zero divisors, out-of-range coordinates, extreme parameters) are
/// resolved inside the transforms.
#[derive(Error, Debug)]
pub enum FxError {
    /// Buffer length does not match `rows * cols * 3`.
    #[error("malformed buffer: {len} bytes cannot hold a {rows}x{cols} BGR frame")]
    MalformedBuffer { len: usize, rows: usize, cols: usize },

    /// Dimensions that cannot describe any buffer.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Image decoding/encoding failed (binary surface only).
    #[error("image error: {0}")]
    Image(String),
}

/// Result type for frame effects.
pub type FxResult<T> = Result<T, FxError>;
