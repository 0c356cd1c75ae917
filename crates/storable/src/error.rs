//! Storable codec error type.

use geopack_buffers::BufferError;
use thiserror::Error;

/// Error type for storable encoding/decoding operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StorableError {
    /// A primitive or block read failed at the buffer layer.
    #[error("{0}")]
    Buffer(#[from] BufferError),
    /// An envelope declared a negative body size or one past the hard
    /// ceiling. Raised before any body bytes are touched.
    #[error("declared body size {0} is negative or exceeds the limit")]
    OversizedBody(i32),
}
