//! Crate-wide error type.

use alloc::string::String;
use core::convert::Infallible;
use thiserror_no_std::Error;

/// Errors raised outside of the dispatch and layout paths.
///
/// Dispatch and layout are infallible; drawing failures surface as the
/// draw target's own `DrawTarget::Error`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// The asset provider has no image under this identifier.
    #[error("Asset not found: {id}")]
    AssetNotFound { id: String },

    /// Pixel data does not match the declared bitmap size.
    #[error("Invalid bitmap: expected {expected} pixels, got {actual}")]
    InvalidBitmap { expected: usize, actual: usize },

    /// The host environment failed to present or deliver frames.
    #[error("Host error: {0}")]
    Host(String),
}

impl From<Infallible> for Error {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
