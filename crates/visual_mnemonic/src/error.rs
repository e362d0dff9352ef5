//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! invalid configuration (caught before any buffers are allocated), a ring search that ran
//! past the canvas, and palette names missing from the injected catalog.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("ring search exhausted at window {window} with {visited}/{total} pixels visited")]
    ExhaustedSearch {
        window: u64,
        visited: usize,
        total: usize,
    },

    #[error("palette '{name}' not found in catalog")]
    PaletteNotFound { name: String },

    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_owned())
    }
}
