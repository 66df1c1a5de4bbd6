//! Error types for the Huffman compressor.

use thiserror::Error;

use crate::min_heap::HeapErr;

/// Every failure the core or its collaborators can surface.
///
/// `EmptyInput`, `MissingCode` and `InvariantViolation` come from the codec
/// engine; the remaining variants belong to the storage and driver layers.
#[derive(Debug, Error)]
pub enum Error {
    /// The frequency table has no entries, so there is nothing to build a tree from.
    #[error("empty input: the frequency table has no symbols")]
    EmptyInput,

    /// The encoder was asked to encode a symbol the codebook does not know.
    #[error("missing code for symbol {0}")]
    MissingCode(String),

    /// The tree, the heap or the codebook broke an internal contract.
    #[error("internal invariant violated: {0}")]
    InvariantViolation(String),

    /// A payload, codebook or input file could not be interpreted.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Bad command line or properties value.
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bincode error: {0}")]
    Bincode(#[from] bincode::Error),
}

impl From<HeapErr> for Error {
    fn from(e: HeapErr) -> Self {
        Error::InvariantViolation(e.to_string())
    }
}

impl Error {
    /// Process exit code a driver reports for this error.
    ///
    /// `MissingCode` maps to the invariant code: a driver always encodes with a
    /// codebook built from the same input, so a missing code there is a bug.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_) => 1,
            Error::Io(_) | Error::MalformedInput(_) | Error::Json(_) | Error::Bincode(_) => 2,
            Error::EmptyInput => 3,
            Error::MissingCode(_) | Error::InvariantViolation(_) => 4,
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
