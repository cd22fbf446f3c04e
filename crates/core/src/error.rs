//! Error types for the huffpack codec.
//!
//! All operations return structured errors rather than panicking.
//! The `Display` strings double as the user-facing failure reasons
//! printed by the CLI.

use thiserror::Error;

/// Top-level error type for all codec operations.
///
/// Each variant corresponds to a specific failure domain:
/// - Input: the data handed to `compress` cannot be encoded
/// - Format: the container handed to `decompress` is malformed
/// - Payload: the bit stream ends before the declared symbol count
/// - I/O: file system operations
#[derive(Debug, Error)]
pub enum Error {
    /// Compression requested on a zero-length input; no output is produced.
    #[error("cannot compress an empty input")]
    EmptyInput,

    /// The container stores the symbol count as u32, so larger inputs
    /// cannot be represented.
    #[error("input of {0} bytes exceeds the 4 GiB container limit")]
    InputTooLarge(usize),

    /// The container header or frequency table failed validation.
    #[error("container format error: {0}")]
    Format(#[from] FormatError),

    /// The payload ran out of bits before the declared symbol count
    /// was decoded. The decoder stops rather than fabricating data.
    #[error("payload exhausted after {decoded} of {expected} symbols")]
    TruncatedPayload { expected: u32, decoded: u32 },

    /// A byte in the input has no code in the table. Unreachable when
    /// the table was built from a scan of the same input.
    #[error("no code assigned for byte {byte:#04x}")]
    MissingCode { byte: u8 },

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Container parsing errors.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Magic signature at the start of the container does not match.
    #[error("invalid magic: expected {expected:?}, got {actual:?}")]
    InvalidMagic { expected: [u8; 4], actual: [u8; 4] },

    /// Container is too short for the header or the declared table.
    #[error("container too short: need at least {required} bytes, got {actual}")]
    TooShort { required: usize, actual: usize },

    /// The frequency table declares zero entries.
    #[error("frequency table has no entries")]
    EmptyTable,

    /// Frequency table entries must be in ascending byte order; the
    /// rebuilt tree depends on it.
    #[error("frequency table not in ascending byte order at entry {index}")]
    TableOrder { index: usize },

    /// A table entry with a zero count carries no information and is
    /// never written by the encoder.
    #[error("frequency table entry {index} has a zero count")]
    ZeroCount { index: usize },

    /// The stored frequencies must sum to the declared symbol count.
    #[error("frequency sum {sum} does not match declared symbol count {declared}")]
    CountMismatch { sum: u64, declared: u32 },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
