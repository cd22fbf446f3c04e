//! huffpack-core: lossless byte-stream compression with static Huffman coding
//!
//! This library compresses arbitrary byte sequences by counting per-byte
//! frequencies, building a prefix-free code from a minimum-frequency merge
//! tree, and bit-packing the coded input into a self-describing container.
//! Decompression rebuilds the identical tree from the frequency table stored
//! in the container header and walks it bit by bit.
//!
//! # Architecture
//!
//! The codec is assembled from small modules in dependency order:
//! - `freq`: per-byte frequency counting
//! - `heap`: the min-heap that drives tree construction
//! - `tree`: the leaf/internal node sum type and the merge loop
//! - `code`: byte -> bit-sequence table derived from the tree
//! - `bitio`: MSB-first bit packing and unpacking
//! - `container`: the on-disk format (header, frequency table, payload)
//! - `codec`: compress/decompress orchestration
//! - `stats`: input/output size accounting
//!
//! # Design Principles
//!
//! - **No panics**: all failure modes are structured errors
//! - **Deterministic**: identical input yields a byte-identical container,
//!   and the stored frequency table alone reproduces the encoder's tree
//! - **Single-shot**: each call owns its own state; nothing persists
//!   between operations

pub mod bitio;
pub mod code;
pub mod codec;
pub mod container;
pub mod error;
pub mod freq;
pub mod heap;
pub mod stats;
pub mod tree;

// Re-export commonly used types
pub use codec::{compress, decompress};
pub use error::{Error, FormatError, Result};
pub use stats::CompressionStats;
