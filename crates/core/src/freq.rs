//! Per-byte frequency counting.
//!
//! The frequency table is the codec's only persisted metadata: the encoding
//! tree is rebuilt from it on decompression, so the table (and the order its
//! entries are enumerated in) fully determines the code assignment.

use crate::error::{Error, Result};

/// Occurrence counts for each possible byte value.
///
/// Backed by a fixed 256-slot array for O(1) lookup; the byte domain is
/// bounded and dense, so a general map buys nothing.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    counts: [u32; 256],
    total: u32,
}

impl FrequencyTable {
    /// Count byte occurrences in a single linear pass.
    ///
    /// # Errors
    /// Returns `Error::InputTooLarge` if the input length does not fit the
    /// container's u32 symbol count. Individual counts then fit u32 as well.
    pub fn scan(input: &[u8]) -> Result<Self> {
        if input.len() > u32::MAX as usize {
            return Err(Error::InputTooLarge(input.len()));
        }

        let mut counts = [0u32; 256];
        for &byte in input {
            counts[byte as usize] += 1;
        }

        Ok(Self {
            counts,
            total: input.len() as u32,
        })
    }

    /// Occurrence count for a single byte value.
    pub fn get(&self, byte: u8) -> u32 {
        self.counts[byte as usize]
    }

    /// Total number of bytes scanned.
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Number of distinct byte values with a nonzero count.
    pub fn unique_count(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// True if nothing was scanned.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// All (byte, count) pairs with count > 0, in ascending byte order.
    ///
    /// The ordering is load-bearing: it is the header serialization order,
    /// and it seeds the merge heap, which fixes how frequency ties resolve.
    pub fn unique_entries(&self) -> Vec<(u8, u32)> {
        (0u16..=255)
            .map(|b| b as u8)
            .filter(|&b| self.counts[b as usize] > 0)
            .map(|b| (b, self.counts[b as usize]))
            .collect()
    }
}
