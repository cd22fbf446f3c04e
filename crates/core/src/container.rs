//! On-disk container serialization and parsing.
//!
//! A container packages the compressed payload with the metadata needed to
//! rebuild the encoding tree:
//!
//! # Container Format
//!
//! ```text
//! +--------------------+
//! | Magic (4 bytes)    |  0x48 0x55 0x46 0x31 ("HUF1")
//! +--------------------+
//! | total_symbols (4)  |  u32 little-endian, original byte count
//! +--------------------+
//! | unique_count (2)   |  u16 little-endian, frequency table entries
//! +--------------------+
//! | frequency table    |  unique_count entries, each:
//! |                    |    byte value (1) + count (4, u32 LE)
//! |                    |  ascending byte value order
//! +--------------------+
//! | payload            |  MSB-first bit-packed codes; trailing bits
//! | (variable)         |  of the final byte are zero padding
//! +--------------------+
//! ```
//!
//! The frequency table is the only codec metadata: tree construction is
//! deterministic, so storing counts is enough to rebuild the encoder's
//! exact tree. The table order doubles as the tree builder's seed order,
//! which is why the parser insists on it.

use crate::error::{FormatError, Result};

/// Magic signature for containers: "HUF1"
pub const MAGIC: [u8; 4] = [0x48, 0x55, 0x46, 0x31];

/// Fixed header size in bytes (magic + total + unique count)
pub const HEADER_SIZE: usize = 10;

/// Size of one frequency table entry in bytes
pub const ENTRY_SIZE: usize = 5;

/// A parsed container, borrowing the payload from the input buffer.
#[derive(Debug, Clone)]
pub struct Container<'a> {
    /// Number of original bytes the payload decodes to
    pub total_symbols: u32,

    /// (byte, count) pairs in ascending byte order
    pub entries: Vec<(u8, u32)>,

    /// Bit-packed codes
    pub payload: &'a [u8],
}

/// Serialize the header and frequency table, leaving room for the payload
/// to be appended.
///
/// `entries` must be the ascending-order output of
/// [`FrequencyTable::unique_entries`](crate::freq::FrequencyTable::unique_entries).
pub fn build_header(total_symbols: u32, entries: &[(u8, u32)]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(HEADER_SIZE + entries.len() * ENTRY_SIZE);

    bytes.extend_from_slice(&MAGIC);
    bytes.extend_from_slice(&total_symbols.to_le_bytes());
    bytes.extend_from_slice(&(entries.len() as u16).to_le_bytes());

    for &(byte, count) in entries {
        bytes.push(byte);
        bytes.extend_from_slice(&count.to_le_bytes());
    }

    bytes
}

impl<'a> Container<'a> {
    /// Parse and validate a container.
    ///
    /// # Errors
    /// - `FormatError::TooShort` if the buffer cannot hold the header or
    ///   the declared table
    /// - `FormatError::InvalidMagic` if the signature does not match
    /// - `FormatError::EmptyTable` if the table declares zero entries
    /// - `FormatError::TableOrder` if byte values are not strictly ascending
    /// - `FormatError::ZeroCount` if an entry has a zero count
    /// - `FormatError::CountMismatch` if the counts do not sum to
    ///   `total_symbols`
    pub fn parse(bytes: &'a [u8]) -> Result<Self> {
        if bytes.len() < HEADER_SIZE {
            return Err(FormatError::TooShort {
                required: HEADER_SIZE,
                actual: bytes.len(),
            }
            .into());
        }

        let magic: [u8; 4] = bytes[0..4].try_into().unwrap();
        if magic != MAGIC {
            return Err(FormatError::InvalidMagic {
                expected: MAGIC,
                actual: magic,
            }
            .into());
        }

        let total_symbols = u32::from_le_bytes(bytes[4..8].try_into().unwrap());
        let unique_count = u16::from_le_bytes(bytes[8..10].try_into().unwrap()) as usize;

        if unique_count == 0 {
            return Err(FormatError::EmptyTable.into());
        }

        let table_end = HEADER_SIZE + unique_count * ENTRY_SIZE;
        if bytes.len() < table_end {
            return Err(FormatError::TooShort {
                required: table_end,
                actual: bytes.len(),
            }
            .into());
        }

        let mut entries = Vec::with_capacity(unique_count);
        let mut sum = 0u64;

        for index in 0..unique_count {
            let offset = HEADER_SIZE + index * ENTRY_SIZE;
            let byte = bytes[offset];
            let count = u32::from_le_bytes(
                bytes[offset + 1..offset + 5].try_into().unwrap(),
            );

            if let Some(&(prev, _)) = entries.last() {
                if byte <= prev {
                    return Err(FormatError::TableOrder { index }.into());
                }
            }
            if count == 0 {
                return Err(FormatError::ZeroCount { index }.into());
            }

            sum += count as u64;
            entries.push((byte, count));
        }

        if sum != total_symbols as u64 {
            return Err(FormatError::CountMismatch {
                sum,
                declared: total_symbols,
            }
            .into());
        }

        Ok(Self {
            total_symbols,
            entries,
            payload: &bytes[table_end..],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn sample_container() -> Vec<u8> {
        let mut bytes = build_header(9, &[(b'a', 4), (b'b', 3), (b'c', 2)]);
        bytes.extend_from_slice(&[0b0000_1111, 0b1010_0000]);
        bytes
    }

    #[test]
    fn test_header_layout() {
        let bytes = build_header(9, &[(b'a', 4), (b'b', 3), (b'c', 2)]);

        assert_eq!(&bytes[0..4], &MAGIC);
        assert_eq!(u32::from_le_bytes(bytes[4..8].try_into().unwrap()), 9);
        assert_eq!(u16::from_le_bytes(bytes[8..10].try_into().unwrap()), 3);
        assert_eq!(bytes.len(), HEADER_SIZE + 3 * ENTRY_SIZE);
        assert_eq!(bytes[10], b'a');
        assert_eq!(u32::from_le_bytes(bytes[11..15].try_into().unwrap()), 4);
    }

    #[test]
    fn test_parse_round_trip() {
        let bytes = sample_container();
        let container = Container::parse(&bytes).unwrap();

        assert_eq!(container.total_symbols, 9);
        assert_eq!(container.entries, vec![(b'a', 4), (b'b', 3), (b'c', 2)]);
        assert_eq!(container.payload, &[0b0000_1111, 0b1010_0000]);
    }

    #[test]
    fn test_invalid_magic() {
        let mut bytes = sample_container();
        bytes[0] = b'X';

        let result = Container::parse(&bytes);
        assert!(matches!(
            result,
            Err(Error::Format(FormatError::InvalidMagic { .. }))
        ));
    }

    #[test]
    fn test_too_short_for_header() {
        let result = Container::parse(&MAGIC[..]);
        assert!(matches!(
            result,
            Err(Error::Format(FormatError::TooShort { required: 10, .. }))
        ));
    }

    #[test]
    fn test_too_short_for_table() {
        let bytes = sample_container();
        let result = Container::parse(&bytes[..HEADER_SIZE + ENTRY_SIZE]);
        assert!(matches!(
            result,
            Err(Error::Format(FormatError::TooShort { .. }))
        ));
    }

    #[test]
    fn test_empty_table_rejected() {
        let bytes = build_header(0, &[]);
        let result = Container::parse(&bytes);
        assert!(matches!(
            result,
            Err(Error::Format(FormatError::EmptyTable))
        ));
    }

    #[test]
    fn test_unsorted_table_rejected() {
        let mut bytes = build_header(2, &[(b'b', 1), (b'a', 1)]);
        bytes.push(0);

        let result = Container::parse(&bytes);
        assert!(matches!(
            result,
            Err(Error::Format(FormatError::TableOrder { index: 1 }))
        ));
    }

    #[test]
    fn test_zero_count_rejected() {
        let mut bytes = build_header(1, &[(b'a', 1), (b'b', 0)]);
        bytes.push(0);

        let result = Container::parse(&bytes);
        assert!(matches!(
            result,
            Err(Error::Format(FormatError::ZeroCount { index: 1 }))
        ));
    }

    #[test]
    fn test_count_mismatch_rejected() {
        let mut bytes = build_header(100, &[(b'a', 4), (b'b', 3), (b'c', 2)]);
        bytes.push(0);

        let result = Container::parse(&bytes);
        assert!(matches!(
            result,
            Err(Error::Format(FormatError::CountMismatch { sum: 9, declared: 100 }))
        ));
    }

    #[test]
    fn test_empty_payload_is_allowed_by_parser() {
        // A container whose payload was truncated to nothing still parses;
        // the decoder reports the symbol shortfall instead.
        let bytes = build_header(9, &[(b'a', 4), (b'b', 3), (b'c', 2)]);
        let container = Container::parse(&bytes).unwrap();
        assert!(container.payload.is_empty());
    }
}
