//! Compression and decompression orchestration.
//!
//! Both operations are linear pipelines over a byte slice:
//!
//! - compress: frequency scan -> tree -> code table -> header -> second
//!   pass over the input emitting codes -> flush
//! - decompress: parse container -> rebuild the identical tree from the
//!   stored frequency table -> bit-by-bit tree walk until the declared
//!   symbol count is reached
//!
//! Each call owns its own table, tree, and code table; nothing is shared
//! or cached across calls, so the codec is reentrant.

use crate::bitio::{BitReader, BitWriter};
use crate::code::CodeTable;
use crate::container::{self, Container};
use crate::error::{Error, Result};
use crate::freq::FrequencyTable;
use crate::tree::{build_tree, Node};

/// Compress `input` into a self-contained container.
///
/// # Errors
/// - `Error::EmptyInput` for a zero-length input; no output is produced
/// - `Error::InputTooLarge` if the length does not fit the u32 symbol count
pub fn compress(input: &[u8]) -> Result<Vec<u8>> {
    if input.is_empty() {
        return Err(Error::EmptyInput);
    }

    let freqs = FrequencyTable::scan(input)?;
    let entries = freqs.unique_entries();
    let root = build_tree(&entries)?;
    let table = CodeTable::from_tree(&root);

    let mut out = container::build_header(freqs.total(), &entries);

    // Second pass: emit each byte's code.
    let mut writer = BitWriter::new();
    for &byte in input {
        let code = table.get(byte).ok_or(Error::MissingCode { byte })?;
        writer.write_code(code.bits, code.len);
    }
    out.extend_from_slice(&writer.finish());

    Ok(out)
}

/// Decompress a container produced by [`compress`].
///
/// # Errors
/// - `Error::Format` if the header or frequency table is malformed
/// - `Error::TruncatedPayload` if the payload runs out of bits before the
///   declared symbol count is reached
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let container = Container::parse(data)?;
    let root = build_tree(&container.entries)?;

    let mut reader = BitReader::new(container.payload);

    // Every symbol consumes at least one bit, so the payload bounds how
    // many symbols can really decode; don't let the header alone size
    // the allocation.
    let capacity = (container.total_symbols as usize).min(container.payload.len() * 8);
    let mut out = Vec::with_capacity(capacity);

    while (out.len() as u32) < container.total_symbols {
        let mut node = &root;
        loop {
            let bit = reader.next_bit().ok_or(Error::TruncatedPayload {
                expected: container.total_symbols,
                decoded: out.len() as u32,
            })?;

            if let Node::Internal { left, right, .. } = node {
                node = if bit { right } else { left };
            }
            // A lone-leaf tree stays at the root; the bit is still
            // consumed, one per symbol, mirroring the encoder.
            if let Node::Leaf { byte, .. } = node {
                out.push(*byte);
                break;
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::{ENTRY_SIZE, HEADER_SIZE};

    #[test]
    fn test_empty_input_fails() {
        assert!(matches!(compress(b""), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_known_scenario_layout() {
        // {a:4, b:3, c:2} gives a=0, c=10, b=11: 14 payload bits, 2 bytes.
        let compressed = compress(b"aaaabbbcc").unwrap();

        assert_eq!(compressed.len(), HEADER_SIZE + 3 * ENTRY_SIZE + 2);

        let container = Container::parse(&compressed).unwrap();
        assert_eq!(container.total_symbols, 9);
        assert_eq!(container.entries.len(), 3);
        assert_eq!(container.payload, &[0b0000_1111, 0b1110_1000]);
    }

    #[test]
    fn test_round_trip() {
        let input = b"the quick brown fox jumps over the lazy dog";
        let decoded = decompress(&compress(input).unwrap()).unwrap();
        assert_eq!(decoded, input);
    }

    #[test]
    fn test_degenerate_alphabet_payload_is_counted_bits() {
        let input = vec![b'Z'; 20];
        let compressed = compress(&input).unwrap();

        // One bit per symbol: 20 bits -> 3 payload bytes.
        let container = Container::parse(&compressed).unwrap();
        assert_eq!(container.payload.len(), 3);

        assert_eq!(decompress(&compressed).unwrap(), input);
    }

    #[test]
    fn test_trailing_pad_bits_are_ignored() {
        // 9 one-bit symbols leave 7 pad bits in the final byte.
        let input = vec![b'p'; 9];
        let compressed = compress(&input).unwrap();
        assert_eq!(decompress(&compressed).unwrap(), input);
    }
}
