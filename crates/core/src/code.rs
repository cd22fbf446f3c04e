//! Code table generation.
//!
//! Walks the encoding tree depth-first, appending a 0 bit when descending
//! left and a 1 bit when descending right, and records the accumulated path
//! at each leaf. The resulting code set is prefix-free by construction:
//! byte values live only at leaves, so no code can be an initial segment of
//! another.

use crate::tree::Node;

/// A single variable-length code: the low `len` bits of `bits`, emitted
/// MSB-first.
///
/// `u64` is wide enough: a code of length d needs a subtree frequency
/// pattern whose total grows like the Fibonacci sequence, and with totals
/// capped at u32 the depth cannot exceed 46.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Code {
    pub bits: u64,
    pub len: u8,
}

/// Mapping from byte value to its code, indexed directly by byte.
///
/// Built fresh per compression; decompression walks the tree instead and
/// never needs one.
#[derive(Debug, Clone)]
pub struct CodeTable {
    codes: [Option<Code>; 256],
}

impl CodeTable {
    /// Derive the code table for a tree.
    ///
    /// A lone-leaf root (single distinct byte) gets the one-bit code `0`:
    /// a tree with no internal node has no walkable path, and every symbol
    /// still has to occupy at least one payload bit for the decoder to
    /// count by.
    pub fn from_tree(root: &Node) -> Self {
        let mut table = Self {
            codes: [None; 256],
        };

        if let Node::Leaf { byte, .. } = root {
            table.codes[*byte as usize] = Some(Code { bits: 0, len: 1 });
            return table;
        }

        table.assign(root, 0, 0);
        table
    }

    fn assign(&mut self, node: &Node, bits: u64, len: u8) {
        match node {
            Node::Leaf { byte, .. } => {
                self.codes[*byte as usize] = Some(Code { bits, len });
            }
            Node::Internal { left, right, .. } => {
                self.assign(left, bits << 1, len + 1);
                self.assign(right, (bits << 1) | 1, len + 1);
            }
        }
    }

    /// Code for a byte value, if that byte occurs in the tree.
    pub fn get(&self, byte: u8) -> Option<Code> {
        self.codes[byte as usize]
    }

    /// All assigned (byte, code) pairs in ascending byte order.
    pub fn entries(&self) -> Vec<(u8, Code)> {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(b, c)| c.map(|code| (b as u8, code)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::build_tree;

    fn bit_string(code: Code) -> String {
        (0..code.len)
            .rev()
            .map(|i| if (code.bits >> i) & 1 == 1 { '1' } else { '0' })
            .collect()
    }

    #[test]
    fn test_known_codes() {
        // {a:4, b:3, c:2} merges c+b first, so a sits one level deep.
        let root = build_tree(&[(b'a', 4), (b'b', 3), (b'c', 2)]).unwrap();
        let table = CodeTable::from_tree(&root);

        assert_eq!(bit_string(table.get(b'a').unwrap()), "0");
        assert_eq!(bit_string(table.get(b'c').unwrap()), "10");
        assert_eq!(bit_string(table.get(b'b').unwrap()), "11");
        assert_eq!(table.get(b'z'), None);
    }

    #[test]
    fn test_single_byte_gets_one_bit() {
        let root = build_tree(&[(b'Q', 1000)]).unwrap();
        let table = CodeTable::from_tree(&root);

        let code = table.get(b'Q').unwrap();
        assert_eq!(code.len, 1);
        assert_eq!(code.bits, 0);
        assert_eq!(table.entries().len(), 1);
    }

    #[test]
    fn test_prefix_free() {
        let entries: Vec<(u8, u32)> = (0..=255u8).map(|b| (b, b as u32 + 1)).collect();
        let root = build_tree(&entries).unwrap();
        let table = CodeTable::from_tree(&root);

        let strings: Vec<String> = table
            .entries()
            .into_iter()
            .map(|(_, c)| bit_string(c))
            .collect();
        assert_eq!(strings.len(), 256);

        for (i, a) in strings.iter().enumerate() {
            for (j, b) in strings.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(a.as_str()), "{a} is a prefix of {b}");
                }
            }
        }
    }

    #[test]
    fn test_codes_nonempty_for_present_bytes() {
        let root = build_tree(&[(b'x', 1), (b'y', 2), (b'z', 4)]).unwrap();
        let table = CodeTable::from_tree(&root);

        for byte in [b'x', b'y', b'z'] {
            assert!(table.get(byte).unwrap().len > 0);
        }
    }
}
