//! Code table derivation: trie -> symbol lookup table.
//!
//! A `Code` is the root-to-leaf path packed into a `(bits, len)` pair
//! (left = 0, right = 1, most significant bit first). The reference
//! implementation grows text strings here; packing into an integer gives
//! identical bit order without the allocations.

use crate::error::{Error, Result};
use crate::trie::Node;
use crate::ALPHABET_SIZE;

/// One symbol's variable-length bit code.
///
/// The low `len` bits of `bits` are the code, MSB-first, which is exactly
/// what `BitWriter::write_bits` expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Code {
    pub bits: u64,
    pub len: u8,
}

/// Symbol -> code lookup table, read-only during encoding.
///
/// Symbols absent from the input have no entry.
#[derive(Debug, Clone)]
pub struct CodeTable {
    codes: [Option<Code>; ALPHABET_SIZE],
}

impl CodeTable {
    /// The code for `symbol`, if it occurred in the input.
    pub fn get(&self, symbol: u8) -> Option<Code> {
        self.codes[symbol as usize]
    }

    /// Iterate over `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Code)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(s, c)| c.map(|code| (s as u8, code)))
    }
}

/// Walk the trie depth-first and record each leaf's accumulated path.
///
/// Every symbol present in the trie gets exactly one code; the set is
/// prefix-free because only leaves carry symbols.
///
/// # Errors
/// `Error::CodeTooLong` if a path exceeds the 64-bit packed form. The trie
/// builder cannot produce such a path for any input within the 32-bit
/// length cap, so this only fires on a broken or hostile trie.
pub fn derive_codes(root: &Node) -> Result<CodeTable> {
    let mut table = CodeTable {
        codes: [None; ALPHABET_SIZE],
    };
    walk(root, 0, 0, &mut table)?;
    Ok(table)
}

fn walk(node: &Node, bits: u64, len: u8, table: &mut CodeTable) -> Result<()> {
    match node {
        Node::Leaf { symbol } => {
            table.codes[*symbol as usize] = Some(Code { bits, len });
            Ok(())
        }
        Node::Internal { left, right } => {
            if len == 64 {
                return Err(Error::CodeTooLong {
                    length: len as usize + 1,
                });
            }
            walk(left, bits << 1, len + 1, table)?;
            walk(right, (bits << 1) | 1, len + 1, table)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::FrequencyTable;
    use crate::trie::build_trie;

    fn codes_for(input: &[u8]) -> CodeTable {
        let root = build_trie(&FrequencyTable::from_bytes(input)).unwrap();
        derive_codes(&root).unwrap()
    }

    fn is_prefix(shorter: Code, longer: Code) -> bool {
        shorter.len <= longer.len && longer.bits >> (longer.len - shorter.len) == shorter.bits
    }

    #[test]
    fn every_input_symbol_gets_a_code() {
        let table = codes_for(b"ABRACADABRA");
        for symbol in [b'A', b'B', b'R', b'C', b'D'] {
            assert!(table.get(symbol).is_some());
        }
        assert!(table.get(b'Z').is_none());
        assert_eq!(table.iter().count(), 5);
    }

    #[test]
    fn codes_are_prefix_free() {
        let table = codes_for(b"ABRACADABRA");
        let codes: Vec<(u8, Code)> = table.iter().collect();
        for (i, &(_, a)) in codes.iter().enumerate() {
            for &(_, b) in codes.iter().skip(i + 1) {
                assert!(!is_prefix(a, b));
                assert!(!is_prefix(b, a));
            }
        }
    }

    #[test]
    fn frequent_symbols_get_shorter_codes() {
        let table = codes_for(b"ABRACADABRA");
        let a = table.get(b'A').unwrap();
        let c = table.get(b'C').unwrap();
        let d = table.get(b'D').unwrap();
        assert!(a.len < c.len);
        assert!(a.len < d.len);
    }

    #[test]
    fn single_symbol_code_is_one_bit() {
        let table = codes_for(&[0x41; 1000]);
        let code = table.get(0x41).unwrap();
        assert_eq!(code.len, 1);
    }

    #[test]
    fn full_alphabet_gets_eight_bit_codes() {
        // uniform frequencies over all 256 symbols: a perfect tree
        let all: Vec<u8> = (0..=255).collect();
        let table = codes_for(&all);
        for (_, code) in table.iter() {
            assert_eq!(code.len, 8);
        }
    }
}
