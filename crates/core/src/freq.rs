//! Symbol frequency counting.
//!
//! A `FrequencyTable` is a flat 256-entry array indexed directly by byte
//! value; no hashing, one counting pass. The sum of all counts equals the
//! input length.

use crate::ALPHABET_SIZE;

/// Occurrence counts for every symbol of the byte alphabet.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    counts: [u64; ALPHABET_SIZE],
}

impl FrequencyTable {
    /// Count symbol occurrences in `input` with a single pass.
    pub fn from_bytes(input: &[u8]) -> Self {
        let mut counts = [0u64; ALPHABET_SIZE];
        for &byte in input {
            counts[byte as usize] += 1;
        }
        Self { counts }
    }

    /// Occurrence count for `symbol`.
    pub fn get(&self, symbol: u8) -> u64 {
        self.counts[symbol as usize]
    }

    /// Sum of all counts (equals the input length).
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Number of symbols that occur at least once.
    pub fn distinct_symbols(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Iterate over `(symbol, count)` pairs with non-zero counts, in
    /// ascending symbol order. This order is what makes trie construction
    /// deterministic.
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &c)| c > 0)
            .map(|(s, &c)| (s as u8, c))
    }
}
