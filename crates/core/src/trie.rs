//! Huffman trie: construction and bitstream (de)serialization.
//!
//! The trie is an owned binary tree; each node is either a leaf carrying a
//! symbol or an internal node owning two children. Frequencies only matter
//! while the tree is being built, so they live in the heap entries rather
//! than the finished nodes.
//!
//! # Serialized form
//!
//! Pre-order, shape and content interleaved:
//! - internal node: a single `0` bit, then the left subtree, then the right
//! - leaf: a single `1` bit, then the 8-bit symbol value
//!
//! The number of bits consumed on decode is determined entirely by the
//! trie's own structure, so no length prefix is needed.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::bitio::{BitReader, BitWriter};
use crate::error::{CorruptDataError, InvalidInputError, Result};
use crate::freq::FrequencyTable;
use crate::ALPHABET_SIZE;

/// A node of the Huffman trie. Only leaves carry symbols, which is what
/// makes the derived codes prefix-free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf { symbol: u8 },
    Internal { left: Box<Node>, right: Box<Node> },
}

impl Node {
    /// Number of leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Serialize this subtree into `writer`, pre-order.
    pub fn write_to(&self, writer: &mut BitWriter) -> Result<()> {
        match self {
            Node::Leaf { symbol } => {
                writer.write_bit(true)?;
                writer.write_bits(*symbol as u64, 8)?;
            }
            Node::Internal { left, right } => {
                writer.write_bit(false)?;
                left.write_to(writer)?;
                right.write_to(writer)?;
            }
        }
        Ok(())
    }

    /// Deserialize a trie from `reader`.
    ///
    /// # Errors
    /// - `CorruptDataError::TruncatedTrie` if the stream ends mid-trie
    /// - `CorruptDataError::TrieTooDeep` if nesting exceeds the alphabet
    ///   size (a well-formed trie over 256 symbols can never nest deeper)
    pub fn read_from(reader: &mut BitReader) -> Result<Node> {
        Self::read_at_depth(reader, 0)
    }

    fn read_at_depth(reader: &mut BitReader, depth: usize) -> Result<Node> {
        if depth > ALPHABET_SIZE {
            return Err(CorruptDataError::TrieTooDeep.into());
        }
        let is_leaf = reader
            .read_bit()
            .map_err(|_| CorruptDataError::TruncatedTrie)?;
        if is_leaf {
            let symbol = reader
                .read_bits(8)
                .map_err(|_| CorruptDataError::TruncatedTrie)? as u8;
            Ok(Node::Leaf { symbol })
        } else {
            let left = Self::read_at_depth(reader, depth + 1)?;
            let right = Self::read_at_depth(reader, depth + 1)?;
            Ok(Node::Internal {
                left: Box::new(left),
                right: Box::new(right),
            })
        }
    }
}

/// Heap entry during construction. Ordered so that `BinaryHeap` (a
/// max-heap) pops the lowest frequency first; ties break on insertion
/// sequence, which pins down one tree among the equally optimal ones and
/// keeps compression deterministic.
struct HeapEntry {
    freq: u64,
    seq: u64,
    node: Node,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.freq == other.freq && self.seq == other.seq
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed: smallest frequency (then earliest insertion) wins
        other
            .freq
            .cmp(&self.freq)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Build the optimal prefix-code trie for `freqs` by greedy merging.
///
/// Leaves are seeded in ascending symbol order; the two lowest-frequency
/// nodes are repeatedly merged (earlier insertion becomes the left child)
/// until a single root remains.
///
/// An input with exactly one distinct symbol would leave that symbol with
/// an empty code, so the lone leaf is paired with a second leaf for the
/// same symbol under one internal root; the symbol then gets a 1-bit code
/// and every downstream path behaves normally.
///
/// # Errors
/// `InvalidInputError::Empty` if no symbol has a non-zero count.
pub fn build_trie(freqs: &FrequencyTable) -> Result<Node> {
    let mut heap = BinaryHeap::new();
    let mut seq = 0u64;

    for (symbol, freq) in freqs.iter_nonzero() {
        heap.push(HeapEntry {
            freq,
            seq,
            node: Node::Leaf { symbol },
        });
        seq += 1;
    }

    let mut root = match heap.pop() {
        Some(entry) => entry,
        None => return Err(InvalidInputError::Empty.into()),
    };

    if heap.is_empty() {
        // single distinct symbol: degenerate two-level trie
        let symbol = match root.node {
            Node::Leaf { symbol } => symbol,
            Node::Internal { .. } => unreachable!("heap seeded with leaves only"),
        };
        return Ok(Node::Internal {
            left: Box::new(root.node),
            right: Box::new(Node::Leaf { symbol }),
        });
    }

    heap.push(root);
    while heap.len() > 1 {
        let first = heap.pop().unwrap();
        let second = heap.pop().unwrap();
        heap.push(HeapEntry {
            freq: first.freq + second.freq,
            seq,
            node: Node::Internal {
                left: Box::new(first.node),
                right: Box::new(second.node),
            },
        });
        seq += 1;
    }

    root = heap.pop().unwrap();
    Ok(root.node)
}
