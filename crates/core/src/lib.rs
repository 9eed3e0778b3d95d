//! huffpress-core: static Huffman coding over the 8-bit byte alphabet
//!
//! This library is the entire coder: it builds an optimal prefix code from
//! whole-input symbol frequencies, serializes the code's trie alongside the
//! encoded payload, and reconstructs the exact original bytes from the
//! artifact alone — no external dictionary, no side channel.
//!
//! # Architecture
//!
//! Leaves first:
//! - `bitio`: MSB-first bit reading/writing over byte buffers
//! - `freq`: symbol frequency counting
//! - `trie`: trie construction (greedy min-heap merge) and its
//!   self-delimiting pre-order bitstream form
//! - `code`: symbol -> bit-code lookup table derived from the trie
//! - `codec`: `compress` / `expand` orchestration over the artifact format
//!
//! # Design principles
//!
//! - **No panics**: malformed artifacts surface as structured `CorruptData`
//!   errors, never wrong bytes and never UB
//! - **Deterministic**: fixed heap tie-breaking means identical input
//!   always produces a byte-identical artifact
//! - **Independent calls**: every structure is freshly allocated per call,
//!   so concurrent calls on separate inputs need no synchronization

pub mod bitio;
pub mod code;
pub mod codec;
pub mod error;
pub mod freq;
pub mod trie;

/// Size of the fixed symbol alphabet (8-bit bytes).
pub const ALPHABET_SIZE: usize = 256;

// Re-export the primary entry points
pub use codec::{compress, expand};
pub use error::{Error, Result};
