//! Error types for the huffpress coder.
//!
//! All operations return structured errors rather than panicking.
//! The taxonomy mirrors the two ways a pure coder can fail:
//! - the caller handed us input we refuse (`InvalidInput`)
//! - the artifact handed to `expand` does not match the format grammar
//!   (`CorruptData`)
//!
//! Bit-level I/O failures are a separate domain because `BitReader` and
//! `BitWriter` are usable on their own; the codec translates end-of-stream
//! conditions into the more specific `CorruptData` variants at each decode
//! stage.

use thiserror::Error;

/// Top-level error type for all coder operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Bit I/O operation failed (e.g., reading past end of buffer)
    #[error("bit I/O error: {0}")]
    BitIo(#[from] BitIoError),

    /// The artifact's bit layout does not match the expected grammar
    #[error("corrupt data: {0}")]
    Corrupt(#[from] CorruptDataError),

    /// The caller's input is rejected by policy
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// A derived code exceeds the 64-bit packed representation.
    /// Unreachable for inputs within the 32-bit length cap; indicates a
    /// broken trie if it ever fires.
    #[error("huffman code length {length} exceeds 64 bits")]
    CodeTooLong { length: usize },
}

/// Bit-level I/O errors.
#[derive(Debug, Error)]
pub enum BitIoError {
    /// Attempted to read past the end of the bit stream
    #[error("unexpected end of bit stream")]
    UnexpectedEof,

    /// Requested a fixed-width transfer wider than 64 bits
    #[error("invalid bit count: {0}")]
    InvalidBitCount(usize),
}

/// Artifact corruption detected during `expand`.
///
/// Never silently recovered: a partial decode would return wrong bytes with
/// no signal.
#[derive(Debug, Error)]
pub enum CorruptDataError {
    /// Bitstream ended before the serialized trie was complete
    #[error("bit stream exhausted while reading trie")]
    TruncatedTrie,

    /// Serialized trie nests deeper than the alphabet allows
    #[error("trie depth exceeds alphabet size")]
    TrieTooDeep,

    /// The trie decoded to a bare leaf, which the encoder never emits
    /// (single-symbol inputs get a two-level trie)
    #[error("trie root is a bare leaf")]
    BareLeafRoot,

    /// Bitstream ended before the 32-bit symbol count was read
    #[error("bit stream exhausted while reading symbol count")]
    TruncatedCount,

    /// Bitstream ended before all declared symbols were decoded
    #[error("payload exhausted after {decoded} of {expected} symbols")]
    TruncatedPayload { decoded: usize, expected: usize },
}

/// Caller-level input policy violations on `compress`.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Empty input carries no symbols to build a code from
    #[error("empty input: nothing to compress")]
    Empty,

    /// The artifact stores the original length as a 32-bit field
    #[error("input length {len} exceeds the {max}-byte format limit")]
    TooLarge { len: usize, max: u64 },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
