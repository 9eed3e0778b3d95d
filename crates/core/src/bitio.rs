//! Bit-level I/O over in-memory byte buffers.
//!
//! `BitWriter` and `BitReader` are the foundation of the artifact format:
//! both operate MSB-first within each byte, which keeps the serialized trie
//! and the payload readable in the exact order they were written.
//!
//! # Padding
//! `BitWriter::finish` pads the final partial byte with trailing zero bits.
//! `BitReader` cannot distinguish padding from data; callers track how many
//! bits are meaningful (the coder does this implicitly through the trie
//! shape, the fixed-width count, and the declared symbol count).
//!
//! # Example
//! ```
//! use huffpress_core::bitio::{BitWriter, BitReader};
//!
//! let mut writer = BitWriter::new();
//! writer.write_bit(true).unwrap();
//! writer.write_bits(0b0110, 4).unwrap();
//! let bytes = writer.finish();   // 10110 -> padded to 10110000
//! assert_eq!(bytes, vec![0b1011_0000]);
//!
//! let mut reader = BitReader::new(&bytes);
//! assert!(reader.read_bit().unwrap());
//! assert_eq!(reader.read_bits(4).unwrap(), 0b0110);
//! ```

use crate::error::{BitIoError, Result};

/// Appends bits MSB-first to a growing byte buffer.
///
/// The buffer always reflects everything written so far; a fresh zero byte
/// is pushed whenever a bit lands on a byte boundary, so `finish` never has
/// to pad explicitly.
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    bytes: Vec<u8>,
    /// Total number of bits written
    bit_len: usize,
}

impl BitWriter {
    /// Create a writer with an empty output buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single bit.
    pub fn write_bit(&mut self, bit: bool) -> Result<()> {
        let offset = self.bit_len % 8;
        if offset == 0 {
            self.bytes.push(0);
        }
        if bit {
            // bit 0 of the byte is its MSB
            let last = self.bytes.len() - 1;
            self.bytes[last] |= 0x80 >> offset;
        }
        self.bit_len += 1;
        Ok(())
    }

    /// Append the lowest `count` bits of `value`, most significant first.
    ///
    /// Writing `value = 0b101, count = 3` appends the bits 1, 0, 1.
    ///
    /// # Errors
    /// `BitIoError::InvalidBitCount` if `count > 64`.
    pub fn write_bits(&mut self, value: u64, count: usize) -> Result<()> {
        if count > 64 {
            return Err(BitIoError::InvalidBitCount(count).into());
        }
        for shift in (0..count).rev() {
            self.write_bit((value >> shift) & 1 == 1)?;
        }
        Ok(())
    }

    /// Total number of bits written so far.
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// Consume the writer and return the padded byte buffer.
    ///
    /// Any trailing partial byte is already zero-padded.
    pub fn finish(self) -> Vec<u8> {
        self.bytes
    }
}

/// Consumes bits MSB-first from a byte slice.
///
/// Reading past the end is reported as `BitIoError::UnexpectedEof`; the
/// decode paths in `trie` and `codec` translate that into the `CorruptData`
/// variant for whichever artifact field was being read.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    /// Next bit to read (0 = MSB of first byte)
    pos: usize,
}

impl<'a> BitReader<'a> {
    /// Create a reader over `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Read one bit.
    ///
    /// # Errors
    /// `BitIoError::UnexpectedEof` if the buffer is exhausted.
    pub fn read_bit(&mut self) -> Result<bool> {
        if self.pos >= self.data.len() * 8 {
            return Err(BitIoError::UnexpectedEof.into());
        }
        let byte = self.data[self.pos / 8];
        let bit = (byte >> (7 - self.pos % 8)) & 1 == 1;
        self.pos += 1;
        Ok(bit)
    }

    /// Read `count` bits as an unsigned integer, most significant first.
    ///
    /// # Errors
    /// - `BitIoError::InvalidBitCount` if `count > 64`
    /// - `BitIoError::UnexpectedEof` if fewer than `count` bits remain
    pub fn read_bits(&mut self, count: usize) -> Result<u64> {
        if count > 64 {
            return Err(BitIoError::InvalidBitCount(count).into());
        }
        if count > self.bits_remaining() {
            return Err(BitIoError::UnexpectedEof.into());
        }
        let mut value = 0u64;
        for _ in 0..count {
            value = (value << 1) | self.read_bit()? as u64;
        }
        Ok(value)
    }

    /// Number of bits left in the buffer (padding included).
    pub fn bits_remaining(&self) -> usize {
        self.data.len() * 8 - self.pos
    }

    /// Current bit position from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }
}
