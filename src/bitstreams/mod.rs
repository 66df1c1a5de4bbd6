use serde::{Serialize, Deserialize};

use crate::codebook::Code;

/// A finished, MSB-first packed bit sequence.
///
/// The last byte is zero-padded; `written_bits` is the exact payload length.
#[derive(Clone, Eq, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct BinaryWriter {
    pub os: Box<[u8]>,
    pub written_bits: usize,
}

impl BinaryWriter {
    /// Number of zero bits appended to fill the final byte.
    #[inline(always)]
    pub fn pad_bits(&self) -> usize {
        (8 - self.written_bits % 8) % 8
    }
}

pub struct BinaryWriterBuilder {
    os: Vec<u8>,
    pub written_bits: usize,
    pub current: u64,
    pub free: usize,
}

impl Default for BinaryWriterBuilder {
    fn default() -> Self {
        BinaryWriterBuilder {
            os: Vec::default(),
            written_bits: 0,
            current: 0,
            free: 8,
        }
    }
}

impl BinaryWriterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bytes: usize) -> Self {
        BinaryWriterBuilder { os: Vec::with_capacity(bytes), ..Default::default() }
    }

    /// Flushes the partially filled byte, if any, and freezes the stream.
    pub fn build(mut self) -> BinaryWriter {
        if self.free < 8 {
            self.write(self.current);
        }

        BinaryWriter {
            os: self.os.into_boxed_slice(),
            written_bits: self.written_bits,
        }
    }

    #[inline(always)]
    pub fn write(&mut self, b: u64) {
        self.os.push(b as u8);
    }

    /// Writes the lowest `len` bits of `b` into the current byte.
    /// `len` must not exceed the free bits left in it.
    #[inline(always)]
    pub fn write_in_current(&mut self, b: u64, len: u64) -> u64 {
        debug_assert!(len as usize <= self.free);

        self.free -= len as usize;
        self.current |= (b & ((1 << len) - 1)) << self.free;

        if self.free == 0 {
            self.write(self.current);
            self.free = 8;
            self.current = 0;
        }

        self.written_bits += len as usize;
        len
    }

    #[inline(always)]
    pub fn push_bit(&mut self, bit: bool) -> u64 {
        self.write_in_current(bit as u64, 1)
    }

    /// Appends a whole code word, which may be longer than 64 bits.
    pub fn push_code(&mut self, code: &Code) -> u64 {
        for &bit in code.bits() {
            self.push_bit(bit);
        }
        code.len() as u64
    }
}

/// Reads an MSB-first packed stream that holds exactly `bit_len` meaningful bits.
#[derive(Clone, Eq, PartialEq, Serialize, Deserialize, Debug)]
pub struct BinaryReader {
    is: Box<[u8]>,
    bit_len: usize,
    pub read_bits: usize,
}

impl BinaryReader {
    /// `bit_len` is clamped to the bits physically present in `input_stream`.
    pub fn new(input_stream: Box<[u8]>, bit_len: usize) -> Self {
        let bit_len = bit_len.min(input_stream.len() * 8);
        BinaryReader {
            is: input_stream,
            bit_len,
            read_bits: 0,
        }
    }

    #[inline(always)]
    pub fn is_exhausted(&self) -> bool {
        self.read_bits >= self.bit_len
    }

    #[inline(always)]
    pub fn read_bit(&mut self) -> Option<bool> {
        if self.is_exhausted() {
            return None;
        }

        let byte = self.is[self.read_bits >> 3];
        let bit = (byte >> (7 - (self.read_bits & 7))) & 1 == 1;
        self.read_bits += 1;
        Some(bit)
    }
}
