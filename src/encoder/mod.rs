use crate::{bitstreams::{BinaryWriter, BinaryWriterBuilder}, codebook::Codebook, error::{Error, Result}, symbol::Symbol};

/// The output of the encoding pass: packed bytes plus the exact bit count.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct EncodedBits {
    writer: BinaryWriter,
}

impl EncodedBits {
    /// Length of the payload in bits, padding excluded.
    #[inline(always)]
    pub fn bit_len(&self) -> usize {
        self.writer.written_bits
    }

    /// Zero bits appended to complete the last byte (0..=7).
    #[inline(always)]
    pub fn pad_bits(&self) -> usize {
        self.writer.pad_bits()
    }

    /// MSB-first packed bytes.
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.writer.os
    }

    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.bit_len()).map(move |i| (self.writer.os[i >> 3] >> (7 - (i & 7))) & 1 == 1)
    }

    /// The payload as a string of `0` and `1` characters.
    pub fn to_ascii(&self) -> String {
        self.bits().map(|b| if b { '1' } else { '0' }).collect()
    }
}

impl From<BinaryWriter> for EncodedBits {
    fn from(writer: BinaryWriter) -> Self {
        EncodedBits { writer }
    }
}

/// Appends the code of every symbol of `symbols` to `bin_writer` and returns
/// the number of bits written.
pub fn encode_into<S: Symbol>(codebook: &Codebook<S>, symbols: &[S], bin_writer: &mut BinaryWriterBuilder) -> Result<usize> {
    let mut written = 0;
    for s in symbols.iter() {
        let code = codebook.get(s).ok_or_else(|| Error::MissingCode(s.render()))?;
        written += bin_writer.push_code(code) as usize;
    }
    Ok(written)
}

/// Encodes a whole sequence into a fresh bitstream.
pub fn encode<S: Symbol>(codebook: &Codebook<S>, symbols: &[S]) -> Result<EncodedBits> {
    let mut bin_writer = BinaryWriterBuilder::with_capacity(symbols.len() / 2 + 1);
    encode_into(codebook, symbols, &mut bin_writer)?;
    Ok(EncodedBits::from(bin_writer.build()))
}
