use crate::{bitstreams::BinaryReader, codebook::Codebook, error::{Error, Result}, symbol::Symbol};

#[derive(Clone, Copy, Debug)]
struct TrieNode<S> {
    children: [Option<usize>; 2],
    symbol: Option<S>,
}

/// Decoding trie rebuilt from a codebook: the tree is walked one bit per
/// step until a leaf is reached.
#[derive(Clone, Debug)]
pub struct HuffmanDecoder<S: Symbol> {
    nodes: Vec<TrieNode<S>>,
}

impl<S: Symbol> HuffmanDecoder<S> {
    pub fn new(codebook: &Codebook<S>) -> Result<Self> {
        let mut decoder = HuffmanDecoder { nodes: vec![TrieNode { children: [None, None], symbol: None }] };

        for (symbol, code) in codebook.entries() {
            let mut current = 0;
            for &bit in code.bits() {
                if decoder.nodes[current].symbol.is_some() {
                    return Err(Error::InvariantViolation(format!("code of {} passes through a leaf", symbol.render())));
                }
                current = match decoder.nodes[current].children[bit as usize] {
                    Some(next) => next,
                    None => {
                        decoder.nodes.push(TrieNode { children: [None, None], symbol: None });
                        let next = decoder.nodes.len() - 1;
                        decoder.nodes[current].children[bit as usize] = Some(next);
                        next
                    }
                };
            }

            let node = &mut decoder.nodes[current];
            if current == 0 || node.symbol.is_some() || node.children.iter().any(Option::is_some) {
                return Err(Error::InvariantViolation(format!("code of {} is not a leaf", symbol.render())));
            }
            node.symbol = Some(symbol);
        }

        Ok(decoder)
    }

    /// Decodes the next symbol, `Ok(None)` when the reader is exhausted on a
    /// symbol boundary.
    pub fn read_next(&self, bin_reader: &mut BinaryReader) -> Result<Option<S>> {
        if bin_reader.is_exhausted() {
            return Ok(None);
        }

        let mut current = 0;
        loop {
            if let Some(symbol) = self.nodes[current].symbol {
                return Ok(Some(symbol));
            }

            let bit = bin_reader.read_bit()
                .ok_or_else(|| Error::MalformedInput("bitstream ends in the middle of a code".to_owned()))?;

            current = self.nodes[current].children[bit as usize]
                .ok_or_else(|| Error::MalformedInput(format!("no code continues with bit {} at position {}", bit as u8, bin_reader.read_bits - 1)))?;
        }
    }

    /// Decodes every symbol held by the reader.
    pub fn decode_all(&self, bin_reader: &mut BinaryReader) -> Result<Vec<S>> {
        let mut out = Vec::new();
        while let Some(symbol) = self.read_next(bin_reader)? {
            out.push(symbol);
        }
        Ok(out)
    }
}

/// Decodes `bit_len` bits of `bytes` with `codebook`.
pub fn decode<S: Symbol>(codebook: &Codebook<S>, bytes: &[u8], bit_len: usize) -> Result<Vec<S>> {
    if bytes.len() * 8 < bit_len {
        return Err(Error::MalformedInput(format!(
            "payload holds {} bits but {} were announced", bytes.len() * 8, bit_len
        )));
    }

    let decoder = HuffmanDecoder::new(codebook)?;
    let mut bin_reader = BinaryReader::new(bytes.into(), bit_len);
    decoder.decode_all(&mut bin_reader)
}

#[cfg(test)]
mod tests;
