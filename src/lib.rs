//! # huffman_compressor
//!
//! Classical Huffman coding of a symbol sequence (bytes or Unicode
//! codepoints), with a report of per-symbol frequencies, codes and savings.
//!
//! ```
//! use huffman_compressor::{build_codebook, encode, savings, FrequencyTable};
//!
//! let input: Vec<char> = "aaab".chars().collect();
//! let table = FrequencyTable::tabulate(input.as_slice());
//! let codebook = build_codebook(&table)?;
//! let encoded = encode(&codebook, &input)?;
//!
//! assert_eq!(encoded.bit_len(), 4);
//! assert_eq!(savings(&codebook, &table, 8)?, 28);
//! # Ok::<(), huffman_compressor::Error>(())
//! ```

pub mod bitstreams;
pub mod codebook;
pub mod compressor;
pub mod decoder;
pub mod driver;
pub mod encoder;
pub mod error;
pub mod frequency;
pub mod huffman_tree;
pub mod min_heap;
pub mod properties;
pub mod report;
pub mod store;
pub mod symbol;
pub mod utils;

pub use codebook::{Code, Codebook};
pub use compressor::{Compressed, HuffmanCompressor};
pub use encoder::{encode, EncodedBits};
pub use error::{Error, Result};
pub use frequency::FrequencyTable;
pub use huffman_tree::HuffmanTree;
pub use report::{savings, Report};
pub use symbol::{Symbol, SymbolUnit};

/// Builds the tree for `table` and extracts its codebook.
pub fn build_codebook<S: Symbol>(table: &FrequencyTable<S>) -> Result<Codebook<S>> {
    let tree = HuffmanTree::build(table)?;
    Codebook::from_tree(&tree)
}
