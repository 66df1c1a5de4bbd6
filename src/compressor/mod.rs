use crate::{
    codebook::Codebook,
    encoder::{self, EncodedBits},
    error::Result,
    frequency::FrequencyTable,
    huffman_tree::HuffmanTree,
    report::Report,
    symbol::Symbol,
    utils::timer::CompressionStats,
};

/// Output of a full compression pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Compressed {
    pub encoded: EncodedBits,
    pub report: Report,
}

/// One compression instance: it owns the frequency table, the tree and the
/// codebook derived from a single input. Independent instances share nothing.
#[derive(Clone, Debug)]
pub struct HuffmanCompressor<S: Symbol> {
    table: FrequencyTable<S>,
    tree: HuffmanTree<S>,
    codebook: Codebook<S>,
    pub stats: CompressionStats,
}

impl<S: Symbol> HuffmanCompressor<S> {
    /// Tabulates `symbols` and derives the tree and codebook from them.
    pub fn new(symbols: &[S]) -> Result<Self> {
        let mut stats = CompressionStats::default();
        let table = stats.tabulate_time.time(|| FrequencyTable::tabulate(symbols));
        Self::with_stats(table, stats)
    }

    pub fn from_table(table: FrequencyTable<S>) -> Result<Self> {
        Self::with_stats(table, CompressionStats::default())
    }

    fn with_stats(table: FrequencyTable<S>, mut stats: CompressionStats) -> Result<Self> {
        let tree = stats.build_time.time(|| HuffmanTree::build(&table))?;
        let codebook = stats.extract_time.time(|| Codebook::from_tree(&tree))?;

        Ok(HuffmanCompressor { table, tree, codebook, stats })
    }

    pub fn table(&self) -> &FrequencyTable<S> {
        &self.table
    }

    pub fn tree(&self) -> &HuffmanTree<S> {
        &self.tree
    }

    pub fn codebook(&self) -> &Codebook<S> {
        &self.codebook
    }

    pub fn encode(&mut self, symbols: &[S]) -> Result<EncodedBits> {
        let codebook = &self.codebook;
        let encoded = self.stats.encode_time.time(|| encoder::encode(codebook, symbols))?;
        self.stats.encoded_bits = encoded.bit_len();
        Ok(encoded)
    }

    pub fn report(&self, bits_per_symbol: u32) -> Result<Report> {
        Report::new(&self.codebook, &self.table, bits_per_symbol)
    }

    /// Encodes `symbols` and builds the matching report.
    pub fn compress(&mut self, symbols: &[S], bits_per_symbol: u32) -> Result<Compressed> {
        let encoded = self.encode(symbols)?;
        let report = self.report(bits_per_symbol)?;
        Ok(Compressed { encoded, report })
    }
}
