//! File-level operations behind the binaries: read a file, compress it into
//! a basename, or restore the original file from one.

use std::{fs, path::Path};

use crate::{
    compressor::HuffmanCompressor,
    decoder,
    error::{Error, Result},
    properties::Properties,
    store::{self, file_name, STATS_EXTENSION},
    symbol::{Symbol, SymbolUnit},
};

/// What a compression run produced, for the binary to print.
#[derive(Debug, Clone)]
pub struct CompressionSummary {
    pub props: Properties,
    pub report: String,
    pub stats: String,
    pub tree: String,
}

pub fn compress_file<P: AsRef<Path>>(input: P, basename: &str, config: &Properties, write_stats: bool) -> Result<CompressionSummary> {
    let bytes = fs::read(input)?;

    match config.unit {
        SymbolUnit::Byte => compress_symbols::<u8>(&bytes, basename, config, write_stats),
        SymbolUnit::Codepoint => compress_symbols::<char>(&bytes, basename, config, write_stats),
    }
}

fn compress_symbols<S: Symbol>(bytes: &[u8], basename: &str, config: &Properties, write_stats: bool) -> Result<CompressionSummary> {
    let symbols = S::decode_input(bytes)?;

    let mut compressor = HuffmanCompressor::new(&symbols)?;
    let compressed = compressor.compress(&symbols, config.bits_per_symbol)?;
    let props = store::store(basename, compressor.codebook(), &compressed, config)?;

    let stats = compressor.stats.render();
    if write_stats {
        fs::write(file_name(basename, STATS_EXTENSION), &stats)?;
    }

    Ok(CompressionSummary {
        props,
        report: compressed.report.render(),
        stats,
        tree: compressor.tree().render_structure(),
    })
}

/// Restores the original file from `basename` into `output`, returning the
/// number of symbols decoded.
pub fn decompress_file<P: AsRef<Path>>(basename: &str, output: P) -> Result<u64> {
    let props = store::load_properties(basename)?;

    let restored = match props.unit {
        SymbolUnit::Byte => decompress_symbols::<u8>(basename, &props)?,
        SymbolUnit::Codepoint => decompress_symbols::<char>(basename, &props)?,
    };

    fs::write(output, restored.0)?;
    Ok(restored.1)
}

fn decompress_symbols<S: Symbol>(basename: &str, props: &Properties) -> Result<(Vec<u8>, u64)> {
    let codebook = store::load_codebook::<S>(basename, props)?;
    let payload = store::load_payload(basename, props)?;

    let symbols = decoder::decode(&codebook, &payload, props.bits as usize)?;
    if symbols.len() as u64 != props.symbols {
        return Err(Error::MalformedInput(format!(
            "decoded {} symbols, properties announce {}", symbols.len(), props.symbols
        )));
    }

    let count = symbols.len() as u64;
    Ok((S::encode_output(&symbols), count))
}
