//! On-disk layout of a compressed file, keyed by a basename:
//!
//! * `<basename>.huff`: the payload, packed or as `0`/`1` characters;
//! * `<basename>.codebook`: the codebook, JSON or bincode;
//! * `<basename>.properties`: unit, formats and payload bit length;
//! * `<basename>.report`: the human readable report;
//! * `<basename>.stats`: stage timings, only when asked for.

use std::fs;

use serde::{Serialize, Deserialize};

use crate::{
    bitstreams::BinaryWriterBuilder,
    codebook::{Code, Codebook},
    compressor::Compressed,
    error::{Error, Result},
    properties::{CodebookFormat, PayloadFormat, Properties},
    symbol::{Symbol, SymbolUnit},
};

pub const PAYLOAD_EXTENSION: &str = "huff";
pub const CODEBOOK_EXTENSION: &str = "codebook";
pub const PROPERTIES_EXTENSION: &str = "properties";
pub const REPORT_EXTENSION: &str = "report";
pub const STATS_EXTENSION: &str = "stats";

#[inline(always)]
pub fn file_name(basename: &str, extension: &str) -> String {
    format!("{}.{}", basename, extension)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedEntry {
    /// Byte value or Unicode scalar value of the symbol.
    pub symbol: u32,
    pub code: Code,
}

/// Unit-independent form of a codebook, shared by both serializations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedCodebook {
    pub unit: SymbolUnit,
    pub entries: Vec<SerializedEntry>,
}

impl SerializedCodebook {
    pub fn from_codebook<S: Symbol>(codebook: &Codebook<S>) -> Self {
        SerializedCodebook {
            unit: S::UNIT,
            entries: codebook.entries()
                .into_iter()
                .map(|(s, code)| SerializedEntry { symbol: s.to_scalar(), code: code.clone() })
                .collect(),
        }
    }

    /// Rebuilds the codebook, checking the unit and prefix-freeness.
    pub fn into_codebook<S: Symbol>(self) -> Result<Codebook<S>> {
        if self.unit != S::UNIT {
            return Err(Error::MalformedInput(format!("codebook unit is {}, expected {}", self.unit, S::UNIT)));
        }

        let entries = self.entries.into_iter()
            .map(|e| {
                S::from_scalar(e.symbol)
                    .map(|s| (s, e.code))
                    .ok_or_else(|| Error::MalformedInput(format!("{} is not a valid {} symbol", e.symbol, S::UNIT)))
            })
            .collect::<Result<Vec<_>>>()?;

        Codebook::from_entries(entries).map_err(|e| match e {
            Error::InvariantViolation(msg) => Error::MalformedInput(msg),
            Error::EmptyInput => Error::MalformedInput("codebook has no entries".to_owned()),
            other => other,
        })
    }

    pub fn to_bytes(&self, format: CodebookFormat) -> Result<Vec<u8>> {
        Ok(match format {
            CodebookFormat::Json => serde_json::to_vec_pretty(self)?,
            CodebookFormat::Bincode => bincode::serialize(self)?,
        })
    }

    pub fn from_bytes(bytes: &[u8], format: CodebookFormat) -> Result<Self> {
        Ok(match format {
            CodebookFormat::Json => serde_json::from_slice(bytes)?,
            CodebookFormat::Bincode => bincode::deserialize(bytes)?,
        })
    }
}

/// Writes payload, codebook, properties and report for `basename` and
/// returns the properties that were written.
pub fn store<S: Symbol>(basename: &str, codebook: &Codebook<S>, compressed: &Compressed, config: &Properties) -> Result<Properties> {
    let props = Properties {
        unit: S::UNIT,
        symbols: compressed.report.input_symbols,
        distinct_symbols: codebook.len(),
        bits: compressed.encoded.bit_len() as u64,
        pad_bits: compressed.encoded.pad_bits() as u8,
        savings: compressed.report.total_savings,
        ..config.clone()
    };

    match props.payload_format {
        PayloadFormat::Packed => fs::write(file_name(basename, PAYLOAD_EXTENSION), compressed.encoded.as_bytes())?,
        PayloadFormat::Ascii => fs::write(file_name(basename, PAYLOAD_EXTENSION), compressed.encoded.to_ascii())?,
    }

    let serialized = SerializedCodebook::from_codebook(codebook);
    fs::write(file_name(basename, CODEBOOK_EXTENSION), serialized.to_bytes(props.codebook_format)?)?;
    fs::write(file_name(basename, PROPERTIES_EXTENSION), String::from(&props))?;
    fs::write(file_name(basename, REPORT_EXTENSION), compressed.report.render())?;

    Ok(props)
}

pub fn load_properties(basename: &str) -> Result<Properties> {
    Properties::load(file_name(basename, PROPERTIES_EXTENSION))
}

pub fn load_codebook<S: Symbol>(basename: &str, props: &Properties) -> Result<Codebook<S>> {
    let bytes = fs::read(file_name(basename, CODEBOOK_EXTENSION))?;
    SerializedCodebook::from_bytes(&bytes, props.codebook_format)?.into_codebook()
}

/// Reads the payload as packed bytes, whatever its on-disk format.
///
/// `bits` and `padbits` of the properties must agree with each other.
pub fn load_payload(basename: &str, props: &Properties) -> Result<Box<[u8]>> {
    let expected_pad = (8 - props.bits % 8) % 8;
    if props.pad_bits as u64 != expected_pad {
        return Err(Error::MalformedInput(format!(
            "properties announce {} pad bits, {} bits need {}", props.pad_bits, props.bits, expected_pad
        )));
    }

    let raw = fs::read(file_name(basename, PAYLOAD_EXTENSION))?;

    let packed: Box<[u8]> = match props.payload_format {
        PayloadFormat::Packed => raw.into_boxed_slice(),
        PayloadFormat::Ascii => {
            if raw.len() as u64 != props.bits {
                return Err(Error::MalformedInput(format!(
                    "ASCII payload has {} bits, properties announce {}", raw.len(), props.bits
                )));
            }
            let mut writer = BinaryWriterBuilder::with_capacity(raw.len() / 8 + 1);
            for &c in raw.iter() {
                match c {
                    b'0' => writer.push_bit(false),
                    b'1' => writer.push_bit(true),
                    _ => return Err(Error::MalformedInput(format!("invalid byte {:#04x} in ASCII payload", c))),
                };
            }
            writer.build().os
        }
    };

    if (packed.len() as u64) * 8 < props.bits {
        return Err(Error::MalformedInput(format!(
            "payload holds {} bits, properties announce {}", packed.len() * 8, props.bits
        )));
    }

    Ok(packed)
}

#[cfg(test)]
mod tests;
