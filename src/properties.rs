use std::{collections::HashMap, fmt::{self, Display}, fs::File, io::BufReader, path::Path, str::FromStr};

use serde::{Serialize, Deserialize};

use crate::{error::{Error, Result}, report::DEFAULT_BITS_PER_SYMBOL, symbol::SymbolUnit};

/// How the encoded payload is written to disk.
#[derive(Clone, Copy, Eq, PartialEq, Serialize, Deserialize, Debug, Default)]
pub enum PayloadFormat {
    /// Bits packed MSB-first into bytes, last byte zero-padded.
    #[default]
    Packed,
    /// One `0`/`1` character per bit.
    Ascii,
}

impl FromStr for PayloadFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "PACKED" => Ok(PayloadFormat::Packed),
            "ASCII" => Ok(PayloadFormat::Ascii),
            other => Err(Error::Config(format!("Unknown payload format {}", other))),
        }
    }
}

impl Display for PayloadFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadFormat::Packed => write!(f, "PACKED"),
            PayloadFormat::Ascii => write!(f, "ASCII"),
        }
    }
}

/// Serialization used for the `.codebook` file.
#[derive(Clone, Copy, Eq, PartialEq, Serialize, Deserialize, Debug, Default)]
pub enum CodebookFormat {
    #[default]
    Json,
    Bincode,
}

impl FromStr for CodebookFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "JSON" => Ok(CodebookFormat::Json),
            "BINCODE" => Ok(CodebookFormat::Bincode),
            other => Err(Error::Config(format!("Unknown codebook format {}", other))),
        }
    }
}

impl Display for CodebookFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodebookFormat::Json => write!(f, "JSON"),
            CodebookFormat::Bincode => write!(f, "BINCODE"),
        }
    }
}

/// Compressor configuration and, once a file has been stored, the facts a
/// decoder needs about its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Properties {
    pub unit: SymbolUnit,
    pub payload_format: PayloadFormat,
    pub codebook_format: CodebookFormat,
    pub bits_per_symbol: u32,
    pub symbols: u64,
    pub distinct_symbols: usize,
    pub bits: u64,
    pub pad_bits: u8,
    pub savings: i64,
}

impl Default for Properties {
    fn default() -> Self {
        Self {
            unit: SymbolUnit::default(),
            payload_format: PayloadFormat::default(),
            codebook_format: CodebookFormat::default(),
            bits_per_symbol: DEFAULT_BITS_PER_SYMBOL,
            symbols: 0,
            distinct_symbols: 0,
            bits: 0,
            pad_bits: 0,
            savings: 0,
        }
    }
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse()
        .map_err(|_| Error::Config(format!("Malformed value {:?} for property {}", value, key)))
}

impl TryFrom<HashMap<String, String>> for Properties {
    type Error = Error;

    fn try_from(value: HashMap<String, String>) -> Result<Self> {
        let mut props = Properties::default();

        for (key, v) in value.iter() {
            match key.trim().to_lowercase().as_str() {
                "unit" => props.unit = v.parse()?,
                "payloadformat" => props.payload_format = v.parse()?,
                "codebookformat" => props.codebook_format = v.parse()?,
                "bitspersymbol" => props.bits_per_symbol = parse_value(key, v)?,
                "symbols" => props.symbols = parse_value(key, v)?,
                "distinctsymbols" => props.distinct_symbols = parse_value(key, v)?,
                "bits" => props.bits = parse_value(key, v)?,
                "padbits" => props.pad_bits = parse_value(key, v)?,
                "savings" => props.savings = parse_value(key, v)?,
                "version" | "compressor" => {},
                _ => return Err(Error::Config(format!("Unknown property {}", key))),
            }
        }

        if props.bits_per_symbol == 0 {
            return Err(Error::Config("bitspersymbol must be positive".to_owned()));
        }
        if props.pad_bits > 7 {
            return Err(Error::Config(format!("padbits must be below 8, got {}", props.pad_bits)));
        }

        Ok(props)
    }
}

impl Properties {
    /// Reads a Java-style `.properties` file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let p = java_properties::read(BufReader::new(file))
            .map_err(|e| Error::Config(format!("Failed parsing {}: {}", path.display(), e)))?;
        Properties::try_from(p)
    }
}

impl From<&Properties> for String {
    fn from(val: &Properties) -> Self {
        let mut s = String::new();

        s.push_str("#Huffman compressor properties\n");
        s.push_str("version=0\n");
        s.push_str(&format!("unit={}\n", val.unit));
        s.push_str(&format!("payloadformat={}\n", val.payload_format));
        s.push_str(&format!("codebookformat={}\n", val.codebook_format));
        s.push_str(&format!("bitspersymbol={}\n", val.bits_per_symbol));
        s.push_str(&format!("symbols={}\n", val.symbols));
        s.push_str(&format!("distinctsymbols={}\n", val.distinct_symbols));
        s.push_str(&format!("bits={}\n", val.bits));
        s.push_str(&format!("padbits={}\n", val.pad_bits));
        s.push_str(&format!("savings={}\n", val.savings));

        s
    }
}
