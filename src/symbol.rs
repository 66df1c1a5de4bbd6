use std::{fmt::{self, Debug, Display}, hash::Hash, str::FromStr};

use serde::{Serialize, Deserialize};

use crate::error::{Error, Result};

/// The unit of the input alphabet the compressor works on.
#[derive(Clone, Copy, Eq, PartialEq, Serialize, Deserialize, Debug, Default)]
pub enum SymbolUnit {
    /// Every byte of the input is a symbol.
    Byte,
    /// The input is decoded as UTF-8 and every codepoint is a symbol.
    #[default]
    Codepoint,
}

impl FromStr for SymbolUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "BYTE" | "BYTES" => Ok(SymbolUnit::Byte),
            "CODEPOINT" | "CODEPOINTS" | "CHAR" => Ok(SymbolUnit::Codepoint),
            other => Err(Error::Config(format!("Unknown symbol unit {}", other))),
        }
    }
}

impl Display for SymbolUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolUnit::Byte => write!(f, "BYTE"),
            SymbolUnit::Codepoint => write!(f, "CODEPOINT"),
        }
    }
}

/// One unit of the input alphabet.
///
/// Symbols are compared by value; the total order only fixes the order in
/// which leaves are loaded into the queue and rows appear in the report.
pub trait Symbol: Copy + Eq + Hash + Ord + Debug {
    /// The unit this symbol type implements.
    const UNIT: SymbolUnit;

    /// Splits raw input into symbols, keeping every unit verbatim.
    fn decode_input(bytes: &[u8]) -> Result<Vec<Self>>;

    /// Inverse of [`Symbol::decode_input`].
    fn encode_output(symbols: &[Self]) -> Vec<u8>;

    /// Numeric value used when the codebook is serialized.
    fn to_scalar(self) -> u32;

    fn from_scalar(value: u32) -> Option<Self>;

    /// Printable form used in the report.
    fn render(self) -> String;
}

impl Symbol for u8 {
    const UNIT: SymbolUnit = SymbolUnit::Byte;

    fn decode_input(bytes: &[u8]) -> Result<Vec<Self>> {
        Ok(bytes.to_vec())
    }

    fn encode_output(symbols: &[Self]) -> Vec<u8> {
        symbols.to_vec()
    }

    #[inline(always)]
    fn to_scalar(self) -> u32 {
        self as u32
    }

    #[inline(always)]
    fn from_scalar(value: u32) -> Option<Self> {
        u8::try_from(value).ok()
    }

    fn render(self) -> String {
        if self.is_ascii_graphic() || self == b' ' {
            (self as char).to_string()
        } else {
            format!("\\x{:02X}", self)
        }
    }
}

impl Symbol for char {
    const UNIT: SymbolUnit = SymbolUnit::Codepoint;

    fn decode_input(bytes: &[u8]) -> Result<Vec<Self>> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| Error::MalformedInput(format!("input is not valid UTF-8: {}", e)))?;
        Ok(text.chars().collect())
    }

    fn encode_output(symbols: &[Self]) -> Vec<u8> {
        symbols.iter().collect::<String>().into_bytes()
    }

    #[inline(always)]
    fn to_scalar(self) -> u32 {
        self as u32
    }

    #[inline(always)]
    fn from_scalar(value: u32) -> Option<Self> {
        char::from_u32(value)
    }

    fn render(self) -> String {
        // Control characters would break the one-line-per-symbol layout
        if self.is_control() {
            self.escape_default().to_string()
        } else {
            self.to_string()
        }
    }
}
