use serde::{Serialize, Deserialize};

use crate::{codebook::Codebook, error::{Error, Result}, frequency::FrequencyTable, symbol::Symbol};

/// Bits an uncompressed symbol is assumed to take.
pub const DEFAULT_BITS_PER_SYMBOL: u32 = 8;

/// Uncompressed size minus compressed size, in bits.
///
/// The uncompressed size is `bits_per_symbol` times the number of input
/// symbols (not bytes). The result is negative when coding expands the input.
pub fn savings<S: Symbol>(codebook: &Codebook<S>, table: &FrequencyTable<S>, bits_per_symbol: u32) -> Result<i64> {
    Ok(bits_per_symbol as i64 * table.total() as i64 - encoded_len(codebook, table)? as i64)
}

/// Σ count(s) · len(code(s)), the length of the encoded input in bits.
pub fn encoded_len<S: Symbol>(codebook: &Codebook<S>, table: &FrequencyTable<S>) -> Result<u64> {
    table.iter()
        .map(|(s, count)| {
            codebook.get(&s)
                .map(|code| count * code.len() as u64)
                .ok_or_else(|| Error::MissingCode(s.render()))
        })
        .sum()
}

/// One row of the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub symbol: String,
    pub frequency: u64,
    pub code: String,
    pub code_len: usize,
}

/// Everything the reporter renders: the savings metric and, per symbol,
/// its count, code and code length in ascending symbol order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub total_savings: i64,
    pub input_symbols: u64,
    pub encoded_bits: u64,
    pub entries: Vec<ReportEntry>,
}

impl Report {
    pub fn new<S: Symbol>(codebook: &Codebook<S>, table: &FrequencyTable<S>, bits_per_symbol: u32) -> Result<Self> {
        let mut entries = Vec::with_capacity(table.len());
        for (s, frequency) in table.iter() {
            let code = codebook.get(&s).ok_or_else(|| Error::MissingCode(s.render()))?;
            entries.push(ReportEntry {
                symbol: s.render(),
                frequency,
                code: code.to_string(),
                code_len: code.len(),
            });
        }

        Ok(Report {
            total_savings: savings(codebook, table, bits_per_symbol)?,
            input_symbols: table.total(),
            encoded_bits: encoded_len(codebook, table)?,
            entries,
        })
    }

    /// Text report: `Total Savings: <n>` then `<symbol>: <frequency>: <code>` per line.
    pub fn render(&self) -> String {
        let mut s = String::new();

        s.push_str(&format!("Total Savings: {}\n", self.total_savings));
        for entry in self.entries.iter() {
            s.push_str(&format!("{}: {}: {}\n", entry.symbol, entry.frequency, entry.code));
        }

        s
    }
}
