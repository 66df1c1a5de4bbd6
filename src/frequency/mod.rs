use std::collections::BTreeMap;

use crate::{error::{Error, Result}, symbol::Symbol};

/// Occurrence count of every symbol found in an input sequence.
///
/// Every stored count is at least 1. Iteration is in ascending symbol order,
/// which is also the order leaves are loaded into the priority queue.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable<S: Symbol> {
    counts: BTreeMap<S, u64>,
    total: u64,
}

impl<S: Symbol> FrequencyTable<S> {
    pub fn new() -> Self {
        Self { counts: BTreeMap::new(), total: 0 }
    }

    /// Scans `symbols` once and counts every occurrence.
    pub fn tabulate(symbols: &[S]) -> Self {
        let mut table = Self::new();
        for &s in symbols.iter() {
            table.counts.entry(s).and_modify(|freq| *freq += 1).or_insert(1);
        }
        table.total = symbols.len() as u64;
        table
    }

    /// Builds a table from explicit counts. Zero counts are dropped and
    /// repeated symbols are summed.
    ///
    /// The total must fit in a `u64`, otherwise `InvariantViolation` is returned.
    pub fn from_counts<I: IntoIterator<Item = (S, u64)>>(counts: I) -> Result<Self> {
        let mut table = Self::new();
        for (s, count) in counts {
            if count == 0 {
                continue;
            }
            table.total = table.total.checked_add(count)
                .ok_or_else(|| Error::InvariantViolation(format!("total count overflows at symbol {}", s.render())))?;
            // Each count is bounded by the total, so this sum cannot overflow
            *table.counts.entry(s).or_insert(0) += count;
        }
        Ok(table)
    }

    #[inline(always)]
    pub fn get(&self, symbol: &S) -> Option<u64> {
        self.counts.get(symbol).copied()
    }

    /// Number of distinct symbols.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of symbols in the tabulated input.
    #[inline(always)]
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn iter(&self) -> impl Iterator<Item = (S, u64)> + '_ {
        self.counts.iter().map(|(&s, &c)| (s, c))
    }

    pub fn symbols(&self) -> impl Iterator<Item = S> + '_ {
        self.counts.keys().copied()
    }
}

#[cfg(test)]
mod tests;
