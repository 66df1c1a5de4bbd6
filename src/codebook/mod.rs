use std::{collections::HashMap, fmt::{self, Display}, str::FromStr};

use serde::{Serialize, Deserialize, Serializer, Deserializer, de};

use crate::{error::{Error, Result}, huffman_tree::{HuffNode, HuffmanTree}, symbol::Symbol};

/// A code word: the root-to-leaf path of a symbol, `false` for a left turn
/// and `true` for a right turn.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code {
    bits: Vec<bool>,
}

impl Code {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    #[inline(always)]
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    pub fn pop(&mut self) -> Option<bool> {
        self.bits.pop()
    }

    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(&self.bits)
    }
}

impl From<Vec<bool>> for Code {
    fn from(bits: Vec<bool>) -> Self {
        Code { bits }
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in self.bits.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let bits = s.chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(Error::MalformedInput(format!("invalid bit {:?} in code {:?}", c, s))),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Code { bits })
    }
}

impl Serialize for Code {
    fn serialize<Z: Serializer>(&self, serializer: Z) -> std::result::Result<Z::Ok, Z::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Code {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Mapping from symbol to code word, derived once from a finished tree.
///
/// The codebook owns its codes and keeps no reference to the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Codebook<S: Symbol> {
    codes: HashMap<S, Code>,
}

impl<S: Symbol> Codebook<S> {
    /// Walks the tree depth-first, carrying the current path down the
    /// recursion, and records the path of every leaf.
    ///
    /// A tree made of a single leaf gets the code `0`, so that every occurrence
    /// of the only symbol still costs one bit.
    pub fn from_tree(tree: &HuffmanTree<S>) -> Result<Self> {
        let mut codes = HashMap::with_capacity(tree.leaf_count());

        match &tree.root {
            HuffNode::Leaf { symbol, .. } => {
                codes.insert(*symbol, Code::from(vec![false]));
            },
            root => {
                let mut path = Code::new();
                Self::collect_codes(root, &mut path, &mut codes);
            }
        }

        let codebook = Codebook { codes };
        codebook.check_prefix_free()?;
        Ok(codebook)
    }

    fn collect_codes(node: &HuffNode<S>, path: &mut Code, codes: &mut HashMap<S, Code>) {
        match node {
            HuffNode::Leaf { symbol, .. } => {
                codes.insert(*symbol, path.clone());
            },
            HuffNode::Internal { left, right, .. } => {
                path.push(false);
                Self::collect_codes(left, path, codes);
                path.pop();

                path.push(true);
                Self::collect_codes(right, path, codes);
                path.pop();
            }
        }
    }

    /// Builds a codebook from explicit entries, e.g. a deserialized one.
    /// The entries must form a non-empty prefix-free code with no empty word.
    pub fn from_entries<I: IntoIterator<Item = (S, Code)>>(entries: I) -> Result<Self> {
        let mut codes = HashMap::new();
        for (symbol, code) in entries {
            if codes.insert(symbol, code).is_some() {
                return Err(Error::MalformedInput(format!("symbol {} has two codes", symbol.render())));
            }
        }
        if codes.is_empty() {
            return Err(Error::EmptyInput);
        }

        let codebook = Codebook { codes };
        codebook.check_prefix_free()?;
        Ok(codebook)
    }

    /// Fails with `InvariantViolation` if a code is empty or is a prefix of another one.
    ///
    /// Sorting the codes lexicographically puts every prefix right before
    /// the words it prefixes, so checking neighbours is enough.
    pub fn check_prefix_free(&self) -> Result<()> {
        let mut sorted: Vec<(&Code, &S)> = self.codes.iter().map(|(s, c)| (c, s)).collect();
        sorted.sort();

        if let Some((code, symbol)) = sorted.first() {
            if code.is_empty() {
                return Err(Error::InvariantViolation(format!("symbol {} has an empty code", symbol.render())));
            }
        }

        for pair in sorted.windows(2) {
            let (a, sa) = pair[0];
            let (b, sb) = pair[1];
            if a.is_prefix_of(b) {
                return Err(Error::InvariantViolation(format!(
                    "code {} of {} is a prefix of code {} of {}", a, sa.render(), b, sb.render()
                )));
            }
        }
        Ok(())
    }

    #[inline(always)]
    pub fn get(&self, symbol: &S) -> Option<&Code> {
        self.codes.get(symbol)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn contains(&self, symbol: &S) -> bool {
        self.codes.contains_key(symbol)
    }

    /// Entries in ascending symbol order.
    pub fn entries(&self) -> Vec<(S, &Code)> {
        let mut entries: Vec<_> = self.codes.iter().map(|(&s, c)| (s, c)).collect();
        entries.sort_by_key(|&(s, _)| s);
        entries
    }

    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(Code::len).max().unwrap_or(0)
    }
}
