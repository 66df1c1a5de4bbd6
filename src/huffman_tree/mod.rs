use std::collections::HashSet;

use crate::{error::{Error, Result}, frequency::FrequencyTable, min_heap::{MinHeap, Weighted}, symbol::Symbol};

/// A node of the Huffman tree. Children are owned exclusively by their parent
/// and a node is never modified once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffNode<S: Symbol> {
    Leaf {
        symbol: S,
        weight: u64,
    },
    Internal {
        weight: u64,
        left: Box<HuffNode<S>>,
        right: Box<HuffNode<S>>,
    },
}

impl<S: Symbol> HuffNode<S> {
    pub fn leaf(symbol: S, weight: u64) -> Self {
        HuffNode::Leaf { symbol, weight }
    }

    /// Joins two subtrees, `left` being the one extracted first.
    pub fn merge(left: Self, right: Self) -> Self {
        HuffNode::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 1,
            HuffNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Depth of the deepest leaf; a lone leaf has depth 0.
    pub fn height(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 0,
            HuffNode::Internal { left, right, .. } => 1 + left.height().max(right.height()),
        }
    }
}

impl<S: Symbol> Weighted for HuffNode<S> {
    #[inline(always)]
    fn weight(&self) -> u64 {
        match self {
            HuffNode::Leaf { weight, .. } => *weight,
            HuffNode::Internal { weight, .. } => *weight,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<S: Symbol> {
    pub root: HuffNode<S>,
}

impl<S: Symbol> HuffmanTree<S> {
    /// Builds the tree by repeatedly merging the two lightest nodes.
    ///
    /// Leaves enter the queue in ascending symbol order, so with the queue's
    /// insertion-order tie-break the resulting tree is fully determined by the
    /// frequency table. A single-symbol table yields a lone leaf as root.
    pub fn build(table: &FrequencyTable<S>) -> Result<Self> {
        if table.is_empty() {
            return Err(Error::EmptyInput);
        }

        // Every subtree weighs at most table.total(), which fits in a u64
        let mut heap = MinHeap::build(table.iter().map(|(symbol, count)| HuffNode::leaf(symbol, count)));

        while heap.len() > 1 {
            let a = heap.extract_min()?;
            let b = heap.extract_min()?;
            heap.insert(HuffNode::merge(a, b))?;
        }

        let root = heap.finish()?;
        let tree = HuffmanTree { root };
        tree.validate(table)?;

        Ok(tree)
    }

    #[inline(always)]
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    #[inline(always)]
    pub fn weight(&self) -> u64 {
        self.root.weight()
    }

    /// Checks the structural contract against the table the tree was built from:
    /// one leaf per symbol with its count as weight, and internal weights equal
    /// to the sum of their children.
    pub fn validate(&self, table: &FrequencyTable<S>) -> Result<()> {
        let mut seen = HashSet::with_capacity(table.len());
        self.validate_node(&self.root, table, &mut seen)?;

        if seen.len() != table.len() {
            return Err(Error::InvariantViolation(format!(
                "tree has {} leaves but the table has {} symbols", seen.len(), table.len()
            )));
        }
        Ok(())
    }

    fn validate_node(&self, node: &HuffNode<S>, table: &FrequencyTable<S>, seen: &mut HashSet<S>) -> Result<()> {
        match node {
            HuffNode::Leaf { symbol, weight } => {
                if !seen.insert(*symbol) {
                    return Err(Error::InvariantViolation(format!("symbol {:?} appears twice in the tree", symbol)));
                }
                if table.get(symbol) != Some(*weight) {
                    return Err(Error::InvariantViolation(format!(
                        "leaf {:?} has weight {} but count {:?}", symbol, weight, table.get(symbol)
                    )));
                }
                Ok(())
            },
            HuffNode::Internal { weight, left, right } => {
                if *weight != left.weight() + right.weight() {
                    return Err(Error::InvariantViolation(format!(
                        "internal weight {} differs from children sum {}", weight, left.weight() + right.weight()
                    )));
                }
                self.validate_node(left, table, seen)?;
                self.validate_node(right, table, seen)
            }
        }
    }

    /// Indented dump of the tree, one node per line.
    pub fn render_structure(&self) -> String {
        let mut out = String::new();
        Self::render_node(&self.root, 0, "root", &mut out);
        out
    }

    fn render_node(node: &HuffNode<S>, depth: usize, label: &str, out: &mut String) {
        let indent = "  ".repeat(depth);
        match node {
            HuffNode::Leaf { symbol, weight } => {
                out.push_str(&format!("{}{} -> leaf {} [weight: {}]\n", indent, label, symbol.render(), weight));
            },
            HuffNode::Internal { weight, left, right } => {
                out.push_str(&format!("{}{} -> internal [weight: {}]\n", indent, label, weight));
                Self::render_node(left, depth + 1, "0", out);
                Self::render_node(right, depth + 1, "1", out);
            }
        }
    }
}

#[cfg(test)]
mod tests;
