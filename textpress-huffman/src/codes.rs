//! Per-symbol code table derived from the tree.
//!
//! A depth-first walk of the coding tree assigns each leaf its
//! root-to-leaf bit path: left edges contribute 0, right edges 1. A
//! symbol's code length therefore equals its leaf depth, and the table is
//! prefix-free because leaves share no descendants.

use crate::ALPHABET_SIZE;
use crate::tree::{HuffmanTree, Node};
use textpress_core::BitString;

/// Maps each observed symbol to its root-to-leaf bit code.
///
/// Symbols absent from the frequency sample have no entry and cannot be
/// encoded.
#[derive(Debug, Clone)]
pub struct CodeTable {
    codes: Vec<Option<BitString>>,
}

impl CodeTable {
    /// Assign codes by exhaustive depth-first traversal of the tree.
    ///
    /// Recursion depth is bounded by the leaf count, which the alphabet
    /// caps at 128.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = vec![None; ALPHABET_SIZE];
        let mut path = BitString::new();
        collect(tree.root(), &mut path, &mut codes);
        Self { codes }
    }

    /// The code for `symbol`, or `None` if it was never observed.
    pub fn code(&self, symbol: u8) -> Option<&BitString> {
        self.codes.get(symbol as usize).and_then(Option::as_ref)
    }

    /// Iterate over `(symbol, code)` pairs in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &BitString)> {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(symbol, code)| code.as_ref().map(|c| (symbol as u8, c)))
    }

    /// Number of symbols with an assigned code.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|c| c.is_some()).count()
    }

    /// Whether no symbol has a code.
    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(Option::is_none)
    }
}

fn collect(node: &Node, path: &mut BitString, codes: &mut [Option<BitString>]) {
    match node {
        Node::Leaf { symbol, .. } => {
            codes[*symbol as usize] = Some(path.clone());
        }
        Node::Internal { left, right, .. } => {
            path.push(false);
            collect(left, path, codes);
            path.pop();
            path.push(true);
            collect(right, path, codes);
            path.pop();
        }
    }
}
