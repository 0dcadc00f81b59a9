//! Bit-by-bit decoding against the coding tree.

use crate::tree::{HuffmanTree, Node};
use textpress_core::BitString;

/// Walk the tree one bit at a time, emitting a symbol at every leaf.
///
/// The cursor starts at the root and resets there after each emission: a
/// 0 bit steps left, a 1 bit steps right. A cursor stranded on a leaf can
/// only arise from a malformed stream or a degenerate tree; it resets to
/// the root without emitting, skipping that bit rather than failing.
/// Garbage input therefore yields garbage output, never a panic. Decoding
/// ends when the bits are exhausted.
pub fn decode_bits(tree: &HuffmanTree, bits: &BitString) -> Vec<u8> {
    let mut output = Vec::new();
    let mut cursor = tree.root();

    for bit in bits.iter() {
        let next = match cursor {
            Node::Internal { left, right, .. } => {
                if bit {
                    right.as_ref()
                } else {
                    left.as_ref()
                }
            }
            Node::Leaf { .. } => {
                cursor = tree.root();
                continue;
            }
        };
        match next {
            Node::Leaf { symbol, .. } => {
                output.push(*symbol);
                cursor = tree.root();
            }
            Node::Internal { .. } => cursor = next,
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::CodeTable;
    use crate::encoder::encode_symbols;
    use crate::freq::FrequencyTable;
    use crate::tree::HuffmanTree;

    fn tree_for(sample: &[u8]) -> HuffmanTree {
        let frequencies = FrequencyTable::from_symbols(sample.iter().copied()).unwrap();
        HuffmanTree::from_frequencies(&frequencies)
    }

    #[test]
    fn test_decode_inverts_encode() {
        let sample = b"compression is the art of forgetting";
        let tree = tree_for(sample);
        let codes = CodeTable::from_tree(&tree);

        let bits = encode_symbols(&codes, sample.iter().copied()).unwrap();
        assert_eq!(decode_bits(&tree, &bits), sample);
    }

    #[test]
    fn test_decode_two_symbol_stream() {
        // b = "0", a = "1".
        let tree = tree_for(b"aaab");
        let bits: BitString = "1110".parse().unwrap();
        assert_eq!(decode_bits(&tree, &bits), b"aaab");
    }

    #[test]
    fn test_decode_empty_bits() {
        let tree = tree_for(b"aaab");
        assert!(decode_bits(&tree, &BitString::new()).is_empty());
    }

    #[test]
    fn test_trailing_partial_code_emits_nothing_extra() {
        // Three full codes plus a dangling prefix of a fourth: the walk
        // ends mid-tree and the partial code is dropped.
        let sample = b"abcdefgh";
        let tree = tree_for(sample);
        let codes = CodeTable::from_tree(&tree);

        let mut bits = encode_symbols(&codes, b"abc".iter().copied()).unwrap();
        bits.push(false);
        assert_eq!(decode_bits(&tree, &bits), b"abc");
    }
}
