//! One-shot coding session tying the pipeline stages together.

use crate::codes::CodeTable;
use crate::decoder::decode_bits;
use crate::encoder::encode_symbols;
use crate::freq::FrequencyTable;
use crate::tree::HuffmanTree;
use std::fs;
use std::io::Read;
use std::path::Path;
use textpress_core::BitString;
use textpress_core::error::{Result, TextPressError};

/// A Huffman coding session built from one input sample.
///
/// Construction runs the full pipeline once: frequency analysis, the
/// two-queue tree merge, and code assignment. The tree is retained for
/// decoding and never mutated afterwards.
///
/// The packed byte format carries no header or embedded tree. Decoding
/// therefore needs this session's tree, or one rebuilt from the same
/// sample: construction is deterministic, so a rebuild is bit-exact.
///
/// # Example
///
/// ```
/// use textpress_huffman::HuffmanCoder;
///
/// let sample = b"if it fits it sits";
/// let coder = HuffmanCoder::from_sample(sample).unwrap();
///
/// let packed = coder.encode(sample).unwrap();
/// assert_eq!(coder.decode(&packed), sample);
/// ```
#[derive(Debug, Clone)]
pub struct HuffmanCoder {
    frequencies: FrequencyTable,
    tree: HuffmanTree,
    codes: CodeTable,
}

impl HuffmanCoder {
    /// Build a session from an in-memory sample.
    pub fn from_sample(sample: &[u8]) -> Result<Self> {
        Ok(Self::from_frequencies(FrequencyTable::from_symbols(
            sample.iter().copied(),
        )?))
    }

    /// Build a session by scanning a character source to its end.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Ok(Self::from_frequencies(FrequencyTable::from_reader(reader)?))
    }

    /// Build a session from the contents of a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let sample = read_resource(path.as_ref())?;
        Self::from_sample(&sample)
    }

    fn from_frequencies(frequencies: FrequencyTable) -> Self {
        let tree = HuffmanTree::from_frequencies(&frequencies);
        let codes = CodeTable::from_tree(&tree);
        Self {
            frequencies,
            tree,
            codes,
        }
    }

    /// Encode a symbol sequence into padded packed bytes.
    ///
    /// Every input symbol must carry a code from this session's sample;
    /// see [`TextPressError::UnmappedSymbol`].
    pub fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        let bits = encode_symbols(&self.codes, input.iter().copied())?;
        Ok(bits.to_padded_bytes())
    }

    /// Decode padded packed bytes back into symbols.
    ///
    /// Decoding is lenient: a missing padding sentinel or a malformed
    /// stream produces garbage output rather than an error.
    pub fn decode(&self, packed: &[u8]) -> Vec<u8> {
        let bits = BitString::from_padded_bytes(packed);
        decode_bits(&self.tree, &bits)
    }

    /// Encode the contents of `input` and write the packed bytes to
    /// `output`, creating or truncating it.
    ///
    /// Encoding completes before the sink is touched, so a fatal encode
    /// error leaves no partial output behind.
    pub fn encode_file(&self, input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<()> {
        let text = read_resource(input.as_ref())?;
        let packed = self.encode(&text)?;
        write_resource(output.as_ref(), &packed)
    }

    /// Decode the packed bytes in `encoded` and write the recovered text
    /// to `output`, creating or truncating it.
    pub fn decode_file(&self, encoded: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<()> {
        let packed = read_resource(encoded.as_ref())?;
        let text = self.decode(&packed);
        write_resource(output.as_ref(), &text)
    }

    /// The sorted frequency table this session was built from.
    pub fn frequency_table(&self) -> &FrequencyTable {
        &self.frequencies
    }

    /// The coding tree.
    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    /// The per-symbol code table.
    pub fn code_table(&self) -> &CodeTable {
        &self.codes
    }
}

fn read_resource(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| TextPressError::resource(path, "read", source))
}

fn write_resource(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).map_err(|source| TextPressError::resource(path, "write", source))
}
