//! Symbol frequency analysis.
//!
//! The first stage of the coding pipeline: scan an input once, count each
//! alphabet symbol, and produce the list of per-symbol occurrence
//! probabilities sorted ascending. The sorted list is the seed for the
//! tree merge, which consumes it in exactly this order.

use crate::ALPHABET_SIZE;
use std::io::Read;
use textpress_core::error::{Result, TextPressError};

/// A symbol paired with its probability of occurrence in the sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharFreq {
    /// Alphabet symbol (always `< 128`).
    pub symbol: u8,
    /// Occurrence probability in `[0, 1]`.
    pub probability: f64,
}

/// Sorted per-symbol occurrence probabilities for one input sample.
///
/// Construction guarantees at least two entries: an input with a single
/// distinct symbol gets a synthetic zero-probability neighbor injected, so
/// the tree merge downstream always has a branching decision to make.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    /// Entries sorted by probability ascending, symbol ascending on ties.
    entries: Vec<CharFreq>,
    /// Total number of symbols scanned.
    total: u64,
}

impl FrequencyTable {
    /// Scan a symbol sequence and build the sorted frequency list.
    ///
    /// # Errors
    ///
    /// - [`TextPressError::EmptyInput`] if the sequence yields no symbols.
    /// - [`TextPressError::SymbolOutOfRange`] for any byte `>= 128`.
    pub fn from_symbols(symbols: impl IntoIterator<Item = u8>) -> Result<Self> {
        let mut counts = [0u64; ALPHABET_SIZE];
        let mut total = 0u64;

        for symbol in symbols {
            if symbol as usize >= ALPHABET_SIZE {
                return Err(TextPressError::symbol_out_of_range(symbol));
            }
            counts[symbol as usize] += 1;
            total += 1;
        }

        if total == 0 {
            return Err(TextPressError::EmptyInput);
        }

        let mut entries: Vec<CharFreq> = counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(symbol, &count)| CharFreq {
                symbol: symbol as u8,
                probability: count as f64 / total as f64,
            })
            .collect();

        // A lone symbol cannot form a branching tree. Inject a synthetic
        // zero-probability neighbor (wrapping at the alphabet edge) so the
        // merge always starts from two leaves.
        if entries.len() == 1 {
            entries.push(CharFreq {
                symbol: (entries[0].symbol + 1) % ALPHABET_SIZE as u8,
                probability: 0.0,
            });
        }

        entries.sort_by(|a, b| {
            a.probability
                .total_cmp(&b.probability)
                .then(a.symbol.cmp(&b.symbol))
        });

        Ok(Self { entries, total })
    }

    /// Scan a character source sequentially until end of input.
    ///
    /// End of input is the terminal condition, not an error.
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut sample = Vec::new();
        reader.read_to_end(&mut sample)?;
        Self::from_symbols(sample)
    }

    /// The sorted `(symbol, probability)` entries, ascending.
    pub fn entries(&self) -> &[CharFreq] {
        &self.entries
    }

    /// Number of entries in the sorted list (distinct symbols observed,
    /// plus the synthetic one for single-symbol input).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: construction rejects empty input.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of symbols scanned from the sample.
    pub fn total_symbols(&self) -> u64 {
        self.total
    }
}
