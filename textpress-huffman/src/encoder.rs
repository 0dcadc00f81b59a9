//! Symbol-to-bitstring encoding.

use crate::codes::CodeTable;
use textpress_core::BitString;
use textpress_core::error::{Result, TextPressError};

/// Encode a symbol sequence into one concatenated bit string.
///
/// Each symbol is looked up in the code table and its code appended in
/// order. A symbol with no entry never appeared in the frequency sample;
/// that alphabet mismatch is fatal and nothing is emitted.
pub fn encode_symbols(
    codes: &CodeTable,
    symbols: impl IntoIterator<Item = u8>,
) -> Result<BitString> {
    let mut bits = BitString::new();
    for symbol in symbols {
        let code = codes
            .code(symbol)
            .ok_or(TextPressError::UnmappedSymbol { symbol })?;
        bits.extend_from(code);
    }
    Ok(bits)
}
