//! Error types for TextPress operations.
//!
//! This module provides the shared error type covering I/O failures,
//! alphabet violations during frequency analysis and encoding, and
//! malformed bit-string input.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for TextPress operations.
#[derive(Debug, Error)]
pub enum TextPressError {
    /// I/O error from an underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A named resource could not be opened, read, or written.
    #[error("cannot {op} {}: {source}", .path.display())]
    Resource {
        /// Path of the resource involved.
        path: PathBuf,
        /// Operation that failed ("read" or "write").
        op: &'static str,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Frequency analysis found no symbols in the input.
    #[error("input contains no symbols")]
    EmptyInput,

    /// A byte outside the fixed 128-symbol alphabet was encountered.
    #[error("symbol {symbol:#04x} is outside the supported alphabet")]
    SymbolOutOfRange {
        /// The offending byte value.
        symbol: u8,
    },

    /// Encoding hit a symbol with no entry in the code table.
    #[error("no code for symbol {symbol:#04x}: it did not appear in the frequency sample")]
    UnmappedSymbol {
        /// The symbol with no assigned code.
        symbol: u8,
    },

    /// A textual bit string contained a character other than '0' or '1'.
    #[error("invalid character {found:?} at position {position} in bit string")]
    MalformedBitString {
        /// Zero-based position of the offending character.
        position: usize,
        /// The character found there.
        found: char,
    },
}

/// Result type alias for TextPress operations.
pub type Result<T> = std::result::Result<T, TextPressError>;

impl TextPressError {
    /// Create a resource-access error with path and operation context.
    pub fn resource(path: impl Into<PathBuf>, op: &'static str, source: io::Error) -> Self {
        Self::Resource {
            path: path.into(),
            op,
            source,
        }
    }

    /// Create an out-of-alphabet symbol error.
    pub fn symbol_out_of_range(symbol: u8) -> Self {
        Self::SymbolOutOfRange { symbol }
    }

    /// Create an unmapped-symbol error.
    pub fn unmapped_symbol(symbol: u8) -> Self {
        Self::UnmappedSymbol { symbol }
    }

    /// Create a malformed bit-string error.
    pub fn malformed_bit_string(position: usize, found: char) -> Self {
        Self::MalformedBitString { position, found }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TextPressError::resource(
            "missing.txt",
            "read",
            io::Error::new(io::ErrorKind::NotFound, "file not found"),
        );
        assert!(err.to_string().contains("missing.txt"));
        assert!(err.to_string().contains("read"));

        let err = TextPressError::unmapped_symbol(b'q');
        assert!(err.to_string().contains("0x71"));

        let err = TextPressError::malformed_bit_string(3, 'x');
        assert!(err.to_string().contains("position 3"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: TextPressError = io_err.into();
        assert!(matches!(err, TextPressError::Io(_)));
    }
}
