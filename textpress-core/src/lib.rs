//! # TextPress Core
//!
//! Core components for the TextPress Huffman coder.
//!
//! This crate provides the bit-level building blocks shared by the codec
//! and the CLI:
//!
//! - [`bitstream`]: [`BitString`] bit buffers and the padding-sentinel
//!   packed byte format
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! TextPress is layered the same way as larger codec stacks:
//!
//! ```text
//! ┌────────────────────────────────────────────────┐
//! │ CLI                                            │
//! │     encode / decode / table commands           │
//! ├────────────────────────────────────────────────┤
//! │ Codec (textpress-huffman)                      │
//! │     frequency table, tree merge, code table    │
//! ├────────────────────────────────────────────────┤
//! │ BitStream (this crate)                         │
//! │     BitString, padded pack/unpack, errors      │
//! └────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use textpress_core::BitString;
//!
//! let bits: BitString = "10110".parse().unwrap();
//! let packed = bits.to_padded_bytes();
//! assert_eq!(BitString::from_padded_bytes(&packed), bits);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bitstream;
pub mod error;

// Re-exports for convenience
pub use bitstream::BitString;
pub use error::{Result, TextPressError};
