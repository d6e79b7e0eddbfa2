//! Radix-n prefix codes.
//!
//! The crate provides two independent halves:
//! - [`Decoder`](decoder::Decoder): a prefix-tree decoder fed with (symbol, codeword) pairs,
//!   from any source, which turns sequences of coding symbols back into symbols;
//! - [`huffman`]: a generalized Huffman construction which, given a radix and a message,
//!   builds a prefix-free [`CodingTable`](huffman::CodingTable) biased towards short
//!   codewords for frequent symbols, and encodes messages with it.
//!
//! [`PrefixCodec`](codec::PrefixCodec) ties the two together.

pub mod codec;
pub mod decoder;
pub mod error;
pub mod huffman;
pub mod tree;
pub mod utils;

pub use codec::PrefixCodec;
pub use decoder::Decoder;
pub use error::{Error, Result};
pub use huffman::{encode, generate_coding_table, CodingTable, CodingTableBuilder};
pub use tree::PrefixTree;

/// The type of the coding symbols produced by the encoder.
///
/// A digit is the index of a coding symbol in an alphabet of `radix` symbols, thus it always
/// lies in `0..radix`.
pub type Digit = usize;

/// The radix used when none is given, i.e. binary codes.
pub const DEFAULT_RADIX: usize = 2;

/// The separator placed between the lines of a code listing.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";

/// The separator placed between the lines of a code listing.
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";
