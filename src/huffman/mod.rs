//! Generalized (radix-n) Huffman coding.

pub mod builder;
pub mod table;

use std::fmt::Display;
use std::hash::Hash;

pub use builder::CodingTableBuilder;
pub use table::CodingTable;

use crate::error::EncodeError;
use crate::Digit;

/// Builds the coding table of `message` for codewords written with `radix` digits.
///
/// The result only depends on `radix` and `message`: ties between equally frequent groups are
/// broken by comparing their symbols.
pub fn generate_coding_table<S>(radix: usize, message: &[S]) -> Result<CodingTable<S>, EncodeError>
where
    S: Clone + Eq + Hash + Ord + Display,
{
    let mut builder = CodingTableBuilder::new(radix);
    builder.push_all(message);
    builder.build()
}

/// Encodes `message` with `table`, concatenating the codewords of its symbols.
///
/// Fails if the message is empty or if one of its symbols has no codeword in `table`.
pub fn encode<S>(table: &CodingTable<S>, message: &[S]) -> Result<Vec<Digit>, EncodeError>
where
    S: Clone + Eq + Hash + Display,
{
    table.encode(message)
}
