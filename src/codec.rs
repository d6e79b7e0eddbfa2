use std::fmt::Display;
use std::hash::Hash;

use crate::decoder::Decoder;
use crate::error::Result;
use crate::huffman::{generate_coding_table, CodingTable};
use crate::Digit;

/// A coding table together with a decoder seeded with it.
///
/// The decoder works over the digit alphabet `0..radix`, the same alphabet the table's
/// codewords are written with.
#[derive(Clone, Debug)]
pub struct PrefixCodec<S: Eq + Hash> {
    table: CodingTable<S>,
    decoder: Decoder<Digit, S>,
}

impl<S> PrefixCodec<S>
where
    S: Clone + Eq + Hash + Ord + Display,
{
    /// Builds the code of `message` with the given `radix` and registers it in a new decoder.
    pub fn from_message(radix: usize, message: &[S]) -> Result<Self> {
        let table = generate_coding_table(radix, message)?;
        Self::from_table(table)
    }

    /// Registers every entry of `table` in a new decoder.
    pub fn from_table(table: CodingTable<S>) -> Result<Self> {
        let codes = table
            .iter()
            .map(|(symbol, codeword)| (symbol.clone(), codeword.to_vec()))
            .collect::<Vec<_>>();
        let decoder = Decoder::from_codes(0..table.radix(), codes)?;

        Ok(Self { table, decoder })
    }

    pub fn table(&self) -> &CodingTable<S> {
        &self.table
    }

    pub fn decoder(&self) -> &Decoder<Digit, S> {
        &self.decoder
    }

    pub fn encode(&self, message: &[S]) -> Result<Vec<Digit>> {
        Ok(self.table.encode(message)?)
    }

    pub fn decode(&self, digits: &[Digit]) -> Result<Vec<S>> {
        Ok(self.decoder.decode(digits)?)
    }
}
