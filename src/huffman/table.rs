use std::collections::HashMap;
use std::fmt::{self, Display};
use std::hash::Hash;

use itertools::Itertools;

use crate::error::EncodeError;
use crate::{Digit, LINE_SEPARATOR};

/// A symbol → codeword table, as built by a [`CodingTableBuilder`](super::CodingTableBuilder).
///
/// Entries are kept in the order in which symbols first occurred in the message the table was
/// built from, so that iterating over the table is deterministic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodingTable<S: Eq + Hash> {
    /// The (symbol, codeword) pairs.
    entries: Vec<(S, Vec<Digit>)>,

    /// The position, in `entries`, of each symbol.
    index: HashMap<S, usize>,

    /// The number of digits codewords are written with.
    radix: usize,
}

impl<S: Clone + Eq + Hash> CodingTable<S> {
    pub(crate) fn with_capacity(radix: usize, capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            radix,
        }
    }

    pub(crate) fn push(&mut self, symbol: S, codeword: Vec<Digit>) {
        self.index.insert(symbol.clone(), self.entries.len());
        self.entries.push((symbol, codeword));
    }

    pub fn radix(&self) -> usize {
        self.radix
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The codeword of `symbol`, if the table has one.
    pub fn get(&self, symbol: &S) -> Option<&[Digit]> {
        self.index
            .get(symbol)
            .map(|position| self.entries[*position].1.as_slice())
    }

    /// Iterates over the (symbol, codeword) pairs in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &[Digit])> {
        self.entries
            .iter()
            .map(|(symbol, codeword)| (symbol, codeword.as_slice()))
    }

    /// The length of each codeword, in first-occurrence order.
    pub fn codeword_lengths(&self) -> Vec<usize> {
        self.entries.iter().map(|(_, codeword)| codeword.len()).collect()
    }

    /// Encodes `message` by concatenating the codewords of its symbols.
    pub fn encode(&self, message: &[S]) -> Result<Vec<Digit>, EncodeError>
    where
        S: Display,
    {
        if message.is_empty() {
            return Err(EncodeError::EmptyMessage);
        }

        let mut encoded = Vec::with_capacity(message.len());
        for symbol in message {
            let codeword = self
                .get(symbol)
                .ok_or_else(|| EncodeError::SymbolNotFound(symbol.to_string()))?;
            encoded.extend_from_slice(codeword);
        }
        Ok(encoded)
    }
}

impl<S: Eq + Hash> IntoIterator for CodingTable<S> {
    type Item = (S, Vec<Digit>);
    type IntoIter = std::vec::IntoIter<(S, Vec<Digit>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<S: Eq + Hash + Display> Display for CodingTable<S> {
    /// Writes one `symbol:codeword` line per entry.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .entries
            .iter()
            .map(|(symbol, codeword)| format!("{}:{}", symbol, codeword.iter().join("")));
        write!(f, "{}", lines.format(LINE_SEPARATOR))
    }
}
