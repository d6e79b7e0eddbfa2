use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};
use std::fmt::Display;
use std::hash::Hash;

use log::{debug, info};

use crate::error::EncodeError;
use crate::huffman::CodingTable;
use crate::utils::{entropy, expected_length};
use crate::Digit;

/// A set of symbols merged so far, as stored in the priority queue of the builder.
///
/// Groups are ordered by weight first and then by label, so that the queue pops them in a
/// deterministic order even when weights tie.
#[derive(Debug)]
struct MergeGroup<S> {
    /// The summed frequency of the symbols in the group.
    weight: usize,

    /// The symbols in the group, in merge order.
    label: Vec<S>,

    /// The index, in first-occurrence order, of each symbol in `label`.
    members: Vec<usize>,
}

impl<S: Ord> Ord for MergeGroup<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.label.cmp(&other.label))
    }
}

impl<S: Ord> PartialOrd for MergeGroup<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: Ord> PartialEq for MergeGroup<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S: Ord> Eq for MergeGroup<S> {}

/// # Coding table builder
/// Collects the frequencies of the symbols of a message and then builds, with a radix-n
/// generalization of Huffman's algorithm, a prefix-free [`CodingTable`] whose codewords are
/// written with the digits `0..radix`.
///
/// ```
/// use nary_huffman::CodingTableBuilder;
///
/// let mut builder = CodingTableBuilder::new(3);
/// builder.push_all(&['a', 'a', 'b', 'c', 'd']);
/// let table = builder.build().unwrap();
///
/// // 'b', 'c' and 'd' are merged first, then their group is merged with 'a'.
/// assert_eq!(table.get(&'a'), Some(&[0][..]));
/// assert_eq!(table.get(&'d'), Some(&[1, 2][..]));
/// ```
#[derive(Clone, Debug)]
pub struct CodingTableBuilder<S> {
    /// The number of digits available to write the codewords.
    radix: usize,

    /// The frequency of each symbol.
    freqs: HashMap<S, usize>,

    /// The distinct symbols, in first-occurrence order.
    symbols: Vec<S>,

    /// The number of symbols pushed so far.
    total_freq: usize,
}

impl<S> CodingTableBuilder<S>
where
    S: Clone + Eq + Hash + Ord + Display,
{
    /// Creates a builder for codewords written with `radix` digits.
    pub fn new(radix: usize) -> Self {
        Self {
            radix,
            freqs: HashMap::new(),
            symbols: Vec::new(),
            total_freq: 0,
        }
    }

    /// Pushes a new symbol of the message into the builder.
    pub fn push_symbol(&mut self, symbol: S) {
        self.total_freq += 1;
        match self.freqs.get_mut(&symbol) {
            Some(freq) => *freq += 1,
            None => {
                self.freqs.insert(symbol.clone(), 1);
                self.symbols.push(symbol);
            }
        }
    }

    /// Pushes every symbol of `message`, in order.
    pub fn push_all(&mut self, message: &[S]) {
        for symbol in message {
            self.push_symbol(symbol.clone());
        }
    }

    /// The frequency of each distinct symbol, in first-occurrence order.
    pub fn frequencies(&self) -> Vec<(&S, usize)> {
        self.symbols
            .iter()
            .map(|symbol| (symbol, self.freqs[symbol]))
            .collect()
    }

    /// Builds the coding table.
    ///
    /// The lightest groups are merged `radix` at a time, the i-th popped group prepending the
    /// digit `i` to the codewords of its symbols, until a single group is left. The last round
    /// merges whatever is left in the queue, without zero-weight padding, thus the code is not
    /// guaranteed to be optimal when `(distinct symbols - 1)` is not a multiple of `(radix - 1)`.
    ///
    /// A message made of a single distinct symbol gets the one-digit codeword `0`.
    pub fn build(self) -> Result<CodingTable<S>, EncodeError> {
        if self.total_freq == 0 {
            return Err(EncodeError::EmptyMessage);
        }

        let distinct = self.symbols.len();
        if self.radix == 0 || (self.radix == 1 && distinct > 1) {
            return Err(EncodeError::InvalidRadix {
                radix: self.radix,
                distinct,
            });
        }

        // the digits of each codeword, from the leaf up to the root.
        let mut reversed_codes: Vec<Vec<Digit>> = vec![Vec::new(); distinct];

        let mut queue = self
            .symbols
            .iter()
            .enumerate()
            .map(|(index, symbol)| {
                Reverse(MergeGroup {
                    weight: self.freqs[symbol],
                    label: vec![symbol.clone()],
                    members: vec![index],
                })
            })
            .collect::<BinaryHeap<_>>();

        if distinct == 1 {
            reversed_codes[0].push(0);
        }

        while queue.len() >= 2 {
            let mut merged = MergeGroup {
                weight: 0,
                label: Vec::new(),
                members: Vec::new(),
            };

            for digit in 0..self.radix {
                let Some(Reverse(group)) = queue.pop() else {
                    break;
                };

                for member in &group.members {
                    reversed_codes[*member].push(digit);
                }

                merged.weight += group.weight;
                merged.label.extend(group.label);
                merged.members.extend(group.members);
            }

            queue.push(Reverse(merged));
        }

        let mut table = CodingTable::with_capacity(self.radix, distinct);
        for (symbol, mut codeword) in self.symbols.iter().zip(reversed_codes) {
            codeword.reverse();
            table.push(symbol.clone(), codeword);
        }

        self.log_summary(&table);
        Ok(table)
    }

    fn log_summary(&self, table: &CodingTable<S>) {
        let freqs = self
            .symbols
            .iter()
            .map(|symbol| self.freqs[symbol])
            .collect::<Vec<usize>>();

        info!(
            "Built a radix-{} code for {} distinct symbols over {} symbols: entropy {:.3}, expected length {:.3} digits",
            self.radix,
            self.symbols.len(),
            self.total_freq,
            entropy(&freqs, self.radix),
            expected_length(&table.codeword_lengths(), &freqs),
        );

        for (symbol, codeword) in table.iter() {
            debug!("{:<8} | {:<8} | {:?}", symbol, self.freqs[symbol], codeword);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(radix: usize, message: &str) -> CodingTable<char> {
        let mut builder = CodingTableBuilder::new(radix);
        builder.push_all(&message.chars().collect::<Vec<_>>());
        builder.build().unwrap()
    }

    #[test]
    fn ties_are_broken_by_label() {
        let table = table(2, "abcde");

        assert_eq!(table.get(&'a'), Some(&[1, 1, 0][..]));
        assert_eq!(table.get(&'b'), Some(&[1, 1, 1][..]));
        assert_eq!(table.get(&'c'), Some(&[0, 0][..]));
        assert_eq!(table.get(&'d'), Some(&[0, 1][..]));
        assert_eq!(table.get(&'e'), Some(&[1, 0][..]));
    }

    #[test]
    fn last_round_is_not_padded() {
        // four symbols with radix 3: the first round merges three groups, the second only two.
        let table = table(3, "abcd");

        assert_eq!(table.get(&'a'), Some(&[1, 0][..]));
        assert_eq!(table.get(&'b'), Some(&[1, 1][..]));
        assert_eq!(table.get(&'c'), Some(&[1, 2][..]));
        assert_eq!(table.get(&'d'), Some(&[0][..]));
    }

    #[test]
    fn frequencies_follow_first_occurrence() {
        let mut builder = CodingTableBuilder::new(2);
        builder.push_all(&['b', 'a', 'b', 'c']);
        assert_eq!(builder.frequencies(), vec![(&'b', 2), (&'a', 1), (&'c', 1)]);
    }

    #[test]
    fn single_symbol_gets_one_digit() {
        let table = table(4, "zzzz");
        assert_eq!(table.get(&'z'), Some(&[0][..]));
    }

    #[test]
    fn radix_one_only_fits_a_single_symbol() {
        assert_eq!(table(1, "aaa").get(&'a'), Some(&[0][..]));

        let mut builder = CodingTableBuilder::new(1);
        builder.push_all(&['a', 'b']);
        assert_eq!(
            builder.build(),
            Err(EncodeError::InvalidRadix {
                radix: 1,
                distinct: 2
            })
        );
    }

    #[test]
    fn empty_builder_is_rejected() {
        let builder = CodingTableBuilder::<char>::new(2);
        assert_eq!(builder.build(), Err(EncodeError::EmptyMessage));
    }
}
