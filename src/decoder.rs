use std::collections::{HashMap, HashSet};
use std::fmt::{self, Display};
use std::hash::Hash;

use itertools::Itertools;
use log::debug;

use crate::error::{AlphabetError, CodeError, DecodeError, Error};
use crate::tree::PrefixTree;
use crate::LINE_SEPARATOR;

/// # Prefix-code decoder
/// Maps sequences of coding symbols `C` back to sequences of symbols `S`, according to a
/// prefix-free code registered one (symbol, codeword) pair at a time.
///
/// The alphabet of coding symbols is fixed when the decoder is created, and every codeword
/// must be written with it. Registering a code needs `&mut self` while decoding only borrows
/// the decoder, so sharing a decoder between threads follows the usual single-writer rule.
#[derive(Clone, Debug)]
pub struct Decoder<C, S> {
    /// The coding symbols, in the order they were given.
    alphabet: Vec<C>,

    tree: PrefixTree<C, S>,

    /// The codeword of each registered symbol.
    codes: HashMap<S, Vec<C>>,

    /// The registered codewords, used to tell a reused codeword from a tree conflict.
    codewords: HashSet<Vec<C>>,
}

impl<C, S> Decoder<C, S>
where
    C: Copy + Eq + Hash + Display,
    S: Clone + Eq + Hash + Display,
{
    /// Creates a decoder without any code over the given alphabet of coding symbols.
    ///
    /// Returns an error if the alphabet is empty or if a coding symbol occurs more than once.
    pub fn new(alphabet: impl IntoIterator<Item = C>) -> Result<Self, AlphabetError> {
        let alphabet = alphabet.into_iter().collect::<Vec<C>>();

        if alphabet.is_empty() {
            return Err(AlphabetError::Empty);
        }

        let occurrences = alphabet.iter().counts();
        if let Some(duplicate) = alphabet.iter().find(|symbol| occurrences[symbol] > 1) {
            return Err(AlphabetError::Duplicate {
                symbol: duplicate.to_string(),
                count: occurrences[&duplicate],
            });
        }

        Ok(Self {
            tree: PrefixTree::new(alphabet.len()),
            alphabet,
            codes: HashMap::new(),
            codewords: HashSet::new(),
        })
    }

    /// Creates a decoder over `alphabet` and registers every (symbol, codeword) pair of `codes`,
    /// in order.
    pub fn from_codes<I>(alphabet: impl IntoIterator<Item = C>, codes: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (S, Vec<C>)>,
    {
        let mut decoder = Self::new(alphabet)?;
        for (symbol, codeword) in codes {
            decoder.add_code(symbol, &codeword)?;
        }

        debug!(
            "Decoder ready with {} codes (complete: {})",
            decoder.len(),
            decoder.is_code_complete()
        );
        Ok(decoder)
    }

    /// Registers `codeword` as the code of `symbol`.
    ///
    /// The pair is rejected, and the decoder left as it was, if the codeword is empty or uses
    /// coding symbols out of the alphabet, if the symbol or the codeword are already registered,
    /// if the tree is already complete, or if the codeword would break the prefix property.
    pub fn add_code(&mut self, symbol: S, codeword: &[C]) -> Result<(), CodeError> {
        if codeword.is_empty() {
            return Err(CodeError::EmptyCodeword);
        }

        if let Some((position, unknown)) = codeword
            .iter()
            .find_position(|coding_symbol| !self.alphabet.contains(coding_symbol))
        {
            return Err(CodeError::UnknownCodingSymbol {
                symbol: unknown.to_string(),
                position,
            });
        }

        if self.codes.contains_key(&symbol) {
            return Err(CodeError::SymbolAlreadyUsed(symbol.to_string()));
        }

        if self.codewords.contains(codeword) {
            return Err(CodeError::CodewordAlreadyUsed(render(codeword)));
        }

        if self.tree.is_complete() {
            return Err(CodeError::CompleteTree);
        }

        self.tree.insert(codeword, symbol.clone())?;
        self.codewords.insert(codeword.to_vec());
        self.codes.insert(symbol, codeword.to_vec());
        Ok(())
    }

    /// Decodes the whole `sequence`, returning the decoded symbols in order.
    pub fn decode(&self, sequence: &[C]) -> Result<Vec<S>, DecodeError> {
        if sequence.is_empty() {
            return Err(DecodeError::EmptyInput);
        }

        if self.tree.is_empty() {
            return Err(DecodeError::EmptyTree);
        }

        if let Some((position, unknown)) = sequence
            .iter()
            .find_position(|coding_symbol| !self.alphabet.contains(coding_symbol))
        {
            return Err(DecodeError::UnknownCodingSymbol {
                symbol: unknown.to_string(),
                position,
            });
        }

        let mut decoded = Vec::new();
        let mut index = 0;

        // every codeword is at least one coding symbol long, so each step moves forward.
        while index < sequence.len() {
            let unit = self.tree.decode(index, sequence)?;
            decoded.push(unit.symbol.clone());
            index = unit.resume_index;
        }

        Ok(decoded)
    }

    /// Lists every registered code as `symbol:codeword`, one per line.
    ///
    /// Codes are listed depth-first, with the children of each node in the order they were
    /// created. The result is empty when no code is registered.
    pub fn all_codes(&self) -> String {
        self.tree.leaf_paths("").join(LINE_SEPARATOR)
    }

    /// Returns `true` if every sequence of coding symbols long enough leads to a codeword.
    /// A decoder without codes is not complete.
    pub fn is_code_complete(&self) -> bool {
        self.tree.is_complete()
    }

    pub fn alphabet(&self) -> &[C] {
        &self.alphabet
    }

    /// The codeword registered for `symbol`, if any.
    pub fn codeword(&self, symbol: &S) -> Option<&[C]> {
        self.codes.get(symbol).map(Vec::as_slice)
    }

    /// The number of registered codes.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Every registered (symbol, codeword) pair, in the same order as [`all_codes`](Self::all_codes).
    pub fn codes(&self) -> Vec<(&S, Vec<C>)> {
        self.tree.codewords()
    }
}

impl<C, S> Display for Decoder<C, S>
where
    C: Copy + Eq + Hash + Display,
    S: Clone + Eq + Hash + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.all_codes())
    }
}

fn render<C: Display>(codeword: &[C]) -> String {
    codeword.iter().join("")
}
