//! The n-ary prefix tree backing the [`Decoder`](crate::decoder::Decoder).

mod node;

use std::fmt::Display;

use crate::error::{CodeError, DecodeError};
use node::Group;

/// The outcome of a single leaf-reaching traversal: the decoded symbol and the index of the
/// sequence from which decoding can resume.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodedUnit<'a, S> {
    pub resume_index: usize,
    pub symbol: &'a S,
}

/// # Prefix tree
/// An n-ary trie whose edges are labelled with coding symbols and whose leaves hold symbols.
///
/// The structure itself guarantees that the stored code is prefix-free: a leaf can't have
/// children, so no codeword can be the prefix of another one.
///
/// The root is always an internal node, hence every codeword has at least one coding symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrefixTree<C, S> {
    root: Group<C, S>,

    /// The number of distinct coding symbols, that is the maximum degree of a node.
    arity: usize,
}

impl<C: Copy + Eq, S> PrefixTree<C, S> {
    /// Creates an empty tree for an alphabet of `arity` coding symbols.
    pub fn new(arity: usize) -> Self {
        Self {
            root: Group::default(),
            arity,
        }
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Returns `true` if no codeword has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.root.degree() == 0
    }

    /// The number of leaves, that is the number of registered codewords.
    pub fn len(&self) -> usize {
        self.root.count_leaves()
    }

    /// Inserts a leaf holding `symbol` at the end of `path`.
    ///
    /// Fails if `path` is empty, if a leaf is already at the end of `path`, if `path` goes
    /// through an existing leaf or if `path` ends on an internal node. The tree is left
    /// untouched when an error is returned.
    pub fn insert(&mut self, path: &[C], symbol: S) -> Result<(), CodeError> {
        let (&first, rest) = path.split_first().ok_or(CodeError::EmptyCodeword)?;
        self.root.insert(first, rest, symbol, 0)
    }

    /// Decodes the single codeword starting at `start_index` of `sequence`.
    pub fn decode<'a>(
        &'a self,
        start_index: usize,
        sequence: &[C],
    ) -> Result<DecodedUnit<'a, S>, DecodeError> {
        self.root.decode(start_index, sequence, start_index)
    }

    /// Returns `true` if every internal node has exactly [`arity`](Self::arity) children.
    ///
    /// An empty tree is never complete.
    pub fn is_complete(&self) -> bool {
        !self.is_empty() && self.root.is_complete(self.arity)
    }

    /// Every (symbol, codeword) pair, in insertion order of the edges.
    pub fn codewords(&self) -> Vec<(&S, Vec<C>)> {
        let mut out = Vec::new();
        self.root.collect_codewords(&mut Vec::new(), &mut out);
        out
    }
}

impl<C: Copy + Eq + Display, S: Display> PrefixTree<C, S> {
    /// Returns one `symbol:codeword` entry per leaf, each codeword preceded by `prefix`.
    ///
    /// Entries follow the order in which edges were first created, they are not sorted.
    pub fn leaf_paths(&self, prefix: &str) -> Vec<String> {
        let mut out = Vec::new();
        self.root.leaf_paths(prefix, &mut out);
        out
    }
}
