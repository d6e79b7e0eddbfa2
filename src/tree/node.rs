use std::fmt::Display;

use crate::error::{CodeError, DecodeError};
use crate::tree::DecodedUnit;

/// A node of a [`PrefixTree`](crate::tree::PrefixTree).
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Node<C, S> {
    /// An internal node, routing each coding symbol to at most one child.
    Group(Group<C, S>),

    /// A terminal node holding the symbol whose codeword is the path from the root.
    Leaf(S),
}

/// The children of an internal node, kept in insertion order.
///
/// The number of children is bounded by the size of the coding-symbol alphabet, which is small,
/// so a linear scan over a vector is enough to find an edge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Group<C, S> {
    children: Vec<(C, Node<C, S>)>,
}

impl<C, S> Default for Group<C, S> {
    fn default() -> Self {
        Self {
            children: Vec::new(),
        }
    }
}

impl<C: Copy + Eq, S> Node<C, S> {
    fn decode<'a>(
        &'a self,
        index: usize,
        sequence: &[C],
        start: usize,
    ) -> Result<DecodedUnit<'a, S>, DecodeError> {
        match self {
            // the coding symbols leading here have already been consumed.
            Node::Leaf(symbol) => Ok(DecodedUnit {
                resume_index: index,
                symbol,
            }),
            Node::Group(group) => group.decode(index, sequence, start),
        }
    }

    fn is_complete(&self, arity: usize) -> bool {
        match self {
            Node::Leaf(_) => true,
            Node::Group(group) => group.is_complete(arity),
        }
    }

    fn count_leaves(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Group(group) => group.count_leaves(),
        }
    }
}

impl<C: Copy + Eq, S> Group<C, S> {
    pub(crate) fn degree(&self) -> usize {
        self.children.len()
    }

    fn position(&self, edge: C) -> Option<usize> {
        self.children.iter().position(|(label, _)| *label == edge)
    }

    /// Attaches a leaf holding `symbol` at the end of the path `edge` + `rest`, creating the
    /// missing groups on the way. `depth` is the number of coding symbols already consumed.
    ///
    /// Groups are only created on the way to an empty slot, and a freshly created group has no
    /// children, so a failing insertion never leaves new nodes behind.
    pub(crate) fn insert(
        &mut self,
        edge: C,
        rest: &[C],
        symbol: S,
        depth: usize,
    ) -> Result<(), CodeError> {
        match rest.split_first() {
            None => match self.position(edge) {
                Some(index) => match self.children[index].1 {
                    Node::Leaf(_) => Err(CodeError::SlotOccupied),
                    Node::Group(_) => Err(CodeError::PrefixOfExisting),
                },
                None => {
                    self.children.push((edge, Node::Leaf(symbol)));
                    Ok(())
                }
            },
            Some((&next, rest)) => {
                let index = match self.position(edge) {
                    Some(index) => index,
                    None => {
                        self.children.push((edge, Node::Group(Group::default())));
                        self.children.len() - 1
                    }
                };

                match &mut self.children[index].1 {
                    Node::Leaf(_) => Err(CodeError::ExtendsLeaf { depth: depth + 1 }),
                    Node::Group(group) => group.insert(next, rest, symbol, depth + 1),
                }
            }
        }
    }

    /// Follows `sequence` from `index` until a leaf is reached. `start` is the index at which
    /// the codeword being decoded begins.
    pub(crate) fn decode<'a>(
        &'a self,
        index: usize,
        sequence: &[C],
        start: usize,
    ) -> Result<DecodedUnit<'a, S>, DecodeError> {
        let edge = sequence
            .get(index)
            .ok_or(DecodeError::Truncated { position: start })?;

        match self.position(*edge) {
            Some(child) => self.children[child].1.decode(index + 1, sequence, start),
            None => Err(DecodeError::NoMatchingCodeword { position: index }),
        }
    }

    /// A group is complete when every coding symbol has a child, and every child is complete.
    pub(crate) fn is_complete(&self, arity: usize) -> bool {
        self.children.len() == arity
            && self
                .children
                .iter()
                .all(|(_, child)| child.is_complete(arity))
    }

    pub(crate) fn count_leaves(&self) -> usize {
        self.children
            .iter()
            .map(|(_, child)| child.count_leaves())
            .sum()
    }

    /// Pushes into `out` every (symbol, codeword) pair below this group, extending `prefix`.
    pub(crate) fn collect_codewords<'a>(
        &'a self,
        prefix: &mut Vec<C>,
        out: &mut Vec<(&'a S, Vec<C>)>,
    ) {
        for (edge, child) in &self.children {
            prefix.push(*edge);
            match child {
                Node::Leaf(symbol) => out.push((symbol, prefix.clone())),
                Node::Group(group) => group.collect_codewords(prefix, out),
            }
            prefix.pop();
        }
    }
}

impl<C: Copy + Eq + Display, S: Display> Group<C, S> {
    /// Pushes into `out` one `symbol:path` entry per leaf below this group.
    pub(crate) fn leaf_paths(&self, prefix: &str, out: &mut Vec<String>) {
        for (edge, child) in &self.children {
            let path = format!("{prefix}{edge}");
            match child {
                Node::Leaf(symbol) => out.push(format!("{symbol}:{path}")),
                Node::Group(group) => group.leaf_paths(&path, out),
            }
        }
    }
}
