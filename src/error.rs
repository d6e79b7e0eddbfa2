//! Error types for prefix-code construction, encoding and decoding.
//!
//! Each phase has its own error enum so that callers can match on the exact condition that
//! made a call fail. Offending symbols are carried in their rendered (`Display`) form, which
//! keeps the error types independent of the symbol types.

use thiserror::Error;

/// Top-level error type, used by callers that chain several phases together.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The coding-symbol alphabet given to a decoder is not usable.
    #[error("alphabet error: {0}")]
    Alphabet(#[from] AlphabetError),

    /// A (symbol, codeword) pair was rejected by a decoder.
    #[error("code error: {0}")]
    Code(#[from] CodeError),

    /// A sequence of coding symbols could not be decoded.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// A coding table could not be built, or a message could not be encoded with it.
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),
}

/// Errors raised while setting up the coding-symbol alphabet of a decoder.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    #[error("the alphabet of coding symbols cannot be empty")]
    Empty,

    /// The same coding symbol was given more than once.
    #[error("coding symbol '{symbol}' occurs {count} times in the alphabet")]
    Duplicate { symbol: String, count: usize },
}

/// Errors raised when registering a (symbol, codeword) pair.
///
/// A rejected pair never modifies the decoder.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodeError {
    #[error("a codeword cannot be empty")]
    EmptyCodeword,

    /// The codeword contains a coding symbol which is not part of the alphabet.
    #[error("coding symbol '{symbol}' at position {position} is not part of the alphabet")]
    UnknownCodingSymbol { symbol: String, position: usize },

    #[error("symbol '{0}' already has a codeword")]
    SymbolAlreadyUsed(String),

    #[error("codeword '{0}' is already assigned to another symbol")]
    CodewordAlreadyUsed(String),

    /// Every slot of a complete tree is taken, there is no room for another leaf.
    #[error("cannot add more codes to a complete tree")]
    CompleteTree,

    /// The codeword would descend through the leaf reached after `depth` coding symbols,
    /// i.e. an existing codeword is a prefix of the new one.
    #[error("children cannot be added to a leaf (existing codeword of length {depth} is a prefix)")]
    ExtendsLeaf { depth: usize },

    /// A leaf already sits at the exact position of the new codeword.
    #[error("a leaf already occupies the slot of this codeword")]
    SlotOccupied,

    /// The new codeword is a strict prefix of at least one existing codeword.
    #[error("codeword is a prefix of an existing codeword")]
    PrefixOfExisting,
}

/// Errors raised while decoding a sequence of coding symbols.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("cannot decode an empty sequence")]
    EmptyInput,

    #[error("cannot decode without any registered code")]
    EmptyTree,

    #[error("coding symbol '{symbol}' at position {position} is not part of the alphabet")]
    UnknownCodingSymbol { symbol: String, position: usize },

    /// The coding symbol at `position` does not continue any registered codeword.
    #[error("no codeword continues with the coding symbol at position {position}")]
    NoMatchingCodeword { position: usize },

    /// The sequence ended in the middle of a codeword started at `position`.
    #[error("sequence ends inside the codeword starting at position {position}")]
    Truncated { position: usize },
}

/// Errors raised while building a coding table or encoding a message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("cannot encode an empty message")]
    EmptyMessage,

    /// A radix of zero, or a radix of one with more than one distinct symbol.
    #[error("radix {radix} cannot encode {distinct} distinct symbols")]
    InvalidRadix { radix: usize, distinct: usize },

    /// The message contains a symbol without an entry in the coding table.
    #[error("coding symbol not found for message symbol '{0}'")]
    SymbolNotFound(String),
}

/// Type alias for Result with the crate's top-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
