use thiserror::Error;

/// Errors produced while decoding bencode input.
///
/// Every variant is fatal to the decode call: decoding stops at the point of
/// detection and returns with no partial result.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BencodeError {
    /// An `i…e` integer token is missing its `e` terminator, or its body is
    /// not a base-10 signed integer.
    #[error("malformed integer: {0}")]
    MalformedInteger(String),

    /// A string length prefix is missing its `:` separator, or is not a
    /// non-negative decimal number.
    #[error("malformed string length: {0}")]
    MalformedLength(String),

    /// A string declared more payload bytes than the input has left.
    #[error("declared length {declared} exceeds remaining input ({available} bytes)")]
    LengthMismatch { declared: usize, available: usize },

    /// A byte that starts no bencode token.
    #[error("unexpected symbol {symbol:?} at offset {offset}")]
    UnexpectedSymbol { symbol: char, offset: usize },

    /// A dictionary closed with an unpaired key or value.
    #[error("dictionary holds an odd number of elements ({0})")]
    OddDictionaryElements(usize),

    /// A dictionary key is not a byte string.
    #[error("dictionary key is not a byte string")]
    NonStringKey,

    /// The input held more than one top-level value.
    #[error("input holds {0} unwrapped top-level values")]
    UnwrappedSequence(usize),

    /// The input ended with only an open marker, or nothing at all, on the
    /// stack, e.g. a bare `l`, `d`, or `e`.
    #[error("input ended before a complete value was produced")]
    Unterminated,
}
