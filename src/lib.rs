//! Bencode encoding and decoding ([BEP-3]).
//!
//! Bencode is the serialization format used throughout BitTorrent for storing
//! and transmitting structured data, including `.torrent` files and tracker
//! responses.
//!
//! # Data Types
//!
//! Bencode supports four data types:
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Integer | `i<number>e` | `i42e` → 42 |
//! | Byte String | `<length>:<data>` | `4:spam` → "spam" |
//! | List | `l<items>e` | `l4:spami42ee` → ["spam", 42] |
//! | Dictionary | `d<key><value>...e` | `d3:foo3:bare` → {"foo": "bar"} |
//!
//! Decoding is non-recursive: a flat scan pushes literals and open markers
//! onto a work stack, and every closing `e` collapses the run back to the
//! nearest marker into a list or dictionary. Arbitrarily deep input therefore
//! cannot overflow the call stack.
//!
//! # Examples
//!
//! ## Decoding bencode data
//!
//! ```
//! use benc::{decode, Value};
//!
//! // Decode an integer
//! let value = decode(b"i42e").unwrap().unwrap();
//! assert_eq!(value.as_integer(), Some(42));
//!
//! // Decode a string
//! let value = decode(b"4:spam").unwrap().unwrap();
//! assert_eq!(value.as_str(), Some("spam"));
//!
//! // Decode a list
//! let value = decode(b"l4:spami42ee").unwrap().unwrap();
//! let list = value.as_list().unwrap();
//! assert_eq!(list.len(), 2);
//!
//! // Decode a dictionary
//! let value = decode(b"d3:foo3:bare").unwrap().unwrap();
//! let foo = value.get(b"foo").unwrap();
//! assert_eq!(foo.as_str(), Some("bar"));
//!
//! // Empty input is "no value", not an error
//! assert_eq!(decode(b"").unwrap(), None);
//! ```
//!
//! ## Encoding bencode data
//!
//! ```
//! use benc::{encode, Value};
//! use bytes::Bytes;
//! use std::collections::BTreeMap;
//!
//! // Encode an integer
//! assert_eq!(encode(&Value::Integer(42)), b"i42e");
//!
//! // Encode a string
//! assert_eq!(encode(&Value::string("hello")), b"5:hello");
//!
//! // Encode a list
//! let list = Value::List(vec![Value::Integer(1), Value::Integer(2)]);
//! assert_eq!(encode(&list), b"li1ei2ee");
//!
//! // Encode a dictionary (keys are always emitted in sorted order)
//! let mut dict = BTreeMap::new();
//! dict.insert(Bytes::from_static(b"key"), Value::string("value"));
//! assert_eq!(encode(&Value::Dict(dict)), b"d3:key5:valuee");
//! ```
//!
//! # Error Handling
//!
//! Decoding can fail for various reasons:
//!
//! - [`BencodeError::MalformedInteger`] - Integer with no terminator or a non-numeric body
//! - [`BencodeError::MalformedLength`] - String length prefix with no `:` or a non-numeric prefix
//! - [`BencodeError::LengthMismatch`] - Declared string length exceeds the remaining input
//! - [`BencodeError::UnexpectedSymbol`] - A byte that starts no bencode token
//! - [`BencodeError::OddDictionaryElements`] - Dictionary closed with an unpaired key
//! - [`BencodeError::NonStringKey`] - Dictionary key that is not a byte string
//! - [`BencodeError::UnwrappedSequence`] - More than one top-level value
//! - [`BencodeError::Unterminated`] - Input ended with only a marker (or nothing) on the stack, e.g. a bare `l`, `d`, or `e`
//!
//! Every error is fatal to the call: bencode has no recoverable-error
//! concept, a stream is either well-formed or it is not.
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod decode;
mod encode;
mod error;
mod stack;
mod value;

pub use decode::decode;
pub use encode::{encode, encode_bytes, encode_dict, encode_integer, encode_list};
pub use error::BencodeError;
pub use value::Value;
