use std::collections::BTreeMap;

use bytes::Bytes;

use crate::value::Value;

/// Encodes a value to its canonical bencode byte sequence.
///
/// The output is deterministic: dictionary keys are emitted in ascending
/// byte order regardless of how the dictionary was built, so equal values
/// always encode to identical bytes. Encoding is total over the four value
/// variants and cannot fail.
///
/// # Examples
///
/// ```
/// use benc::{encode, Value};
/// use bytes::Bytes;
/// use std::collections::BTreeMap;
///
/// assert_eq!(encode(&Value::Integer(42)), b"i42e");
/// assert_eq!(encode(&Value::string("hello")), b"5:hello");
///
/// let list = Value::List(vec![Value::Integer(1), Value::string("two")]);
/// assert_eq!(encode(&list), b"li1e3:twoe");
///
/// let mut dict = BTreeMap::new();
/// dict.insert(Bytes::from_static(b"b"), Value::Integer(2));
/// dict.insert(Bytes::from_static(b"a"), Value::Integer(1));
/// assert_eq!(encode(&Value::Dict(dict)), b"d1:ai1e1:bi2ee");
/// ```
pub fn encode(value: &Value) -> Vec<u8> {
    let mut buf = Vec::new();
    encode_into(value, &mut buf);
    buf
}

/// Encodes an integer as `i<number>e`.
pub fn encode_integer(n: i64) -> Vec<u8> {
    let mut buf = Vec::new();
    integer_into(n, &mut buf);
    buf
}

/// Encodes a byte string as `<length>:<bytes>`, where the length counts
/// bytes. The empty string encodes as `0:`.
pub fn encode_bytes(s: &[u8]) -> Vec<u8> {
    let mut buf = Vec::new();
    bytes_into(s, &mut buf);
    buf
}

/// Encodes a list as `l<items>e`, items in order. The empty list encodes as
/// `le`.
pub fn encode_list(items: &[Value]) -> Vec<u8> {
    let mut buf = Vec::new();
    list_into(items, &mut buf);
    buf
}

/// Encodes a dictionary as `d<key><value>...e` with keys in ascending byte
/// order. The empty dictionary encodes as `de`.
pub fn encode_dict(dict: &BTreeMap<Bytes, Value>) -> Vec<u8> {
    let mut buf = Vec::new();
    dict_into(dict, &mut buf);
    buf
}

fn encode_into(value: &Value, buf: &mut Vec<u8>) {
    match value {
        Value::Integer(n) => integer_into(*n, buf),
        Value::Bytes(b) => bytes_into(b, buf),
        Value::List(items) => list_into(items, buf),
        Value::Dict(dict) => dict_into(dict, buf),
    }
}

fn integer_into(n: i64, buf: &mut Vec<u8>) {
    buf.push(b'i');
    buf.extend_from_slice(n.to_string().as_bytes());
    buf.push(b'e');
}

fn bytes_into(s: &[u8], buf: &mut Vec<u8>) {
    buf.extend_from_slice(s.len().to_string().as_bytes());
    buf.push(b':');
    buf.extend_from_slice(s);
}

fn list_into(items: &[Value], buf: &mut Vec<u8>) {
    buf.push(b'l');
    for item in items {
        encode_into(item, buf);
    }
    buf.push(b'e');
}

fn dict_into(dict: &BTreeMap<Bytes, Value>, buf: &mut Vec<u8>) {
    buf.push(b'd');
    for (key, value) in dict {
        bytes_into(key, buf);
        encode_into(value, buf);
    }
    buf.push(b'e');
}
