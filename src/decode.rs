use bytes::Bytes;

use crate::error::BencodeError;
use crate::stack::{Entry, Stack};
use crate::value::Value;

/// Decodes a single bencode value from `data`.
///
/// Returns `Ok(None)` for empty or whitespace-only input; this is a
/// deliberate "no value" case, distinct from malformed input. Well-formed
/// input yields exactly one root value. Anything else is an error (see
/// [`BencodeError`]).
///
/// The decoder is a flat scan over the input: literals and open markers are
/// pushed onto a work stack, and every closing `e` collapses the run back to
/// the nearest marker. String length prefixes count payload bytes, so the
/// scan is byte-indexed throughout.
///
/// # Examples
///
/// ```
/// use benc::{decode, Value};
///
/// assert_eq!(decode(b"i42e").unwrap(), Some(Value::Integer(42)));
/// assert_eq!(decode(b"2:hi").unwrap(), Some(Value::string("hi")));
/// assert_eq!(decode(b"   ").unwrap(), None);
/// assert!(decode(b"i42").is_err());
/// ```
pub fn decode(data: &[u8]) -> Result<Option<Value>, BencodeError> {
    if data.trim_ascii().is_empty() {
        return Ok(None);
    }
    tracing::trace!(len = data.len(), "decoding bencode value");

    let mut stack = Stack::new();
    let mut pos = 0;

    while pos < data.len() {
        match data[pos] {
            b'i' => pos = decode_integer(data, pos + 1, &mut stack)?,
            b'l' => {
                stack.push(Entry::ListOpen);
                pos += 1;
            }
            b'd' => {
                stack.push(Entry::DictOpen);
                pos += 1;
            }
            b'e' => {
                // A stray close with nothing open is a no-op advance.
                if !stack.is_empty() {
                    stack.reduce()?;
                }
                pos += 1;
            }
            b'0'..=b'9' => pos = decode_bytes(data, pos, &mut stack)?,
            c => {
                return Err(BencodeError::UnexpectedSymbol {
                    symbol: c as char,
                    offset: pos,
                })
            }
        }
    }

    if stack.len() > 1 {
        return Err(BencodeError::UnwrappedSequence(stack.len()));
    }
    match stack.pop() {
        Some(Entry::Value(value)) => Ok(Some(value)),
        // A leftover marker (or nothing at all) means the input stopped
        // short of a complete value.
        Some(Entry::ListOpen) | Some(Entry::DictOpen) | None => Err(BencodeError::Unterminated),
    }
}

/// Parses the body of an `i…e` token starting just past the `i`. Pushes the
/// integer and returns the position past the terminator.
fn decode_integer(data: &[u8], start: usize, stack: &mut Stack) -> Result<usize, BencodeError> {
    let end = find_next(data, start, b'e')
        .ok_or_else(|| BencodeError::MalformedInteger("missing 'e' terminator".into()))?;

    let body = std::str::from_utf8(&data[start..end])
        .map_err(|_| BencodeError::MalformedInteger("not valid utf-8".into()))?;
    let number: i64 = body
        .parse()
        .map_err(|_| BencodeError::MalformedInteger(body.into()))?;

    stack.push(Entry::Value(Value::Integer(number)));
    Ok(end + 1)
}

/// Parses a `<length>:<payload>` token starting at its first digit. The
/// prefix counts payload bytes. Pushes the byte string and returns the
/// position past the payload.
fn decode_bytes(data: &[u8], start: usize, stack: &mut Stack) -> Result<usize, BencodeError> {
    let sep = find_next(data, start, b':')
        .ok_or_else(|| BencodeError::MalformedLength("missing ':' separator".into()))?;

    let prefix = std::str::from_utf8(&data[start..sep])
        .map_err(|_| BencodeError::MalformedLength("not valid utf-8".into()))?;
    let length: usize = prefix
        .parse()
        .map_err(|_| BencodeError::MalformedLength(prefix.into()))?;

    let payload_start = sep + 1;
    let available = data.len() - payload_start;
    if length > available {
        return Err(BencodeError::LengthMismatch {
            declared: length,
            available,
        });
    }

    let payload = Bytes::copy_from_slice(&data[payload_start..payload_start + length]);
    stack.push(Entry::Value(Value::Bytes(payload)));
    Ok(payload_start + length)
}

/// Scanner primitive: index of the next `target` byte at or after `start`,
/// or `None` if the cursor is past the end or the byte never appears.
fn find_next(data: &[u8], start: usize, target: u8) -> Option<usize> {
    data.get(start..)?
        .iter()
        .position(|&b| b == target)
        .map(|i| start + i)
}
