use std::collections::BTreeMap;

use bytes::Bytes;

use crate::error::BencodeError;
use crate::value::Value;

/// A slot on the decode stack: either a finished value, or a marker bounding
/// a list or dictionary still under construction.
#[derive(Debug)]
pub(crate) enum Entry {
    Value(Value),
    ListOpen,
    DictOpen,
}

/// Work stack for the non-recursive decoder.
///
/// Created per decode call and discarded once the root value is extracted or
/// an error is returned.
#[derive(Debug)]
pub(crate) struct Stack(Vec<Entry>);

impl Stack {
    pub fn new() -> Self {
        Stack(Vec::new())
    }

    pub fn push(&mut self, entry: Entry) {
        self.0.push(entry);
    }

    pub fn pop(&mut self) -> Option<Entry> {
        self.0.pop()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Collapses entries back to the nearest open marker into a single
    /// composite value.
    ///
    /// Entries come off the stack last-first, so the buffer is reversed
    /// before the composite is assembled. When the stack empties without a
    /// marker the buffered values are bare root candidates and go back on
    /// the stack unchanged; the decoder judges their multiplicity once the
    /// input is exhausted.
    pub fn reduce(&mut self) -> Result<(), BencodeError> {
        let mut buffer = Vec::new();

        while let Some(entry) = self.pop() {
            match entry {
                Entry::Value(value) => buffer.push(value),
                Entry::ListOpen => {
                    buffer.reverse();
                    self.push(Entry::Value(Value::List(buffer)));
                    return Ok(());
                }
                Entry::DictOpen => {
                    buffer.reverse();
                    let dict = pair_up(buffer)?;
                    self.push(Entry::Value(Value::Dict(dict)));
                    return Ok(());
                }
            }
        }

        for value in buffer.into_iter().rev() {
            self.push(Entry::Value(value));
        }
        Ok(())
    }
}

/// Turns a (key, value, key, value, …) run into a dictionary.
///
/// Keys must be byte strings. A key that appears more than once keeps its
/// last value.
fn pair_up(entries: Vec<Value>) -> Result<BTreeMap<Bytes, Value>, BencodeError> {
    if entries.len() % 2 != 0 {
        return Err(BencodeError::OddDictionaryElements(entries.len()));
    }

    let mut dict = BTreeMap::new();
    let mut iter = entries.into_iter();
    while let (Some(key), Some(value)) = (iter.next(), iter.next()) {
        let Value::Bytes(key) = key else {
            return Err(BencodeError::NonStringKey);
        };
        dict.insert(key, value);
    }

    Ok(dict)
}
