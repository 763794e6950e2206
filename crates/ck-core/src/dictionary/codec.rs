//! Wire codec for the dictionary.
//!
//! The persistence gateway speaks this encoding: `method` is the bare tag
//! string for `Replace`/`None` and a single-key object `{"Converter": <id>}`
//! for the converter variant, with the replacement output in a separate
//! optional `output` field. Decoding fails closed on malformed entries —
//! silently normalizing would rewrite the persisted dictionary on the next
//! full save.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entry::{ConversionMethod, DictionaryEntry};

/// Wire form of the whole dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireDictionary {
    pub entries: Vec<WireEntry>,
}

/// Wire form of one entry.
///
/// `priority` is optional to tolerate documents written before priorities
/// existed; `use_regex` likewise defaults to false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireEntry {
    pub input: String,
    pub method: WireMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(default)]
    pub use_regex: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
}

/// Serde external tagging reproduces the wire shape exactly: unit variants
/// encode as bare strings, `Converter` as a single-key object. Unknown tags
/// are rejected by serde itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WireMethod {
    Replace,
    None,
    Converter(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictionaryCodecError {
    #[error("entry {index}: Replace method without an output")]
    MissingOutput { index: usize },
    #[error("entry {index}: output present for a non-Replace method")]
    UnexpectedOutput { index: usize },
}

/// Decode the wire dictionary into domain entries.
///
/// A missing `priority` falls back to the entry's list index.
pub fn decode(wire: &WireDictionary) -> Result<Vec<DictionaryEntry>, DictionaryCodecError> {
    wire.entries
        .iter()
        .enumerate()
        .map(|(index, entry)| decode_entry(entry, index))
        .collect()
}

fn decode_entry(entry: &WireEntry, index: usize) -> Result<DictionaryEntry, DictionaryCodecError> {
    let method = match (&entry.method, &entry.output) {
        (WireMethod::Replace, Some(output)) => ConversionMethod::Replace(output.clone()),
        (WireMethod::Replace, None) => {
            return Err(DictionaryCodecError::MissingOutput { index })
        }
        (WireMethod::None, None) => ConversionMethod::None,
        (WireMethod::Converter(id), None) => ConversionMethod::Converter(id.clone()),
        (_, Some(_)) => return Err(DictionaryCodecError::UnexpectedOutput { index }),
    };
    Ok(DictionaryEntry {
        input: entry.input.clone(),
        method,
        use_regex: entry.use_regex,
        priority: entry.priority.unwrap_or(index as i64),
    })
}

/// Encode domain entries into the wire form. Inverse of [`decode`].
pub fn encode(entries: &[DictionaryEntry]) -> WireDictionary {
    let entries = entries
        .iter()
        .map(|entry| {
            let (method, output) = match &entry.method {
                ConversionMethod::Replace(output) => (WireMethod::Replace, Some(output.clone())),
                ConversionMethod::None => (WireMethod::None, None),
                ConversionMethod::Converter(id) => (WireMethod::Converter(id.clone()), None),
            };
            WireEntry {
                input: entry.input.clone(),
                method,
                output,
                use_regex: entry.use_regex,
                priority: Some(entry.priority),
            }
        })
        .collect();
    WireDictionary { entries }
}
