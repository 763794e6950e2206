//! Use case for editing the dictionary.

use std::sync::Arc;

use anyhow::{bail, Result};
use tracing::info;

use ck_core::dictionary::{codec, move_entry, DictionaryEntry, MoveDirection};
use ck_core::ports::DictionaryPort;

/// One dictionary edit. The collection is re-persisted in its entirety after
/// every mutation; there is no partial or append persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryOp {
    Add(DictionaryEntry),
    Update { index: usize, entry: DictionaryEntry },
    Remove { index: usize },
    Move { index: usize, direction: MoveDirection },
}

pub struct MutateDictionary {
    dictionary: Arc<dyn DictionaryPort>,
}

impl MutateDictionary {
    pub fn new(dictionary: Arc<dyn DictionaryPort>) -> Self {
        Self { dictionary }
    }

    /// Apply `op` to `entries` and persist the whole collection.
    ///
    /// Index errors abort before anything is saved. Returns the updated
    /// entries on success.
    pub async fn execute(
        &self,
        mut entries: Vec<DictionaryEntry>,
        op: DictionaryOp,
    ) -> Result<Vec<DictionaryEntry>> {
        match op {
            DictionaryOp::Add(entry) => entries.push(entry),
            DictionaryOp::Update { index, entry } => {
                if index >= entries.len() {
                    bail!("dictionary index {index} out of bounds");
                }
                entries[index] = entry;
            }
            DictionaryOp::Remove { index } => {
                if index >= entries.len() {
                    bail!("dictionary index {index} out of bounds");
                }
                entries.remove(index);
            }
            DictionaryOp::Move { index, direction } => {
                move_entry(&mut entries, index, direction)
            }
        }

        self.dictionary.save(&codec::encode(&entries)).await?;
        info!("dictionary saved with {} entries", entries.len());
        Ok(entries)
    }
}
