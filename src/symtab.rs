//! Interns variable-length textual labels into dense 32-bit identifiers.
//!
//! The engine never sees labels — it operates purely on the ids handed back
//! by [`Symtab::intern`]. Interning is idempotent: the same bytes always
//! resolve to the same id.

use std::collections::HashMap;

use crate::error::SymtabError;

/// Labels longer than this are rejected rather than silently truncated,
/// since truncation could alias two distinct labels onto the same symbol.
pub const MAX_LABEL_LEN: usize = 256;

/// A single interned label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub id: u32,
    pub text: String,
}

/// Whether `intern` created a new symbol or found one that already existed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InternResult {
    Created,
    Existing,
}

/// A bidirectional label <-> id table.
#[derive(Debug, Default)]
pub struct Symtab {
    by_text: HashMap<String, u32>,
    by_id: Vec<Symbol>,
}

impl Symtab {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns `label`, returning its id and whether it was newly created.
    ///
    /// `label` must be valid UTF-8 and no more than [`MAX_LABEL_LEN`] bytes;
    /// non-UTF-8 input is outside this format's scope (spec.md §6.3 defines
    /// labels as non-whitespace, non-colon bytes, which in practice are
    /// always ASCII in this crate's inputs).
    pub fn intern(&mut self, label: &str) -> Result<(InternResult, u32), SymtabError> {
        if label.len() > MAX_LABEL_LEN {
            return Err(SymtabError::LabelTooLong);
        }
        if let Some(&id) = self.by_text.get(label) {
            return Ok((InternResult::Existing, id));
        }
        let id = self.by_id.len() as u32;
        self.by_id.push(Symbol {
            id,
            text: label.to_string(),
        });
        self.by_text.insert(label.to_string(), id);
        Ok((InternResult::Created, id))
    }

    /// Looks up a previously interned symbol by id.
    pub fn get(&self, id: u32) -> Option<&Symbol> {
        self.by_id.get(id as usize)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
