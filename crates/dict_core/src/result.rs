use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One harvested definition.
///
/// The field names are the persisted JSON shape; downstream consumers decode
/// the per-job output files into a map of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionResult {
    /// Absolute position of the word in the full word list.
    pub id: usize,
    /// The word this definition was harvested for.
    pub word: String,
    /// Extracted definition markup; empty when the page carried none.
    pub html: String,
}

impl DefinitionResult {
    pub fn new(id: usize, word: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            id,
            word: word.into(),
            html: html.into(),
        }
    }
}

/// All results accumulated within one job, keyed by word.
///
/// Keys are unique; recording a word twice keeps only the newest value.
/// A `BTreeMap` keeps every serialized snapshot in one canonical order.
pub type ResultMap = BTreeMap<String, DefinitionResult>;
