//! Entry entity - one weighted pro or con.

use crate::domain::foundation::{EntryId, Weight};

/// A single weighted line on one side of a decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    id: EntryId,
    text: String,
    weight: Weight,
}

impl Entry {
    /// Creates an entry with a freshly generated id.
    pub fn new(text: impl Into<String>, weight: Weight) -> Self {
        Self {
            id: EntryId::generate(),
            text: text.into(),
            weight,
        }
    }

    /// Reconstitute an entry from a snapshot (no validation).
    pub fn reconstitute(id: EntryId, text: String, weight: Weight) -> Self {
        Self { id, text, weight }
    }

    pub fn id(&self) -> &EntryId {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub(crate) fn set_text(&mut self, text: String) {
        self.text = text;
    }

    pub(crate) fn set_weight(&mut self, weight: Weight) {
        self.weight = weight;
    }
}
