//! Decision aggregate - the single root of truth for a session.
//!
//! Owns the topic, both entry lists and the lock gate. Every user intent
//! ends up as one of the mutations below.

use super::{Entry, LockGate, ScoreBoard, Totals};
use crate::domain::foundation::{EntryId, Side, Weight};

/// Decision aggregate.
///
/// # Invariants
///
/// - every stored weight is within `[1, 10]` (enforced by [`Weight`])
/// - entry ids are unique within a side
/// - score visibility is derived from the lock gate on every call
///
/// Locking a side does not freeze its entries: they stay editable and the
/// lock is not cleared by edits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decision {
    topic: String,
    supporting: Vec<Entry>,
    opposing: Vec<Entry>,
    locks: LockGate,
}

impl Decision {
    /// Create an empty decision.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconstitute a decision from a snapshot (no validation).
    pub fn reconstitute(
        topic: String,
        supporting: Vec<Entry>,
        opposing: Vec<Entry>,
        locks: LockGate,
    ) -> Self {
        Self {
            topic,
            supporting,
            opposing,
            locks,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Returns the entries of one side in insertion order.
    pub fn entries(&self, side: Side) -> &[Entry] {
        match side {
            Side::Supporting => &self.supporting,
            Side::Opposing => &self.opposing,
        }
    }

    pub fn entry(&self, side: Side, id: &EntryId) -> Option<&Entry> {
        self.entries(side).iter().find(|e| e.id() == id)
    }

    pub fn locks(&self) -> LockGate {
        self.locks
    }

    pub fn is_locked(&self, side: Side) -> bool {
        self.locks.is_locked(side)
    }

    /// True iff both sides are locked.
    pub fn is_revealed(&self) -> bool {
        self.locks.is_revealed()
    }

    /// True when there is nothing worth keeping.
    pub fn is_empty(&self) -> bool {
        self.topic.is_empty()
            && self.supporting.is_empty()
            && self.opposing.is_empty()
            && self.locks == LockGate::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Aggregation
    // ─────────────────────────────────────────────────────────────────────────

    /// Raw sums, regardless of lock state.
    pub fn compute_totals(&self) -> Totals {
        Totals::compute(&self.supporting, &self.opposing)
    }

    /// Totals as the rendering layer may see them.
    pub fn score_board(&self) -> ScoreBoard {
        if self.is_revealed() {
            ScoreBoard::Revealed(self.compute_totals())
        } else {
            ScoreBoard::Hidden
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    pub fn set_topic(&mut self, topic: impl Into<String>) {
        self.topic = topic.into();
    }

    /// Appends a new entry to one side.
    ///
    /// Returns `None` and leaves the decision untouched when `text` is blank.
    pub fn add_entry(&mut self, side: Side, text: &str, weight: Weight) -> Option<EntryId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let entry = Entry::new(text, weight);
        let id = entry.id().clone();
        self.entries_mut(side).push(entry);
        Some(id)
    }

    /// Replaces an entry's text, trimmed. Empty text is allowed while editing.
    ///
    /// Returns `false` if no entry has that id.
    pub fn update_text(&mut self, side: Side, id: &EntryId, text: &str) -> bool {
        match self.entry_mut(side, id) {
            Some(entry) => {
                entry.set_text(text.trim().to_string());
                true
            }
            None => false,
        }
    }

    /// Replaces an entry's weight, clamped into range.
    ///
    /// Returns `false` if no entry has that id.
    pub fn update_weight(&mut self, side: Side, id: &EntryId, weight: i64) -> bool {
        match self.entry_mut(side, id) {
            Some(entry) => {
                entry.set_weight(Weight::clamped(weight));
                true
            }
            None => false,
        }
    }

    /// Removes the first entry with that id, if any.
    pub fn remove_entry(&mut self, side: Side, id: &EntryId) -> Option<Entry> {
        let entries = self.entries_mut(side);
        let pos = entries.iter().position(|e| e.id() == id)?;
        Some(entries.remove(pos))
    }

    /// Flips one side's lock flag.
    pub fn set_locked(&mut self, side: Side, locked: bool) {
        self.locks.set(side, locked);
    }

    /// Clears everything back to an empty decision.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn entries_mut(&mut self, side: Side) -> &mut Vec<Entry> {
        match side {
            Side::Supporting => &mut self.supporting,
            Side::Opposing => &mut self.opposing,
        }
    }

    fn entry_mut(&mut self, side: Side, id: &EntryId) -> Option<&mut Entry> {
        self.entries_mut(side).iter_mut().find(|e| e.id() == id)
    }
}
