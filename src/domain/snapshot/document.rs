//! Wire document for snapshots.
//!
//! Field names match what the browser build stores, so its storage blobs
//! and share links load here.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;

use super::SnapshotError;
use crate::domain::decision::{Decision, Entry, LockGate};
use crate::domain::foundation::{EntryId, Side, Weight};

/// Serialized form of one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDocument {
    pub id: String,
    pub text: String,
    pub score: Weight,
}

/// Serialized form of a whole decision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotDocument {
    pub topic: String,
    pub pros: Vec<EntryDocument>,
    pub cons: Vec<EntryDocument>,
    pub pros_locked: bool,
    pub cons_locked: bool,
}

impl SnapshotDocument {
    /// Captures the full state of a decision.
    pub fn capture(decision: &Decision) -> Self {
        Self {
            topic: decision.topic().to_string(),
            pros: entry_documents(decision, Side::Supporting),
            cons: entry_documents(decision, Side::Opposing),
            pros_locked: decision.is_locked(Side::Supporting),
            cons_locked: decision.is_locked(Side::Opposing),
        }
    }

    /// Reads a document out of arbitrary JSON, field by field.
    ///
    /// Only a non-object root is an error. Every field of the wrong type
    /// falls back to its default, malformed entries are dropped one by one,
    /// and ids that are missing or repeated within a side are regenerated.
    pub fn from_value(value: &Value) -> Result<Self, SnapshotError> {
        let obj = value.as_object().ok_or(SnapshotError::NotAnObject)?;

        Ok(Self {
            topic: obj
                .get("topic")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            pros: entries_field(obj, "pros"),
            cons: entries_field(obj, "cons"),
            pros_locked: flag_field(obj, "prosLocked"),
            cons_locked: flag_field(obj, "consLocked"),
        })
    }

    /// Rebuilds the decision.
    pub fn into_decision(self) -> Decision {
        Decision::reconstitute(
            self.topic,
            into_entries(self.pros),
            into_entries(self.cons),
            LockGate::new(self.pros_locked, self.cons_locked),
        )
    }
}

fn entry_documents(decision: &Decision, side: Side) -> Vec<EntryDocument> {
    decision
        .entries(side)
        .iter()
        .map(|e| EntryDocument {
            id: e.id().to_string(),
            text: e.text().to_string(),
            score: e.weight(),
        })
        .collect()
}

fn into_entries(docs: Vec<EntryDocument>) -> Vec<Entry> {
    docs.into_iter()
        .map(|doc| {
            let id = EntryId::new(doc.id).unwrap_or_else(|_| EntryId::generate());
            Entry::reconstitute(id, doc.text, doc.score)
        })
        .collect()
}

fn flag_field(obj: &Map<String, Value>, key: &str) -> bool {
    obj.get(key).and_then(Value::as_bool).unwrap_or(false)
}

fn entries_field(obj: &Map<String, Value>, key: &str) -> Vec<EntryDocument> {
    let Some(items) = obj.get(key).and_then(Value::as_array) else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    items
        .iter()
        .filter_map(entry_from_value)
        .map(|mut doc| {
            if !seen.insert(doc.id.clone()) {
                doc.id = EntryId::generate().to_string();
                seen.insert(doc.id.clone());
            }
            doc
        })
        .collect()
}

fn entry_from_value(value: &Value) -> Option<EntryDocument> {
    let obj = value.as_object()?;
    let text = obj.get("text")?.as_str()?.to_string();

    let id = match obj.get("id") {
        Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => EntryId::generate().to_string(),
    };

    let score = match obj.get("score") {
        Some(Value::Number(n)) => n
            .as_i64()
            .map(Weight::clamped)
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| Weight::clamped(f.trunc() as i64)))
            .unwrap_or_default(),
        Some(Value::String(s)) => Weight::parse_or_default(Some(s)),
        _ => Weight::DEFAULT,
    };

    Some(EntryDocument {
        id,
        text,
        score,
    })
}
