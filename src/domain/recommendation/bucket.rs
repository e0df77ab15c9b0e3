//! Bucket classification of a revealed score.

use crate::domain::decision::Totals;

/// Net score at or beyond which a verdict may be "strong".
pub const STRONG_NET_THRESHOLD: i64 = 5;

/// Net score at or beyond which a verdict leans one way.
pub const LEAN_NET_THRESHOLD: i64 = 2;

/// Entries the winning side needs before a verdict may be "strong".
pub const MIN_STRONG_ENTRIES: usize = 2;

/// The five terminal recommendation categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    StrongYes,
    LeanYes,
    Tie,
    LeanNo,
    StrongNo,
}

impl Bucket {
    /// Returns all buckets from most to least favorable.
    pub fn all() -> &'static [Bucket] {
        &[
            Bucket::StrongYes,
            Bucket::LeanYes,
            Bucket::Tie,
            Bucket::LeanNo,
            Bucket::StrongNo,
        ]
    }

    /// Classifies totals. Rules are evaluated in this order, first match wins:
    ///
    /// 1. net ≥ 5 and at least two pros → `StrongYes`
    /// 2. net ≥ 2 → `LeanYes`
    /// 3. net ≤ -5 and at least two cons → `StrongNo`
    /// 4. net ≤ -2 → `LeanNo`
    /// 5. otherwise → `Tie`
    pub fn classify(totals: &Totals) -> Bucket {
        let net = totals.net();
        if net >= STRONG_NET_THRESHOLD && totals.support_count >= MIN_STRONG_ENTRIES {
            Bucket::StrongYes
        } else if net >= LEAN_NET_THRESHOLD {
            Bucket::LeanYes
        } else if net <= -STRONG_NET_THRESHOLD && totals.oppose_count >= MIN_STRONG_ENTRIES {
            Bucket::StrongNo
        } else if net <= -LEAN_NET_THRESHOLD {
            Bucket::LeanNo
        } else {
            Bucket::Tie
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Bucket::StrongYes => "🎉",
            Bucket::LeanYes => "🦆",
            Bucket::Tie => "🤔",
            Bucket::LeanNo => "🛑",
            Bucket::StrongNo => "❌",
        }
    }
}
