//! Lock gate - per-side "I'm done" flags that gate score visibility.

use crate::domain::foundation::Side;

/// Two independent "list finalized" flags.
///
/// Scores are revealed only while both flags are set. Revealed state is
/// always derived from the flags and never stored on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LockGate {
    supporting: bool,
    opposing: bool,
}

impl LockGate {
    pub fn new(supporting: bool, opposing: bool) -> Self {
        Self {
            supporting,
            opposing,
        }
    }

    /// Sets one side's flag. No validation: an empty list may be locked.
    pub fn set(&mut self, side: Side, locked: bool) {
        match side {
            Side::Supporting => self.supporting = locked,
            Side::Opposing => self.opposing = locked,
        }
    }

    pub fn is_locked(&self, side: Side) -> bool {
        match side {
            Side::Supporting => self.supporting,
            Side::Opposing => self.opposing,
        }
    }

    /// True iff both sides are locked.
    pub fn is_revealed(&self) -> bool {
        self.supporting && self.opposing
    }
}
