//! Commands - user intents, independent of any rendering technology.

use crate::domain::foundation::{EntryId, Side};
use crate::domain::recommendation::Recommendation;

/// One discrete user intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecisionCommand {
    SetTopic(String),
    AddEntry {
        side: Side,
        text: String,
        /// Raw user input; absent or unparseable means the default weight.
        weight: Option<String>,
    },
    UpdateText {
        side: Side,
        id: EntryId,
        text: String,
    },
    UpdateWeight {
        side: Side,
        id: EntryId,
        weight: i64,
    },
    RemoveEntry {
        side: Side,
        id: EntryId,
    },
    SetLocked {
        side: Side,
        locked: bool,
    },
    Recommend,
    Share,
    /// Replace the decision with the one carried by a share link.
    OpenLink(String),
    Reset,
}

/// Where a share link ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    Copied { link: String },
    /// Clipboard unavailable or failed; the user must copy it by hand.
    ManualCopy { link: String },
}

impl ShareOutcome {
    pub fn link(&self) -> &str {
        match self {
            ShareOutcome::Copied { link } | ShareOutcome::ManualCopy { link } => link,
        }
    }
}

/// What the presenter should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Nothing changed (blank text, unknown id, ...).
    Unchanged,
    /// Entries or topic changed; lists and totals need refreshing.
    Updated,
    /// Visibility or the whole decision changed; redraw everything.
    Redrawn,
    Recommended(Recommendation),
    Shared(ShareOutcome),
    /// Share link could not be built; nothing to show but the notice.
    ShareFailed,
    Cleared,
    LinkIgnored,
}
