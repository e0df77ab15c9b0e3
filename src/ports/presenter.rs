//! Presenter Port - the rendering collaborator.
//!
//! Receives state and derived values; never mutates the decision. User
//! intents travel the other way as `DecisionCommand`s.

use crate::domain::decision::{Decision, ScoreBoard};
use crate::domain::recommendation::Recommendation;

/// Transient acknowledgments (toasts in the browser build).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Share link landed on the clipboard.
    LinkCopied,
    /// Everything was reset.
    Cleared,
    /// A link was given but could not be decoded; nothing changed.
    LinkIgnored,
    /// Free-form hint, e.g. for unrecognized input.
    Hint(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::LinkCopied => "Link copied! Share it with a friend.",
            Notice::Cleared => "Cleared the topic and all items.",
            Notice::LinkIgnored => "That link could not be read; keeping the current decision.",
            Notice::Hint(text) => text,
        }
    }
}

/// Port for presenting a decision session
pub trait DecisionPresenter {
    /// Full re-render of topic, lists and score board.
    fn render(&mut self, decision: &Decision, board: &ScoreBoard);

    /// Shows a recommendation card.
    fn show_recommendation(&mut self, recommendation: &Recommendation);

    /// Shows a transient acknowledgment.
    fn notify(&mut self, notice: &Notice);

    /// Presents a link the user has to copy by hand.
    fn offer_manual_copy(&mut self, link: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notice_texts() {
        assert_eq!(Notice::LinkCopied.text(), "Link copied! Share it with a friend.");
        assert_eq!(Notice::Hint("try help".into()).text(), "try help");
    }
}
