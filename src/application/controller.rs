//! DecisionController - owns the one `Decision` of a session and applies commands.

use rand::RngCore;
use std::sync::Arc;

use super::{CommandOutcome, DecisionCommand, ShareOutcome};
use crate::domain::decision::{Decision, ScoreBoard};
use crate::domain::foundation::Weight;
use crate::domain::recommendation::RecommendationEngine;
use crate::domain::snapshot::{ShareLink, SnapshotCodec};
use crate::ports::{Clipboard, KeyValueStore};

/// Storage key used by the browser build as well.
pub const DEFAULT_STORAGE_KEY: &str = "decision-duck-v3-hide-scores";

/// Default site that share links point at.
pub const DEFAULT_SHARE_BASE_URL: &str = "https://decision-duck.app/";

/// Per-session settings for the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    pub storage_key: String,
    pub share_base_url: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            share_base_url: DEFAULT_SHARE_BASE_URL.to_string(),
        }
    }
}

/// Single mutator of the decision.
///
/// Every mutation is followed by a fire-and-forget save; a failed save is
/// logged and never reaches the caller.
pub struct DecisionController {
    decision: Decision,
    store: Arc<dyn KeyValueStore>,
    clipboard: Arc<dyn Clipboard>,
    rng: Box<dyn RngCore + Send>,
    settings: SessionSettings,
}

impl DecisionController {
    /// Creates a controller around an empty decision. Nothing is loaded.
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        clipboard: Arc<dyn Clipboard>,
        rng: Box<dyn RngCore + Send>,
        settings: SessionSettings,
    ) -> Self {
        Self {
            decision: Decision::new(),
            store,
            clipboard,
            rng,
            settings,
        }
    }

    /// Creates a controller and hydrates it for a new session.
    ///
    /// Storage is read first, then `link` (if any) is applied on top, so a
    /// readable link wins. Unreadable sources are skipped with a warning.
    /// The result is saved so storage matches what is shown.
    pub fn start(
        store: Arc<dyn KeyValueStore>,
        clipboard: Arc<dyn Clipboard>,
        rng: Box<dyn RngCore + Send>,
        settings: SessionSettings,
        link: Option<&str>,
    ) -> Self {
        let mut controller = Self::new(store, clipboard, rng, settings);

        if controller.load_from_store() {
            tracing::info!("Restored decision from local storage");
        }
        if let Some(link) = link {
            if controller.apply_link(link) {
                tracing::info!("Opened decision from share link");
            }
        }

        controller.persist();
        controller
    }

    pub fn decision(&self) -> &Decision {
        &self.decision
    }

    pub fn score_board(&self) -> ScoreBoard {
        self.decision.score_board()
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Applies one command and reports what changed.
    pub fn dispatch(&mut self, command: DecisionCommand) -> CommandOutcome {
        tracing::debug!(?command, "Dispatching command");

        match command {
            DecisionCommand::SetTopic(topic) => {
                self.decision.set_topic(topic);
                self.persist();
                CommandOutcome::Updated
            }
            DecisionCommand::AddEntry { side, text, weight } => {
                let weight = Weight::parse_or_default(weight.as_deref());
                match self.decision.add_entry(side, &text, weight) {
                    Some(_) => {
                        self.persist();
                        CommandOutcome::Updated
                    }
                    None => CommandOutcome::Unchanged,
                }
            }
            DecisionCommand::UpdateText { side, id, text } => {
                let changed = self.decision.update_text(side, &id, &text);
                self.persisted_if(changed)
            }
            DecisionCommand::UpdateWeight { side, id, weight } => {
                let changed = self.decision.update_weight(side, &id, weight);
                self.persisted_if(changed)
            }
            DecisionCommand::RemoveEntry { side, id } => {
                let changed = self.decision.remove_entry(side, &id).is_some();
                self.persisted_if(changed)
            }
            DecisionCommand::SetLocked { side, locked } => {
                self.decision.set_locked(side, locked);
                self.persist();
                CommandOutcome::Redrawn
            }
            DecisionCommand::Recommend => CommandOutcome::Recommended(
                RecommendationEngine::recommend_for(&self.decision, &mut *self.rng),
            ),
            DecisionCommand::Share => self.share(),
            DecisionCommand::OpenLink(link) => {
                if self.apply_link(&link) {
                    self.persist();
                    CommandOutcome::Redrawn
                } else {
                    CommandOutcome::LinkIgnored
                }
            }
            DecisionCommand::Reset => {
                self.decision.reset();
                self.persist();
                CommandOutcome::Cleared
            }
        }
    }

    fn persisted_if(&self, changed: bool) -> CommandOutcome {
        if changed {
            self.persist();
            CommandOutcome::Updated
        } else {
            CommandOutcome::Unchanged
        }
    }

    fn share(&self) -> CommandOutcome {
        let link = match ShareLink::build(&self.settings.share_base_url, &self.decision) {
            Ok(link) => link,
            Err(e) => {
                tracing::warn!("Failed to build share link: {}", e);
                return CommandOutcome::ShareFailed;
            }
        };

        match self.clipboard.copy_text(&link) {
            Ok(()) => CommandOutcome::Shared(ShareOutcome::Copied { link }),
            Err(e) => {
                tracing::info!("Clipboard unavailable, falling back to manual copy: {}", e);
                CommandOutcome::Shared(ShareOutcome::ManualCopy { link })
            }
        }
    }

    /// Saves the current decision. Failures are logged and swallowed.
    fn persist(&self) {
        let json = match SnapshotCodec::to_json(&self.decision) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Failed to serialize decision: {}", e);
                return;
            }
        };
        if let Err(e) = self.store.set(&self.settings.storage_key, &json) {
            tracing::warn!(key = %self.settings.storage_key, "Failed to save decision: {}", e);
        }
    }

    /// Replaces the decision with the stored one. Returns whether it did.
    fn load_from_store(&mut self) -> bool {
        let raw = match self.store.get(&self.settings.storage_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return false,
            Err(e) => {
                tracing::warn!("Failed to read stored decision: {}", e);
                return false;
            }
        };
        match SnapshotCodec::from_json(&raw) {
            Ok(decision) => {
                self.decision = decision;
                true
            }
            Err(e) => {
                tracing::warn!("Ignoring unreadable stored decision: {}", e);
                false
            }
        }
    }

    /// Replaces the decision with the one in `link`. Returns whether it did.
    fn apply_link(&mut self, link: &str) -> bool {
        match ShareLink::open(link) {
            Ok(decision) => {
                self.decision = decision;
                true
            }
            Err(e) => {
                tracing::warn!("Ignoring unreadable share link: {}", e);
                false
            }
        }
    }
}
