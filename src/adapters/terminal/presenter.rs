//! Plain-text presenter writing to any `io::Write`.

use std::io::Write;

use crate::domain::decision::{Decision, ScoreBoard};
use crate::domain::foundation::Side;
use crate::domain::recommendation::Recommendation;
use crate::ports::{DecisionPresenter, Notice};

/// Renders a decision session as text.
pub struct TerminalPresenter<W: Write> {
    out: W,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Writes text. A broken terminal is logged, not propagated.
    fn emit(&mut self, text: &str) {
        let result = writeln!(self.out, "{}", text).and_then(|_| self.out.flush());
        if let Err(e) = result {
            tracing::warn!("Failed to write to terminal: {}", e);
        }
    }
}

fn render_side(decision: &Decision, board: &ScoreBoard, side: Side) -> String {
    let status = if decision.is_locked(side) { "done" } else { "open" };
    let mut text = format!("{} [{}]  {}", side, status, board.total_label(side));

    let entries = decision.entries(side);
    if entries.is_empty() {
        text.push_str("\n  (none yet)");
    }
    for (i, entry) in entries.iter().enumerate() {
        text.push_str(&format!("\n  {}. {}", i + 1, entry.text()));
        if board.is_revealed() {
            text.push_str(&format!("  (score {})", entry.weight()));
        }
    }
    text
}

impl<W: Write> DecisionPresenter for TerminalPresenter<W> {
    fn render(&mut self, decision: &Decision, board: &ScoreBoard) {
        let topic = match decision.topic().trim() {
            "" => "(no topic)",
            t => t,
        };
        let text = format!(
            "\nTopic: {}\n{}\n{}\n{}",
            topic,
            render_side(decision, board, Side::Supporting),
            render_side(decision, board, Side::Opposing),
            board.score_line()
        );
        self.emit(&text);
    }

    fn show_recommendation(&mut self, recommendation: &Recommendation) {
        let text = format!(
            "\n{} {}\n{}",
            recommendation.icon, recommendation.heading, recommendation.message
        );
        self.emit(&text);
    }

    fn notify(&mut self, notice: &Notice) {
        let text = format!("» {}", notice.text());
        self.emit(&text);
    }

    fn offer_manual_copy(&mut self, link: &str) {
        let text = format!("Copy this link to share your decision:\n{}", link);
        self.emit(&text);
    }
}
