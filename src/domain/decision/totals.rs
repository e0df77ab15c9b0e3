//! Aggregator - per-side sums, net score, and the gated score board.

use super::Entry;
use crate::domain::foundation::Side;

/// Placeholder shown in place of any number while scores are hidden.
pub const HIDDEN_TOTAL_LABEL: &str = "Total: —";

/// Prompt shown in place of the score line while scores are hidden.
pub const HIDDEN_SCORE_PROMPT: &str =
    "Lock both lists to see totals (check “I’m done adding pros/cons”).";

/// Sums and entry counts for both sides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub support_total: u32,
    pub oppose_total: u32,
    pub support_count: usize,
    pub oppose_count: usize,
}

impl Totals {
    /// Sums weights per side. Pure, linear in the number of entries.
    pub fn compute(supporting: &[Entry], opposing: &[Entry]) -> Self {
        Self {
            support_total: sum_weights(supporting),
            oppose_total: sum_weights(opposing),
            support_count: supporting.len(),
            oppose_count: opposing.len(),
        }
    }

    /// supportTotal minus opposeTotal.
    pub fn net(&self) -> i64 {
        self.support_total as i64 - self.oppose_total as i64
    }

    pub fn total(&self, side: Side) -> u32 {
        match side {
            Side::Supporting => self.support_total,
            Side::Opposing => self.oppose_total,
        }
    }

    pub fn count(&self, side: Side) -> usize {
        match side {
            Side::Supporting => self.support_count,
            Side::Opposing => self.oppose_count,
        }
    }
}

fn sum_weights(entries: &[Entry]) -> u32 {
    entries.iter().map(|e| e.weight().value() as u32).sum()
}

/// Formats a net score with an explicit `+` for zero and positive values.
pub fn signed(net: i64) -> String {
    if net >= 0 {
        format!("+{}", net)
    } else {
        net.to_string()
    }
}

/// What the rendering layer may show about scores.
///
/// While hidden there is no number to show at all, so the consumer cannot
/// accidentally print stale or zero totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBoard {
    Hidden,
    Revealed(Totals),
}

impl ScoreBoard {
    pub fn is_revealed(&self) -> bool {
        matches!(self, ScoreBoard::Revealed(_))
    }

    pub fn totals(&self) -> Option<&Totals> {
        match self {
            ScoreBoard::Hidden => None,
            ScoreBoard::Revealed(t) => Some(t),
        }
    }

    /// Per-side total label, e.g. `Total: 12`.
    pub fn total_label(&self, side: Side) -> String {
        match self {
            ScoreBoard::Hidden => HIDDEN_TOTAL_LABEL.to_string(),
            ScoreBoard::Revealed(t) => format!("Total: {}", t.total(side)),
        }
    }

    /// Summary line under both lists.
    pub fn score_line(&self) -> String {
        match self {
            ScoreBoard::Hidden => HIDDEN_SCORE_PROMPT.to_string(),
            ScoreBoard::Revealed(t) => format!(
                "Pros: {}  •  Cons: {}  •  Net: {}",
                t.support_total,
                t.oppose_total,
                signed(t.net())
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Weight;
    use proptest::prelude::*;

    fn entries(weights: &[i64]) -> Vec<Entry> {
        weights
            .iter()
            .map(|w| Entry::new("x", Weight::clamped(*w)))
            .collect()
    }

    #[test]
    fn empty_lists_total_zero() {
        let t = Totals::compute(&[], &[]);
        assert_eq!(t, Totals::default());
        assert_eq!(t.net(), 0);
    }

    #[test]
    fn sums_each_side_and_nets() {
        let t = Totals::compute(&entries(&[5, 5]), &entries(&[1]));
        assert_eq!(t.support_total, 10);
        assert_eq!(t.oppose_total, 1);
        assert_eq!(t.support_count, 2);
        assert_eq!(t.oppose_count, 1);
        assert_eq!(t.net(), 9);
    }

    #[test]
    fn net_can_be_negative() {
        let t = Totals::compute(&entries(&[1]), &entries(&[6]));
        assert_eq!(t.net(), -5);
    }

    #[test]
    fn signed_formats_sign() {
        assert_eq!(signed(9), "+9");
        assert_eq!(signed(0), "+0");
        assert_eq!(signed(-5), "-5");
    }

    #[test]
    fn hidden_board_shows_no_numbers() {
        let board = ScoreBoard::Hidden;
        assert_eq!(board.total_label(Side::Supporting), "Total: —");
        assert_eq!(board.total_label(Side::Opposing), "Total: —");
        assert_eq!(board.score_line(), HIDDEN_SCORE_PROMPT);
        assert!(board.totals().is_none());
    }

    #[test]
    fn revealed_board_formats_line() {
        let board = ScoreBoard::Revealed(Totals::compute(&entries(&[4]), &entries(&[2, 3])));
        assert_eq!(board.total_label(Side::Supporting), "Total: 4");
        assert_eq!(board.total_label(Side::Opposing), "Total: 5");
        assert_eq!(board.score_line(), "Pros: 4  •  Cons: 5  •  Net: -1");
    }

    proptest! {
        #[test]
        fn totals_are_order_independent(
            pros in prop::collection::vec(1i64..=10, 0..12),
            cons in prop::collection::vec(1i64..=10, 0..12),
        ) {
            let forward = Totals::compute(&entries(&pros), &entries(&cons));

            let mut rev_pros = pros.clone();
            rev_pros.reverse();
            let mut rot_cons = cons.clone();
            if !rot_cons.is_empty() {
                rot_cons.rotate_left(1);
            }
            let shuffled = Totals::compute(&entries(&rev_pros), &entries(&rot_cons));

            prop_assert_eq!(forward, shuffled);
            prop_assert_eq!(forward.support_total as i64, pros.iter().sum::<i64>());
            prop_assert_eq!(forward.net(), pros.iter().sum::<i64>() - cons.iter().sum::<i64>());
        }
    }
}
