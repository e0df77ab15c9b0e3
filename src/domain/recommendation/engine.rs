//! Recommendation engine - turns revealed totals into a verdict with flavor text.

use rand::seq::SliceRandom;
use rand::Rng;

use super::{phrases, Bucket};
use crate::domain::decision::{signed, Decision, Totals};

/// Derived, never persisted, recomputed on every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    /// `None` for the neutral greeting and for the "finish your lists" gate.
    pub bucket: Option<Bucket>,
    pub icon: &'static str,
    pub heading: String,
    pub message: String,
}

impl Recommendation {
    /// True when this carries an actual verdict.
    pub fn is_terminal(&self) -> bool {
        self.bucket.is_some()
    }
}

/// Stateless recommendation service.
///
/// Randomness comes from the caller so tests can pass a seeded generator.
pub struct RecommendationEngine;

impl RecommendationEngine {
    /// Greeting shown before any recommendation has been requested.
    pub fn neutral() -> Recommendation {
        Recommendation {
            bucket: None,
            icon: "🙂",
            heading: "Hello from Decision Duck!".to_string(),
            message: "Add items, mark both lists as done, then ask for a recommendation."
                .to_string(),
        }
    }

    /// Fixed answer while either list is still open.
    pub fn gate() -> Recommendation {
        Recommendation {
            bucket: None,
            icon: "🦆",
            heading: "Finish your lists".to_string(),
            message: "Mark both the pros and the cons as done to reveal scores, \
                      then ask for a recommendation."
                .to_string(),
        }
    }

    /// Recommends from totals.
    ///
    /// When `revealed` is false the totals are not consulted and the gate
    /// answer is returned.
    pub fn recommend<R: Rng + ?Sized>(
        totals: &Totals,
        revealed: bool,
        topic: Option<&str>,
        rng: &mut R,
    ) -> Recommendation {
        if !revealed {
            return Self::gate();
        }

        let bucket = Bucket::classify(totals);
        let table = phrases(bucket);

        // Three independent draws.
        let heading = pick(table.headings, rng);
        let quip = pick(table.quips, rng);
        let tip = pick(table.tips, rng);

        let line = format!(
            "Pros {} vs Cons {}. Net {}.",
            totals.support_total,
            totals.oppose_total,
            signed(totals.net())
        );
        let tail = topic
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(|t| format!(" (Topic: “{}”)", t))
            .unwrap_or_default();

        Recommendation {
            bucket: Some(bucket),
            icon: bucket.icon(),
            heading: heading.to_string(),
            message: format!("{} {} Duck tip: {}.{}", quip, line, tip, tail),
        }
    }

    /// Convenience over [`Self::recommend`] reading everything from a decision.
    pub fn recommend_for<R: Rng + ?Sized>(decision: &Decision, rng: &mut R) -> Recommendation {
        Self::recommend(
            &decision.compute_totals(),
            decision.is_revealed(),
            Some(decision.topic()),
            rng,
        )
    }
}

fn pick<R: Rng + ?Sized>(options: &'static [&'static str], rng: &mut R) -> &'static str {
    options.choose(rng).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Side, Weight};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn locked_decision(pros: &[i64], cons: &[i64]) -> Decision {
        let mut d = Decision::new();
        for w in pros {
            d.add_entry(Side::Supporting, "pro", Weight::clamped(*w));
        }
        for w in cons {
            d.add_entry(Side::Opposing, "con", Weight::clamped(*w));
        }
        d.set_locked(Side::Supporting, true);
        d.set_locked(Side::Opposing, true);
        d
    }

    fn assert_drawn_from_table(rec: &Recommendation) {
        let bucket = rec.bucket.expect("terminal recommendation");
        let table = phrases(bucket);
        assert!(table.headings.contains(&rec.heading.as_str()));
        assert!(table.quips.iter().any(|q| rec.message.starts_with(q)));
        assert!(table
            .tips
            .iter()
            .any(|t| rec.message.contains(&format!("Duck tip: {}.", t))));
    }

    #[test]
    fn strong_yes_scenario() {
        let d = locked_decision(&[5, 5], &[1]);
        let rec = RecommendationEngine::recommend_for(&d, &mut rng());
        assert_eq!(rec.bucket, Some(Bucket::StrongYes));
        assert_eq!(rec.icon, "🎉");
        assert!(rec.message.contains("Pros 10 vs Cons 1. Net +9."));
        assert_drawn_from_table(&rec);
    }

    #[test]
    fn lean_yes_scenario() {
        let d = locked_decision(&[2], &[]);
        let rec = RecommendationEngine::recommend_for(&d, &mut rng());
        assert_eq!(rec.bucket, Some(Bucket::LeanYes));
        assert!(rec.message.contains("Net +2."));
        assert_drawn_from_table(&rec);
    }

    #[test]
    fn empty_locked_lists_tie() {
        let d = locked_decision(&[], &[]);
        let rec = RecommendationEngine::recommend_for(&d, &mut rng());
        assert_eq!(rec.bucket, Some(Bucket::Tie));
        assert!(rec.message.contains("Pros 0 vs Cons 0. Net +0."));
    }

    #[test]
    fn single_heavy_con_leans_no() {
        let d = locked_decision(&[1], &[6]);
        let rec = RecommendationEngine::recommend_for(&d, &mut rng());
        assert_eq!(rec.bucket, Some(Bucket::LeanNo));
        assert!(rec.message.contains("Net -5."));
        assert_drawn_from_table(&rec);
    }

    #[test]
    fn unlocked_returns_gate() {
        let mut d = locked_decision(&[10, 10], &[]);
        d.set_locked(Side::Opposing, false);
        let rec = RecommendationEngine::recommend_for(&d, &mut rng());
        assert_eq!(rec, RecommendationEngine::gate());
        assert!(!rec.is_terminal());
    }

    #[test]
    fn topic_is_appended_when_set() {
        let mut d = locked_decision(&[3], &[3]);
        d.set_topic("  Adopt a duck  ");
        let rec = RecommendationEngine::recommend_for(&d, &mut rng());
        assert!(rec.message.ends_with(" (Topic: “Adopt a duck”)"));
    }

    #[test]
    fn blank_topic_is_not_appended() {
        let mut d = locked_decision(&[3], &[3]);
        d.set_topic("   ");
        let rec = RecommendationEngine::recommend_for(&d, &mut rng());
        assert!(!rec.message.contains("Topic:"));
        assert!(rec.message.ends_with('.'));
    }

    #[test]
    fn same_seed_same_text() {
        let d = locked_decision(&[5, 5], &[1]);
        let a = RecommendationEngine::recommend_for(&d, &mut StdRng::seed_from_u64(7));
        let b = RecommendationEngine::recommend_for(&d, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn neutral_is_not_terminal() {
        assert!(!RecommendationEngine::neutral().is_terminal());
    }

    proptest! {
        #[test]
        fn never_terminal_while_hidden(
            support in 0u32..500,
            oppose in 0u32..500,
            support_count in 0usize..50,
            oppose_count in 0usize..50,
            seed in any::<u64>(),
        ) {
            let totals = Totals { support_total: support, oppose_total: oppose, support_count, oppose_count };
            let rec = RecommendationEngine::recommend(
                &totals,
                false,
                Some("topic"),
                &mut StdRng::seed_from_u64(seed),
            );
            prop_assert!(!rec.is_terminal());
        }
    }
}
