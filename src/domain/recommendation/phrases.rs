//! Flavor text per bucket.

use super::Bucket;

/// Candidate strings for one bucket. Each list is drawn from independently.
#[derive(Debug)]
pub struct BucketPhrases {
    pub headings: &'static [&'static str],
    pub quips: &'static [&'static str],
    pub tips: &'static [&'static str],
}

const STRONG_YES: BucketPhrases = BucketPhrases {
    headings: &["Quack yeah — go for it!", "Full send, feather-friend!", "Green light!"],
    quips: &[
        "Quack yeah — this looks pond-erful!",
        "Feather high five — let’s splash!",
        "Green light across the lily pads!",
    ],
    tips: &[
        "Lock in a first step and celebrate a tiny win",
        "Set a quick checkpoint to keep momentum",
    ],
};

const LEAN_YES: BucketPhrases = BucketPhrases {
    headings: &["Leaning yes — dip a toe", "Looks promising", "Small quack of approval"],
    quips: &[
        "Mild quack of approval 🦆",
        "Leaning yes — dip a toe first.",
        "Looks promising; test the waters.",
    ],
    tips: &[
        "Timebox a small trial",
        "Ask one friend for a 30-second gut check",
    ],
};

const TIE: BucketPhrases = BucketPhrases {
    headings: &["Duck-iberation needed", "Too close to quack", "Photo finish"],
    quips: &[
        "Too close to quack confidently.",
        "Neck-and-neck like ducklings racing.",
        "Flip a coin… best two out of three?",
    ],
    tips: &[
        "Sleep on it and add one more pro or con tomorrow",
        "Reframe it smaller so the next step is obvious",
    ],
};

const LEAN_NO: BucketPhrases = BucketPhrases {
    headings: &["Probably not today", "Let’s paddle back", "Lean no — save your feathers"],
    quips: &[
        "Let’s paddle back a bit.",
        "Quacktion postponed — shrink a top con first.",
        "Probably not today; save your feathers.",
    ],
    tips: &[
        "Reduce the biggest risk, then revisit",
        "Try a cheaper/smaller version first",
    ],
};

const STRONG_NO: BucketPhrases = BucketPhrases {
    headings: &["Nope — waddle away", "Hard no from the pond", "Abort mission"],
    quips: &[
        "Hard no — waddle away for now.",
        "Red flag on the lily pad. Abort the splash.",
        "All feathers, no flight — skip it.",
    ],
    tips: &[
        "Try an alternate path",
        "Write the one thing that would need to change to reconsider",
    ],
};

/// Returns the phrase table for a bucket.
pub fn phrases(bucket: Bucket) -> &'static BucketPhrases {
    match bucket {
        Bucket::StrongYes => &STRONG_YES,
        Bucket::LeanYes => &LEAN_YES,
        Bucket::Tie => &TIE,
        Bucket::LeanNo => &LEAN_NO,
        Bucket::StrongNo => &STRONG_NO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_bucket_has_text_to_draw_from() {
        for bucket in Bucket::all() {
            let p = phrases(*bucket);
            assert_eq!(p.headings.len(), 3, "{:?}", bucket);
            assert_eq!(p.quips.len(), 3, "{:?}", bucket);
            assert_eq!(p.tips.len(), 2, "{:?}", bucket);
        }
    }

    #[test]
    fn tips_carry_no_trailing_period() {
        // The message template adds the period.
        for bucket in Bucket::all() {
            assert!(phrases(*bucket).tips.iter().all(|t| !t.ends_with('.')));
        }
    }
}
