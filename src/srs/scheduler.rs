use serde::{Deserialize, Serialize};

use crate::srs::{ItemKey, SrsStatus};

const DAY_MS: u64 = 24 * 60 * 60 * 1000;
const INTERVAL_DAYS: [u64; 5] = [1, 3, 7, 14, 30];
const MAX_INTERVAL_DAYS: u64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewOutcome {
    Correct,
    Incorrect,
}

impl ReviewOutcome {
    pub fn from_correct(is_correct: bool) -> Self {
        if is_correct {
            Self::Correct
        } else {
            Self::Incorrect
        }
    }
}

/// Days until the next review after reaching `streak` consecutive correct answers.
pub fn interval_days(streak: u32) -> u64 {
    if streak == 0 {
        return 0;
    }
    INTERVAL_DAYS
        .get(streak as usize - 1)
        .copied()
        .unwrap_or(MAX_INTERVAL_DAYS)
}

/// Next status for `key` after one review.
///
/// A miss drops the streak to zero, which also takes the item out of the due
/// pool until it is learned again.
pub fn apply_review(
    previous: Option<&SrsStatus>,
    key: &ItemKey,
    outcome: ReviewOutcome,
    now_ms: u64,
) -> SrsStatus {
    match outcome {
        ReviewOutcome::Correct => {
            let streak = previous.map_or(0, |s| s.streak).saturating_add(1);
            let next_review = now_ms.saturating_add(interval_days(streak) * DAY_MS);
            SrsStatus::new(key, streak, next_review)
        }
        ReviewOutcome::Incorrect => SrsStatus::new(key, 0, now_ms),
    }
}
