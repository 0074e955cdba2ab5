//! Per-turn competency scoring. Deliberately NOT content-derived: scores are
//! drawn from a seeded PRNG so they are reproducible given the same session
//! context, and rise with interview progress. `overall` is always re-derived
//! from the seven competency entries.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::InterviewSession;

pub const OVERALL_KEY: &str = "overall";

/// Asymmetric offset band per competency, in score points around the base
/// level (a 1.5-point variance unit scaled per dimension).
const SCORE_BANDS: [(&str, f64, f64); 7] = [
    ("technical_skills", -1.5, 2.0),
    ("communication", -1.5, 1.5),
    ("problem_solving", -1.5, 1.8),
    ("leadership", -1.2, 1.5),
    ("adaptability", -1.05, 1.5),
    ("creativity", -1.35, 1.7),
    ("teamwork", -0.9, 1.5),
];

/// FNV-1a fold over the candidate name and the most recent turn texts. A
/// separator byte between inputs keeps ("ab", "c") and ("a", "bc") distinct.
pub fn seed_from_context(candidate_name: &str, recent_texts: &[&str]) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = FNV_OFFSET;
    let mut fold = |bytes: &[u8]| {
        for byte in bytes {
            hash ^= u64::from(*byte);
            hash = hash.wrapping_mul(FNV_PRIME);
        }
        hash ^= 0xff;
        hash = hash.wrapping_mul(FNV_PRIME);
    };

    for text in recent_texts {
        fold(text.as_bytes());
    }
    fold(candidate_name.as_bytes());
    hash
}

/// Pure score computation: identical (seed, question_number) inputs yield the
/// identical mapping. The base level rises 0.4 points per question, capped at
/// 10; each competency draws a bounded offset and is truncated and clamped to
/// [1, 10].
pub fn competency_scores(seed: u64, question_number: u32) -> BTreeMap<String, u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let base = (5.0 + 0.4 * f64::from(question_number)).min(10.0);

    let mut scores = BTreeMap::new();
    for (name, low, high) in SCORE_BANDS {
        let offset: f64 = rng.gen_range(low..=high);
        let value = (base + offset).trunc().clamp(1.0, 10.0) as u8;
        scores.insert(name.to_string(), value);
    }

    let overall = overall_of(&scores);
    scores.insert(OVERALL_KEY.to_string(), overall);
    scores
}

/// Truncated integer mean of the competency entries; 5 when there are none.
pub fn overall_of(scores: &BTreeMap<String, u8>) -> u8 {
    let values: Vec<u64> = scores
        .iter()
        .filter(|(key, _)| key.as_str() != OVERALL_KEY)
        .map(|(_, value)| u64::from(*value))
        .collect();

    if values.is_empty() {
        5
    } else {
        (values.iter().sum::<u64>() / values.len() as u64) as u8
    }
}

/// Overwrites the session's score mapping in place. Appends no turn and
/// persists nothing; the controller owns persistence.
pub fn update_scores(session: &mut InterviewSession) {
    let recent = session.recent_turn_texts(2);
    let seed = seed_from_context(&session.candidate_name, &recent);
    session.scores = competency_scores(seed, session.question_number);
}
