//! Property tests for the cosine-to-score mapping.

use compass::engine::{relevance_score, role_match_score};
use proptest::prelude::*;

fn reference(sim: f32, scale: f64) -> f64 {
    let raw = ((f64::from(sim) + 1.0) / 2.0) * scale;
    (raw * 100.0).round() / 100.0
}

proptest! {
    #[test]
    fn relevance_matches_reference_formula(sim in -1.0f32..=1.0f32) {
        prop_assert_eq!(relevance_score(sim), reference(sim, 10.0));
    }

    #[test]
    fn role_match_matches_reference_formula(sim in -1.0f32..=1.0f32) {
        prop_assert_eq!(role_match_score(sim), reference(sim, 100.0));
    }

    #[test]
    fn scores_stay_on_their_scales(sim in -1.0f32..=1.0f32) {
        let relevance = relevance_score(sim);
        let role = role_match_score(sim);
        prop_assert!((0.0..=10.0).contains(&relevance));
        prop_assert!((0.0..=100.0).contains(&role));
    }

    #[test]
    fn mapping_is_monotonic(a in -1.0f32..=1.0f32, b in -1.0f32..=1.0f32) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(relevance_score(lo) <= relevance_score(hi));
        prop_assert!(role_match_score(lo) <= role_match_score(hi));
    }
}
