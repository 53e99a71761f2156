//! Property-based tests: candidate ranking.

use glossa_core::*;
use proptest::prelude::*;

fn scored_candidates() -> impl Strategy<Value = Vec<(String, f64)>> {
    // Coarse scores so ties actually show up.
    prop::collection::vec(("[a-z]{2}", (0u8..=10).prop_map(|s| f64::from(s) / 10.0)), 0..12)
}

proptest! {
    #[test]
    fn ranking_is_non_increasing(pairs in scored_candidates()) {
        let mut candidates: Vec<Candidate> =
            pairs.iter().map(|(l, s)| Candidate::scored(l.as_str(), *s)).collect();
        rank_candidates(&mut candidates);

        for w in candidates.windows(2) {
            prop_assert!(w[0].score().unwrap() >= w[1].score().unwrap());
        }
    }

    #[test]
    fn ranking_is_a_stable_permutation(pairs in scored_candidates()) {
        // Tag each candidate with its original index through the label.
        let mut candidates: Vec<Candidate> = pairs
            .iter()
            .enumerate()
            .map(|(i, (_, s))| Candidate::scored(format!("{i}"), *s))
            .collect();
        rank_candidates(&mut candidates);

        prop_assert_eq!(candidates.len(), pairs.len());
        for w in candidates.windows(2) {
            if w[0].score() == w[1].score() {
                let a: usize = w[0].language.as_str().parse().unwrap();
                let b: usize = w[1].language.as_str().parse().unwrap();
                prop_assert!(a < b, "tie broken out of backend order");
            }
        }
    }
}

#[test]
fn validate_text_accepts_non_blank() {
    assert_eq!(validate_text(" hi ").unwrap(), " hi ");
    assert!(matches!(validate_text(""), Err(InputError::Empty)));
}
