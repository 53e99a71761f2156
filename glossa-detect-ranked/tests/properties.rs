//! Property-based tests: ordering, thresholding, and single/many agreement.

use glossa_core::LanguageDetector;
use glossa_core::test_utils::ScriptedRankedOracle;
use glossa_detect_ranked::{RankedConfig, RankedDetector, Threshold};
use proptest::prelude::*;

const LANGS: &[&str] = &["en", "de", "fr", "es", "it", "nl", "pt"];

/// Backend output in arbitrary order, possibly with tied scores.
fn backend_output() -> impl Strategy<Value = Vec<(String, f64)>> {
    prop::collection::vec(
        (
            prop::sample::select(LANGS),
            (0u32..=100).prop_map(|s| f64::from(s) / 100.0),
        )
            .prop_map(|(l, s)| (format!("__label__{l}"), s)),
        1..8,
    )
}

fn detector(
    pairs: Vec<(String, f64)>,
    threshold: f64,
    max_candidates: usize,
) -> RankedDetector<ScriptedRankedOracle> {
    let config = RankedConfig {
        threshold: Threshold::new(threshold).unwrap(),
        max_candidates,
        ..RankedConfig::default()
    };
    RankedDetector::with_config(ScriptedRankedOracle::new(pairs), config).unwrap()
}

proptest! {
    #[test]
    fn many_is_sorted_descending(
        pairs in backend_output(),
        threshold in 0.0f64..1.0,
        k in 1usize..8,
    ) {
        let got = detector(pairs, threshold, k).detect_many_languages("text").unwrap();
        for w in got.windows(2) {
            prop_assert!(w[0].score().unwrap() >= w[1].score().unwrap());
        }
    }

    #[test]
    fn every_candidate_clears_threshold(
        pairs in backend_output(),
        threshold in 0.0f64..1.0,
    ) {
        let got = detector(pairs.clone(), threshold, 5).detect_many_languages("text").unwrap();
        for c in &got {
            prop_assert!(c.score().unwrap() > threshold);
        }
        // Nothing above threshold within the first k was lost.
        let expected = pairs.iter().take(5).filter(|(_, s)| *s > threshold).count();
        prop_assert_eq!(got.len(), expected);
    }

    #[test]
    fn single_is_top_of_k1_regardless_of_threshold(
        pairs in backend_output(),
        threshold in 0.0f64..1.0,
    ) {
        let first = pairs[0].0.trim_start_matches("__label__").to_string();
        let d = detector(pairs, threshold, 5);
        let single = d.detect_single_language("text").unwrap();
        prop_assert_eq!(single.as_str(), first.as_str());
    }

    #[test]
    fn repeated_calls_are_identical(pairs in backend_output()) {
        let d = detector(pairs, 0.1, 5);
        prop_assert_eq!(
            d.detect_many_languages("text").unwrap(),
            d.detect_many_languages("text").unwrap()
        );
        prop_assert_eq!(
            d.detect_single_language("text").unwrap(),
            d.detect_single_language("text").unwrap()
        );
    }
}
