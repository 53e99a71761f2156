use glossa_core::test_utils::ScriptedRankedOracle;
use glossa_core::{Confidence, DetectError, Exclusive, InputError, LanguageDetector, RankedOracle};
use glossa_core::{OracleError, Prediction};
use glossa_detect_ranked::RankedDetector;
use std::cell::RefCell;
use std::sync::Arc;
use std::thread;

const ENGLISH: &str = "Hello, my name is John Doe.";
const MIXED: &str = "Hello, my name is John Doe. I live in London. Auf Wiedersehen.";

/// Shaped like a fastText lid.176 model's output for the two fixture texts.
fn lid_like_oracle() -> ScriptedRankedOracle {
    ScriptedRankedOracle::new([("__label__en", 0.6)])
        .with_text(
            ENGLISH,
            [
                ("__label__en", 0.93),
                ("__label__fr", 0.01),
                ("__label__de", 0.008),
                ("__label__nl", 0.004),
                ("__label__es", 0.002),
            ],
        )
        .with_text(
            MIXED,
            [
                ("__label__en", 0.71),
                ("__label__de", 0.22),
                ("__label__nl", 0.02),
                ("__label__sv", 0.01),
                ("__label__da", 0.005),
            ],
        )
}

// --- Fixture texts ---

#[test]
fn english_sentence() {
    let detector = RankedDetector::new(lid_like_oracle());
    assert_eq!(detector.detect_single_language(ENGLISH).unwrap(), "en");

    let many = detector.detect_many_languages(ENGLISH).unwrap();
    assert_eq!(many.len(), 1);
    assert_eq!(many[0].language, "en");
    assert!(matches!(many[0].confidence, Confidence::Score(_)));
}

#[test]
fn mixed_english_german() {
    let detector = RankedDetector::new(lid_like_oracle());
    let many = detector.detect_many_languages(MIXED).unwrap();

    let mut codes: Vec<&str> = many.iter().map(|c| c.language.as_str()).collect();
    assert!(many[0].score().unwrap() > many[1].score().unwrap());
    codes.sort();
    assert_eq!(codes, ["de", "en"]);
}

#[test]
fn empty_text_is_input_error() {
    let detector = RankedDetector::new(lid_like_oracle());
    assert!(matches!(
        detector.detect_many_languages(""),
        Err(DetectError::Input(InputError::Empty))
    ));
    assert!(detector.oracle().requested_k().is_empty());
}

// --- Sharing ---

#[test]
fn shared_across_threads() {
    let detector = Arc::new(RankedDetector::new(lid_like_oracle()));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let detector = detector.clone();
            thread::spawn(move || detector.detect_single_language(MIXED).unwrap())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), "en");
    }
}

/// A model that keeps scratch state between calls and so is not `Sync`.
struct ScratchModel {
    scratch: RefCell<Vec<String>>,
}

impl RankedOracle for ScratchModel {
    fn predict(&self, text: &str, k: usize) -> Result<Prediction, OracleError> {
        let mut scratch = self.scratch.borrow_mut();
        scratch.clear();
        scratch.extend(text.split_whitespace().map(str::to_owned));
        let pairs = [("__label__en", 0.8), ("__label__de", 0.15)];
        Ok(Prediction::from_pairs(pairs.into_iter().take(k)))
    }
}

#[test]
fn non_sync_model_shared_through_exclusive() {
    let model = ScratchModel {
        scratch: RefCell::new(Vec::new()),
    };
    let detector = Arc::new(RankedDetector::new(Exclusive::new(model)));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let detector = detector.clone();
            thread::spawn(move || detector.detect_many_languages(MIXED).unwrap().len())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), 2);
    }
}

#[test]
fn shared_model_behind_arc_oracle() {
    let model = Arc::new(lid_like_oracle());
    let strict = RankedDetector::with_threshold(model.clone(), 0.5).unwrap();
    let loose = RankedDetector::with_threshold(model.clone(), 0.0).unwrap();

    assert_eq!(strict.detect_many_languages(MIXED).unwrap().len(), 1);
    assert_eq!(loose.detect_many_languages(MIXED).unwrap().len(), 5);
    assert_eq!(strict.threshold(), 0.5);
    assert_eq!(model.requested_k(), vec![5, 5]);
}
