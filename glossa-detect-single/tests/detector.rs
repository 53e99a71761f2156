use glossa_core::test_utils::FixedLabelOracle;
use glossa_core::{Candidate, DetectorKind, Exclusive, LabelOracle, LanguageDetector, OracleError};
use glossa_detect_single::SingleLabelDetector;
use std::cell::Cell;
use std::sync::Arc;
use std::thread;

fn fixture_oracle() -> FixedLabelOracle {
    FixedLabelOracle::new("en")
        .with_text("Hello, my name is John Doe.", "en")
        .with_text("Hallo, mein Name ist John Doe.", "de")
}

#[test]
fn detects_per_text() {
    let detector = SingleLabelDetector::new(fixture_oracle());
    assert_eq!(
        detector
            .detect_single_language("Hello, my name is John Doe.")
            .unwrap(),
        "en"
    );
    assert_eq!(
        detector
            .detect_single_language("Hallo, mein Name ist John Doe.")
            .unwrap(),
        "de"
    );
}

#[test]
fn many_matches_single() {
    let detector = SingleLabelDetector::new(fixture_oracle());
    let text = "Hallo, mein Name ist John Doe.";
    let single = detector.detect_single_language(text).unwrap();
    let many = detector.detect_many_languages(text).unwrap();
    assert_eq!(many, vec![Candidate::unscored(single)]);
}

#[test]
fn repeated_calls_are_identical() {
    let detector = SingleLabelDetector::new(fixture_oracle());
    let text = "Hello, my name is John Doe.";
    assert_eq!(
        detector.detect_many_languages(text).unwrap(),
        detector.detect_many_languages(text).unwrap()
    );
    assert_eq!(detector.oracle().calls(), 2);
}

#[test]
fn usable_as_trait_object() {
    let detector: Box<dyn LanguageDetector> = Box::new(SingleLabelDetector::new(fixture_oracle()));
    assert_eq!(detector.kind(), DetectorKind::SingleLabel);
    assert_eq!(
        detector.detect_single_language_bytes(b"Hello").unwrap(),
        "en"
    );
}

/// Counts calls in a `Cell`, so it is `Send` but not `Sync`.
struct CountingModel {
    calls: Cell<u32>,
}

impl LabelOracle for CountingModel {
    fn predict(&self, _text: &str) -> Result<String, OracleError> {
        self.calls.set(self.calls.get() + 1);
        Ok("nl".into())
    }
}

#[test]
fn exclusive_model_across_threads() {
    let detector = Arc::new(SingleLabelDetector::new(Exclusive::new(CountingModel {
        calls: Cell::new(0),
    })));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let detector = detector.clone();
            thread::spawn(move || detector.detect_single_language("Goedemorgen").unwrap())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), "nl");
    }
}
