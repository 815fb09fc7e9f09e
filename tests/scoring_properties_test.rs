use sentiment_api::core::scorer::tokenize;
use sentiment_api::core::Sentiment;
use sentiment_api::{Lexicon, LexiconScorer};
use std::sync::Arc;

fn scorer() -> LexiconScorer {
    LexiconScorer::new(Arc::new(Lexicon::builtin()))
}

const SAMPLES: &[&str] = &[
    "",
    "   ",
    "The sky is blue today",
    "I love this product, it is amazing and wonderful",
    "This is the worst, terrible, broken product",
    "good bad ugly",
    "GREAT great Great",
    "slow service but delicious tasty food",
    "awful",
    "nice\tfresh\nquality   produce",
];

#[test]
fn test_confidence_always_in_unit_interval() {
    let scorer = scorer();
    for text in SAMPLES {
        let result = scorer.analyze(text);
        assert!(
            (0.0..=1.0).contains(&result.confidence),
            "{:?} gave {}",
            text,
            result.confidence
        );
    }
}

#[test]
fn test_metadata_counts_are_consistent() {
    let scorer = scorer();
    for text in SAMPLES {
        let result = scorer.analyze(text);
        let meta = &result.metadata;
        assert_eq!(meta.word_count, tokenize(&text.to_lowercase()).len());
        assert_eq!(meta.text_length, text.chars().count());
        assert!(meta.positive_words.unwrap() + meta.negative_words.unwrap() <= meta.word_count);
    }
}

#[test]
fn test_classification_ignores_case() {
    let scorer = scorer();
    for text in SAMPLES {
        let lower = scorer.analyze(&text.to_lowercase());
        let upper = scorer.analyze(&text.to_uppercase());
        assert_eq!(lower.sentiment, upper.sentiment, "{:?}", text);
        assert_eq!(lower.confidence, upper.confidence, "{:?}", text);
    }
}

#[test]
fn test_no_lexicon_hits_is_neutral_half() {
    let scorer = scorer();
    for text in ["The sky is blue today", "numbers 1 2 3", "good, bad."] {
        let result = scorer.analyze(text);
        assert_eq!(result.sentiment, Sentiment::Neutral);
        assert_eq!(result.confidence, 0.5);
    }
}

#[test]
fn test_mixed_review_leans_positive() {
    // 2 正面 (delicious, tasty) 對 1 負面 (slow)，共 6 個字
    let result = scorer().analyze("slow service but delicious tasty food");
    assert_eq!(result.sentiment, Sentiment::Positive);
    assert_eq!(result.confidence, 0.8);
}
