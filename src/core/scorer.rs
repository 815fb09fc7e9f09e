use crate::core::lexicon::Lexicon;
use crate::domain::model::{AnalysisMetadata, AnalysisResult, Scored, Sentiment};
use crate::domain::ports::Scorer;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub const POSITIVE_THRESHOLD: f64 = 0.05;
pub const NEGATIVE_THRESHOLD: f64 = -0.05;
pub const CONFIDENCE_BONUS: f64 = 0.3;
pub const EMPTY_CONFIDENCE: f64 = 0.0;
pub const NO_MATCH_CONFIDENCE: f64 = 0.5;

pub const LEXICON_METHOD: &str = "SimpleFallback";

pub fn timestamp_now() -> String {
    chrono::Local::now().to_rfc3339_opts(chrono::SecondsFormat::Micros, false)
}

/// 依實際儲存的二進位值做十進位四捨五入，不先乘以 10^places
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{:.*}", places, value).parse().unwrap_or(value)
}

/// 分隔字元：Unicode 空白再加上 U+001C..=U+001F 四個資訊分隔符
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(is_separator).filter(|w| !w.is_empty()).collect()
}

/// 以詞庫比對為基礎的評分器
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    lexicon: Arc<Lexicon>,
}

impl LexiconScorer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// 對任何字串都會回傳結果，不會失敗
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let text_length = text.chars().count();

        if text.chars().all(is_separator) {
            let mut result = AnalysisResult::labeled(
                Sentiment::Neutral,
                EMPTY_CONFIDENCE,
                AnalysisMetadata {
                    text_length,
                    word_count: 0,
                    positive_words: Some(0),
                    negative_words: Some(0),
                    timestamp: timestamp_now(),
                },
            );
            result.message = "Empty text provided".to_string();
            return result;
        }

        let lowered = text.to_lowercase();
        let words = tokenize(&lowered);
        let word_count = words.len();

        let positive_count = words.iter().filter(|w| self.lexicon.is_positive(w)).count();
        let negative_count = words.iter().filter(|w| self.lexicon.is_negative(w)).count();
        let total_sentiment_words = positive_count + negative_count;

        let (sentiment, confidence) = if total_sentiment_words == 0 {
            (Sentiment::Neutral, NO_MATCH_CONFIDENCE)
        } else {
            let sentiment_score =
                (positive_count as f64 - negative_count as f64) / word_count as f64;
            let confidence = (total_sentiment_words as f64 / word_count.max(1) as f64
                + CONFIDENCE_BONUS)
                .min(1.0);
            (classify(sentiment_score), round_to(confidence, 3))
        };

        tracing::debug!(
            word_count,
            positive_count,
            negative_count,
            %sentiment,
            "Lexicon scoring finished"
        );

        AnalysisResult::labeled(
            sentiment,
            confidence,
            AnalysisMetadata {
                text_length,
                word_count,
                positive_words: Some(positive_count),
                negative_words: Some(negative_count),
                timestamp: timestamp_now(),
            },
        )
    }
}

/// 門檻為嚴格不等式，恰好 ±0.05 視為中性
pub fn classify(sentiment_score: f64) -> Sentiment {
    if sentiment_score > POSITIVE_THRESHOLD {
        Sentiment::Positive
    } else if sentiment_score < NEGATIVE_THRESHOLD {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

#[async_trait]
impl Scorer for LexiconScorer {
    fn name(&self) -> &str {
        LEXICON_METHOD
    }

    async fn score(&self, text: &str) -> Result<Scored> {
        Ok(Scored {
            result: self.analyze(text),
            method: LEXICON_METHOD.to_string(),
        })
    }
}
