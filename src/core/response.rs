use crate::core::scorer::round_to;
use crate::domain::model::{AnalysisResponse, ResponseMetadata, Scored, Scores};

pub const DEFAULT_API_VERSION: &str = "1.0";
pub const DEFAULT_PLATFORM: &str = "Rust Service";

/// 把評分結果包裝成對外的回應格式，沒有副作用
#[derive(Debug, Clone)]
pub struct ResponseBuilder {
    api_version: String,
    platform: String,
}

impl ResponseBuilder {
    pub fn new(api_version: impl Into<String>, platform: impl Into<String>) -> Self {
        Self {
            api_version: api_version.into(),
            platform: platform.into(),
        }
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn build(&self, scored: Scored) -> AnalysisResponse {
        let Scored { result, method } = scored;
        let confidence = result.confidence;

        AnalysisResponse {
            sentiment: result.sentiment,
            confidence,
            message: result.message,
            emoji: result.emoji,
            scores: Scores {
                confidence,
                confidence_percentage: round_to(confidence * 100.0, 1),
            },
            metadata: ResponseMetadata {
                text_length: result.metadata.text_length,
                word_count: result.metadata.word_count,
                positive_words: result.metadata.positive_words,
                negative_words: result.metadata.negative_words,
                timestamp: result.metadata.timestamp,
                api_version: self.api_version.clone(),
                method,
                platform: self.platform.clone(),
            },
        }
    }
}

impl Default for ResponseBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_API_VERSION, DEFAULT_PLATFORM)
    }
}
