use crate::core::scorer::{timestamp_now, tokenize};
use crate::domain::model::{AnalysisMetadata, AnalysisResult, Scored, Sentiment};
use crate::domain::ports::Scorer;
use crate::utils::error::{Result, ServiceError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

pub const EVALUATOR_METHOD: &str = "EmotionEvaluator";
const PROBE_TEXT: &str = "good";

#[derive(Debug, Deserialize)]
struct EvaluatorReply {
    sentiment: String,
    confidence: f64,
    #[serde(default, rename = "analysisMethod", alias = "analysis_method")]
    analysis_method: Option<String>,
}

/// 透過 HTTP 呼叫外部的進階情緒評估服務
#[derive(Debug, Clone)]
pub struct RemoteEvaluator {
    client: Client,
    endpoint: String,
}

impl RemoteEvaluator {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// 啟動時確認評估器可用，回覆格式不符也算不可用
    pub async fn probe(&self) -> Result<()> {
        self.evaluate(PROBE_TEXT).await.map(|_| ())
    }

    async fn evaluate(&self, text: &str) -> Result<Scored> {
        tracing::debug!("Calling evaluator at: {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .json(&serde_json::json!({ "text": text }))
            .send()
            .await?
            .error_for_status()?;

        let reply: EvaluatorReply = response.json().await?;
        to_scored(text, reply)
    }
}

fn to_scored(text: &str, reply: EvaluatorReply) -> Result<Scored> {
    let sentiment =
        Sentiment::from_label(&reply.sentiment).ok_or_else(|| ServiceError::EvaluatorReply {
            message: format!("unknown sentiment label '{}'", reply.sentiment),
        })?;

    if !reply.confidence.is_finite() || !(0.0..=1.0).contains(&reply.confidence) {
        return Err(ServiceError::EvaluatorReply {
            message: format!("confidence {} is outside [0, 1]", reply.confidence),
        });
    }

    let metadata = AnalysisMetadata {
        text_length: text.chars().count(),
        word_count: tokenize(text).len(),
        positive_words: None,
        negative_words: None,
        timestamp: timestamp_now(),
    };

    Ok(Scored {
        result: AnalysisResult::labeled(sentiment, reply.confidence, metadata),
        method: reply
            .analysis_method
            .unwrap_or_else(|| EVALUATOR_METHOD.to_string()),
    })
}

#[async_trait]
impl Scorer for RemoteEvaluator {
    fn name(&self) -> &str {
        EVALUATOR_METHOD
    }

    async fn score(&self, text: &str) -> Result<Scored> {
        self.evaluate(text).await
    }
}
