use crate::core::scorer::is_separator;
use crate::utils::error::ServiceError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Sentiment::Positive => "😊",
            Sentiment::Negative => "😞",
            Sentiment::Neutral => "😐",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive sentiment detected!",
            Sentiment::Negative => "Negative sentiment detected!",
            Sentiment::Neutral => "Neutral sentiment detected",
        }
    }

    /// 解析外部評估器回傳的標籤，大小寫不拘
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "positive" => Some(Sentiment::Positive),
            "negative" => Some(Sentiment::Negative),
            "neutral" => Some(Sentiment::Neutral),
            _ => None,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub text: String,
}

impl AnalysisRequest {
    /// 依序驗證請求內容，遇到第一個錯誤即停止
    pub fn from_body(body: Option<&[u8]>) -> Result<Self, ServiceError> {
        let body = match body {
            Some(body) if !body.is_empty() => body,
            _ => return Err(ServiceError::NoDataProvided),
        };

        // 非 UTF-8 的內容同樣視為 JSON 格式錯誤
        let value: serde_json::Value =
            serde_json::from_slice(body).map_err(|_| ServiceError::InvalidJson)?;
        let object = value.as_object().ok_or(ServiceError::InvalidJson)?;

        let text = object.get("text").ok_or(ServiceError::MissingTextField)?;
        match text.as_str() {
            Some(text) if !text.chars().all(is_separator) => Ok(Self {
                text: text.to_string(),
            }),
            _ => Err(ServiceError::InvalidText),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisMetadata {
    pub text_length: usize,
    pub word_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positive_words: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_words: Option<usize>,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub message: String,
    pub emoji: String,
    pub metadata: AnalysisMetadata,
}

impl AnalysisResult {
    /// 以標籤建立結果，訊息與表情符號固定對應
    pub fn labeled(sentiment: Sentiment, confidence: f64, metadata: AnalysisMetadata) -> Self {
        Self {
            sentiment,
            confidence,
            message: sentiment.message().to_string(),
            emoji: sentiment.emoji().to_string(),
            metadata,
        }
    }
}

/// 評分器的輸出加上產生它的方法名稱
#[derive(Debug, Clone, PartialEq)]
pub struct Scored {
    pub result: AnalysisResult,
    pub method: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scores {
    pub confidence: f64,
    pub confidence_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMetadata {
    pub text_length: usize,
    pub word_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positive_words: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_words: Option<usize>,
    pub timestamp: String,
    pub api_version: String,
    pub method: String,
    pub platform: String,
}

/// 回傳給客戶端的完整分析結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub message: String,
    pub emoji: String,
    pub scores: Scores,
    pub metadata: ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub evaluator_available: bool,
    pub platform: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

impl ErrorEnvelope {
    /// 所有錯誤回應都從這裡產生
    pub fn from_error(err: &ServiceError, timestamp: String) -> Self {
        let status = err.status_code();
        if status >= 500 {
            Self {
                error: "Internal server error".to_string(),
                message: Some(err.to_string()),
                timestamp: Some(timestamp),
                status_code: None,
            }
        } else {
            Self {
                error: err.to_string(),
                message: None,
                timestamp: Some(timestamp),
                status_code: Some(status),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Result<AnalysisRequest, ServiceError> {
        AnalysisRequest::from_body(Some(body.as_bytes()))
    }

    #[test]
    fn test_request_validation_order() {
        assert!(matches!(
            AnalysisRequest::from_body(None),
            Err(ServiceError::NoDataProvided)
        ));
        assert!(matches!(parse(""), Err(ServiceError::NoDataProvided)));
        assert!(matches!(parse("not-json"), Err(ServiceError::InvalidJson)));
        assert!(matches!(parse("[1, 2]"), Err(ServiceError::InvalidJson)));
        assert!(matches!(parse("{}"), Err(ServiceError::MissingTextField)));
        assert!(matches!(parse(r#"{"text": 42}"#), Err(ServiceError::InvalidText)));
        assert!(matches!(parse(r#"{"text": "   "}"#), Err(ServiceError::InvalidText)));
        assert!(matches!(
            parse(r#"{"text": "\u001c\u001f "}"#),
            Err(ServiceError::InvalidText)
        ));
        let invalid_utf8: &[u8] = &[0xff, 0xfe, 0x00];
        assert!(matches!(
            AnalysisRequest::from_body(Some(invalid_utf8)),
            Err(ServiceError::InvalidJson)
        ));
    }

    #[test]
    fn test_request_keeps_text_untrimmed() {
        let request = parse(r#"{"text": "  good day "}"#).unwrap();
        assert_eq!(request.text, "  good day ");
    }

    #[test]
    fn test_sentiment_labels() {
        assert_eq!(Sentiment::from_label("POSITIVE"), Some(Sentiment::Positive));
        assert_eq!(Sentiment::from_label(" neutral "), Some(Sentiment::Neutral));
        assert_eq!(Sentiment::from_label("mixed"), None);
        assert_eq!(
            serde_json::to_value(Sentiment::Negative).unwrap(),
            serde_json::json!("negative")
        );
    }

    #[test]
    fn test_error_envelope_shapes() {
        let bad = ErrorEnvelope::from_error(&ServiceError::InvalidJson, "t".to_string());
        let value = serde_json::to_value(&bad).unwrap();
        assert_eq!(value["error"], "Invalid JSON format");
        assert_eq!(value["statusCode"], 400);
        assert!(value.get("message").is_none());

        let internal = ErrorEnvelope::from_error(&ServiceError::internal("boom"), "t".to_string());
        let value = serde_json::to_value(&internal).unwrap();
        assert_eq!(value["error"], "Internal server error");
        assert_eq!(value["message"], "boom");
        assert!(value.get("statusCode").is_none());
    }
}
