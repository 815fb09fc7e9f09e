use crate::domain::model::Scored;
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 把原始文字轉成情緒分類結果的元件
#[async_trait]
pub trait Scorer: Send + Sync {
    fn name(&self) -> &str;
    async fn score(&self, text: &str) -> Result<Scored>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScorerKind {
    #[default]
    Lexicon,
    Remote,
}

impl FromStr for ScorerKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lexicon" => Ok(ScorerKind::Lexicon),
            "remote" => Ok(ScorerKind::Remote),
            other => Err(format!("unknown scorer kind: {}", other)),
        }
    }
}

impl fmt::Display for ScorerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScorerKind::Lexicon => f.write_str("lexicon"),
            ScorerKind::Remote => f.write_str("remote"),
        }
    }
}

pub trait ConfigProvider: Send + Sync {
    fn scorer_kind(&self) -> ScorerKind;
    fn evaluator_endpoint(&self) -> Option<&str>;
    fn evaluator_timeout_secs(&self) -> u64;
    fn api_version(&self) -> &str;
    fn platform(&self) -> &str;
    fn extra_positive_words(&self) -> &[String] {
        &[]
    }
    fn extra_negative_words(&self) -> &[String] {
        &[]
    }
}
