use crate::utils::error::{Result, ServiceError};
use std::collections::HashSet;

const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "amazing",
    "wonderful",
    "fantastic",
    "awesome",
    "love",
    "like",
    "enjoy",
    "happy",
    "pleased",
    "satisfied",
    "delighted",
    "perfect",
    "outstanding",
    "superb",
    "brilliant",
    "magnificent",
    "terrific",
    "best",
    "favorite",
    "recommend",
    "impressed",
    "beautiful",
    "nice",
    "positive",
    "fresh",
    "delicious",
    "tasty",
    "quality",
    "fast",
    "helpful",
    "incredible",
    "extraordinary",
    "remarkable",
    "spectacular",
    "marvelous",
    "phenomenal",
    "splendid",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "horrible",
    "disgusting",
    "hate",
    "dislike",
    "disappointed",
    "unsatisfied",
    "unhappy",
    "angry",
    "frustrated",
    "annoyed",
    "worst",
    "poor",
    "cheap",
    "broken",
    "defective",
    "useless",
    "waste",
    "negative",
    "slow",
    "expensive",
    "rude",
    "dirty",
    "stale",
    "bland",
    "bitter",
    "sour",
    "wrong",
    "failed",
    "problem",
    "issue",
    "complaint",
    "disaster",
    "dreadful",
    "appalling",
    "atrocious",
    "deplorable",
    "detestable",
    "ghastly",
    "hideous",
    "loathsome",
    "miserable",
    "nasty",
    "revolting",
];

/// 正負面詞庫。建立後唯讀，可在多個請求間共用
#[derive(Debug, Clone)]
pub struct Lexicon {
    positive: HashSet<String>,
    negative: HashSet<String>,
}

impl Lexicon {
    pub fn new<P, N>(positive: P, negative: N) -> Result<Self>
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        let positive: HashSet<String> = positive
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        let negative: HashSet<String> = negative
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();

        let mut overlap: Vec<&String> = positive.intersection(&negative).collect();
        if !overlap.is_empty() {
            overlap.sort();
            return Err(ServiceError::ConfigError {
                message: format!(
                    "Lexicon words cannot be both positive and negative: {}",
                    overlap
                        .iter()
                        .map(|w| w.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            });
        }

        Ok(Self { positive, negative })
    }

    /// 內建詞庫
    pub fn builtin() -> Self {
        Self {
            positive: POSITIVE_WORDS.iter().map(|w| w.to_string()).collect(),
            negative: NEGATIVE_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// 內建詞庫加上設定檔提供的額外單字
    pub fn with_extensions(extra_positive: &[String], extra_negative: &[String]) -> Result<Self> {
        Self::new(
            POSITIVE_WORDS
                .iter()
                .copied()
                .chain(extra_positive.iter().map(String::as_str)),
            NEGATIVE_WORDS
                .iter()
                .copied()
                .chain(extra_negative.iter().map(String::as_str)),
        )
    }

    pub fn is_positive(&self, word: &str) -> bool {
        self.positive.contains(&word.to_lowercase())
    }

    pub fn is_negative(&self, word: &str) -> bool {
        self.negative.contains(&word.to_lowercase())
    }

    pub fn positive_len(&self) -> usize {
        self.positive.len()
    }

    pub fn negative_len(&self) -> usize {
        self.negative.len()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}
