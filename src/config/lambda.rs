use crate::config::{validate_provider, DEFAULT_EVALUATOR_TIMEOUT_SECS};
use crate::core::response::DEFAULT_API_VERSION;
use crate::domain::ports::{ConfigProvider, ScorerKind};
use crate::utils::error::{Result, ServiceError};
use crate::utils::validation::Validate;
use std::env;

const LAMBDA_PLATFORM: &str = "AWS Lambda";

#[derive(Debug, Clone, PartialEq)]
pub struct LambdaConfig {
    pub scorer: ScorerKind,
    pub evaluator_endpoint: Option<String>,
    pub evaluator_timeout_secs: u64,
    pub api_version: String,
    pub platform: String,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 透過查詢函式讀取設定，方便測試時不動到行程環境變數
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let scorer = match lookup("SCORER") {
            Some(value) => value
                .parse::<ScorerKind>()
                .map_err(|reason| ServiceError::InvalidConfigValueError {
                    field: "SCORER".to_string(),
                    value: value.clone(),
                    reason,
                })?,
            None => ScorerKind::Lexicon,
        };

        Ok(Self {
            scorer,
            evaluator_endpoint: lookup("EVALUATOR_ENDPOINT"),
            evaluator_timeout_secs: lookup("EVALUATOR_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_EVALUATOR_TIMEOUT_SECS),
            api_version: lookup("API_VERSION").unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            platform: lookup("PLATFORM").unwrap_or_else(|| LAMBDA_PLATFORM.to_string()),
        })
    }
}

impl ConfigProvider for LambdaConfig {
    fn scorer_kind(&self) -> ScorerKind {
        self.scorer
    }

    fn evaluator_endpoint(&self) -> Option<&str> {
        self.evaluator_endpoint.as_deref()
    }

    fn evaluator_timeout_secs(&self) -> u64 {
        self.evaluator_timeout_secs
    }

    fn api_version(&self) -> &str {
        &self.api_version
    }

    fn platform(&self) -> &str {
        &self.platform
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)?;
        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = LambdaConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.scorer, ScorerKind::Lexicon);
        assert_eq!(config.platform, "AWS Lambda");
        assert_eq!(config.evaluator_timeout_secs, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_remote_from_env() {
        let config = LambdaConfig::from_lookup(lookup(&[
            ("SCORER", "remote"),
            ("EVALUATOR_ENDPOINT", "https://eval.example.com/analyze"),
            ("EVALUATOR_TIMEOUT_SECS", "3"),
        ]))
        .unwrap();
        assert_eq!(config.scorer, ScorerKind::Remote);
        assert_eq!(config.evaluator_timeout_secs, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bad_scorer_value() {
        let result = LambdaConfig::from_lookup(lookup(&[("SCORER", "bert")]));
        assert!(matches!(
            result,
            Err(ServiceError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_remote_without_endpoint_fails_validation() {
        let config = LambdaConfig::from_lookup(lookup(&[("SCORER", "remote")])).unwrap();
        assert!(config.validate().is_err());
    }
}
