#[cfg(feature = "cli")]
pub mod cli;
pub mod lambda;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use lambda::LambdaConfig;
pub use toml_config::TomlConfig;

use crate::core::response::{DEFAULT_API_VERSION, DEFAULT_PLATFORM};
use crate::domain::ports::{ConfigProvider, ScorerKind};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_lexicon_words, validate_non_empty_string, validate_range, validate_required_field,
    validate_url, Validate,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_EVALUATOR_TIMEOUT_SECS: u64 = 5;
/// 與 axum 預設的本文上限相同
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// 合併 TOML 與命令列後的最終服務設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub max_body_bytes: usize,
    pub scorer: ScorerKind,
    pub evaluator_endpoint: Option<String>,
    pub evaluator_timeout_secs: u64,
    pub api_version: String,
    pub platform: String,
    pub extra_positive: Vec<String>,
    pub extra_negative: Vec<String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            scorer: ScorerKind::Lexicon,
            evaluator_endpoint: None,
            evaluator_timeout_secs: DEFAULT_EVALUATOR_TIMEOUT_SECS,
            api_version: DEFAULT_API_VERSION.to_string(),
            platform: DEFAULT_PLATFORM.to_string(),
            extra_positive: Vec::new(),
            extra_negative: Vec::new(),
        }
    }
}

impl ConfigProvider for ServiceConfig {
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

    fn extra_positive_words(&self) -> &[String] {
        &self.extra_positive
    }

    fn extra_negative_words(&self) -> &[String] {
        &self.extra_negative
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("host", &self.host)?;
        validate_range("port", self.port, 1, u16::MAX)?;
        validate_range("max_body_bytes", self.max_body_bytes, 1, 64 * 1024 * 1024)?;
        validate_provider(self)?;

        tracing::info!("✅ Service configuration validation passed");
        Ok(())
    }
}

/// 各種設定來源共用的檢查
pub fn validate_provider<C: ConfigProvider>(config: &C) -> Result<()> {
    if config.scorer_kind() == ScorerKind::Remote {
        let endpoint = config.evaluator_endpoint().map(str::to_string);
        let endpoint = validate_required_field("evaluator_endpoint", &endpoint)?;
        validate_url("evaluator_endpoint", endpoint)?;
    }

    validate_range("evaluator_timeout_secs", config.evaluator_timeout_secs(), 1, 60)?;
    validate_non_empty_string("api_version", config.api_version())?;
    validate_non_empty_string("platform", config.platform())?;
    validate_lexicon_words("lexicon.extra_positive", config.extra_positive_words())?;
    validate_lexicon_words("lexicon.extra_negative", config.extra_negative_words())?;
    Ok(())
}
