use crate::config::ServiceConfig;
use crate::domain::ports::ScorerKind;
use crate::utils::error::{Result, ServiceError};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub scorer: ScorerSection,
    #[serde(default)]
    pub service: ServiceSection,
    #[serde(default)]
    pub lexicon: LexiconSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub max_body_bytes: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScorerSection {
    pub kind: Option<ScorerKind>,
    pub evaluator_endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceSection {
    pub api_version: Option<String>,
    pub platform: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexiconSection {
    #[serde(default)]
    pub extra_positive: Vec<String>,
    #[serde(default)]
    pub extra_negative: Vec<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ServiceError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${EVALUATOR_URL})，找不到的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ServiceError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 未指定的欄位使用預設值
    pub fn into_service_config(self) -> ServiceConfig {
        let defaults = ServiceConfig::default();
        ServiceConfig {
            host: self.server.host.unwrap_or(defaults.host),
            port: self.server.port.unwrap_or(defaults.port),
            max_body_bytes: self.server.max_body_bytes.unwrap_or(defaults.max_body_bytes),
            scorer: self.scorer.kind.unwrap_or(defaults.scorer),
            evaluator_endpoint: self.scorer.evaluator_endpoint,
            evaluator_timeout_secs: self
                .scorer
                .timeout_seconds
                .unwrap_or(defaults.evaluator_timeout_secs),
            api_version: self.service.api_version.unwrap_or(defaults.api_version),
            platform: self.service.platform.unwrap_or(defaults.platform),
            extra_positive: self.lexicon.extra_positive,
            extra_negative: self.lexicon.extra_negative,
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.clone().into_service_config().validate()
    }
}
