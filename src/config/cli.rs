use crate::config::{ServiceConfig, TomlConfig};
use crate::domain::ports::ScorerKind;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "sentiment-api")]
#[command(about = "Lexicon-based sentiment analysis HTTP service")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long)]
    pub host: Option<String>,

    #[arg(short, long)]
    pub port: Option<u16>,

    /// Largest accepted request body in bytes
    #[arg(long)]
    pub max_body_bytes: Option<usize>,

    /// Scorer implementation: lexicon or remote
    #[arg(long)]
    pub scorer: Option<ScorerKind>,

    #[arg(long)]
    pub evaluator_endpoint: Option<String>,

    /// Evaluator request timeout in seconds
    #[arg(long)]
    pub evaluator_timeout: Option<u64>,

    #[arg(long)]
    pub platform: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines instead of compact text
    #[arg(long)]
    pub json_logs: bool,
}

impl CliConfig {
    /// 先載入 TOML (若有指定)，再套用命令列覆蓋
    pub fn resolve(&self) -> Result<ServiceConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                TomlConfig::from_file(path)?.into_service_config()
            }
            None => ServiceConfig::default(),
        };

        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(limit) = self.max_body_bytes {
            config.max_body_bytes = limit;
        }
        if let Some(scorer) = self.scorer {
            tracing::info!("🔧 Scorer overridden to: {}", scorer);
            config.scorer = scorer;
        }
        if let Some(endpoint) = &self.evaluator_endpoint {
            config.evaluator_endpoint = Some(endpoint.clone());
        }
        if let Some(timeout) = self.evaluator_timeout {
            config.evaluator_timeout_secs = timeout;
        }
        if let Some(platform) = &self.platform {
            config.platform = platform.clone();
        }

        Ok(config)
    }
}
