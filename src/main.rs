use anyhow::Context;
use clap::Parser;
use sentiment_api::adapters::http;
use sentiment_api::utils::logger::{self, LogFormat};
use sentiment_api::utils::validation::Validate;
use sentiment_api::{AppState, CliConfig, RequestHandler};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(format, cli.verbose);

    tracing::info!("Starting sentiment-api");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let state = AppState::from_config(&config)
        .await
        .context("failed to initialise scorer")?;
    logger::log_startup(
        &format!("{}:{}", config.host, config.port),
        &config.platform,
        state.scorer().name(),
        state.evaluator_available(),
    );

    http::serve(
        &config.host,
        config.port,
        config.max_body_bytes,
        RequestHandler::new(state),
    )
    .await
    .with_context(|| format!("server on {}:{} failed", config.host, config.port))?;

    Ok(())
}
