use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日誌輸出格式：本機終端機用精簡文字，Lambda 用 JSON 讓 CloudWatch 能解析欄位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

/// RUST_LOG 未設定時使用的過濾規則
pub fn default_directives(format: LogFormat, verbose: bool) -> String {
    let own = if verbose { "sentiment_api=debug" } else { "sentiment_api=info" };
    match format {
        LogFormat::Compact => format!("{},warn", own),
        LogFormat::Json => format!("{},lambda_runtime=info,warn", own),
    }
}

fn build_filter(format: LogFormat, verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(format, verbose)))
}

pub fn init_logger(format: LogFormat, verbose: bool) {
    let filter = build_filter(format, verbose);
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(verbose)
                    .compact(),
            )
            .init(),
        // Lambda 會自行加上時間，欄位攤平到最上層方便查詢
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(false)
                    .with_target(false)
                    .without_time(),
            )
            .init(),
    }
}

/// 服務就緒時記錄一次所選用的評分器
pub fn log_startup(host: &str, platform: &str, scorer: &str, evaluator_available: bool) {
    tracing::info!(
        host,
        platform,
        scorer,
        evaluator_available,
        "🧠 Sentiment service ready"
    );
    if !evaluator_available {
        tracing::debug!("Remote evaluator unavailable, lexicon scoring only");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert_eq!(
            default_directives(LogFormat::Compact, false),
            "sentiment_api=info,warn"
        );
        assert_eq!(
            default_directives(LogFormat::Compact, true),
            "sentiment_api=debug,warn"
        );
        assert!(default_directives(LogFormat::Json, false).contains("lambda_runtime=info"));
    }

    #[test]
    fn test_directives_parse_as_filters() {
        for format in [LogFormat::Compact, LogFormat::Json] {
            for verbose in [false, true] {
                assert!(EnvFilter::try_new(default_directives(format, verbose)).is_ok());
            }
        }
    }
}
