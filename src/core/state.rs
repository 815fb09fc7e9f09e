use crate::adapters::evaluator::RemoteEvaluator;
use crate::core::lexicon::Lexicon;
use crate::core::response::ResponseBuilder;
use crate::core::scorer::LexiconScorer;
use crate::domain::ports::{ConfigProvider, Scorer, ScorerKind};
use crate::utils::error::Result;
use crate::utils::validation::validate_required_field;
use std::sync::Arc;
use std::time::Duration;

/// 啟動時建立一次，之後所有請求共用且不再變動
#[derive(Clone)]
pub struct AppState {
    scorer: Arc<dyn Scorer>,
    builder: ResponseBuilder,
    evaluator_available: bool,
}

impl AppState {
    pub fn new(scorer: Arc<dyn Scorer>, builder: ResponseBuilder, evaluator_available: bool) -> Self {
        Self {
            scorer,
            builder,
            evaluator_available,
        }
    }

    /// 只使用內建詞庫評分器
    pub fn baseline(builder: ResponseBuilder) -> Self {
        let scorer = LexiconScorer::new(Arc::new(Lexicon::builtin()));
        Self::new(Arc::new(scorer), builder, false)
    }

    /// 依設定選擇評分器；外部評估器無法使用時退回詞庫評分器
    pub async fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let lexicon = Arc::new(Lexicon::with_extensions(
            config.extra_positive_words(),
            config.extra_negative_words(),
        )?);
        tracing::info!(
            "📚 Lexicon loaded: {} positive, {} negative words",
            lexicon.positive_len(),
            lexicon.negative_len()
        );

        let builder = ResponseBuilder::new(config.api_version(), config.platform());
        let baseline = Arc::new(LexiconScorer::new(lexicon));

        match config.scorer_kind() {
            ScorerKind::Lexicon => Ok(Self::new(baseline, builder, false)),
            ScorerKind::Remote => {
                let endpoint = validate_required_field(
                    "evaluator_endpoint",
                    &config.evaluator_endpoint().map(str::to_string),
                )?
                .clone();
                let timeout = Duration::from_secs(config.evaluator_timeout_secs());
                let evaluator = RemoteEvaluator::new(endpoint, timeout)?;

                match evaluator.probe().await {
                    Ok(()) => {
                        tracing::info!("✅ Evaluator available at {}", evaluator.endpoint());
                        Ok(Self::new(Arc::new(evaluator), builder, true))
                    }
                    Err(e) => {
                        tracing::warn!(
                            "⚠️ Evaluator at {} unavailable ({}), falling back to lexicon scorer",
                            evaluator.endpoint(),
                            e
                        );
                        Ok(Self::new(baseline, builder, false))
                    }
                }
            }
        }
    }

    pub fn scorer(&self) -> &dyn Scorer {
        self.scorer.as_ref()
    }

    pub fn builder(&self) -> &ResponseBuilder {
        &self.builder
    }

    pub fn evaluator_available(&self) -> bool {
        self.evaluator_available
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("scorer", &self.scorer.name())
            .field("builder", &self.builder)
            .field("evaluator_available", &self.evaluator_available)
            .finish()
    }
}
