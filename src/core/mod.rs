pub mod handler;
pub mod lexicon;
pub mod response;
pub mod scorer;
pub mod state;

pub use crate::domain::model::{AnalysisResult, Scored, Sentiment};
pub use crate::domain::ports::{ConfigProvider, Scorer, ScorerKind};
pub use crate::utils::error::Result;
