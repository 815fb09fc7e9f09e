pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{LambdaConfig, ServiceConfig, TomlConfig};
pub use core::{
    handler::{ApiRequest, ApiResponse, RequestHandler},
    lexicon::Lexicon,
    response::ResponseBuilder,
    scorer::LexiconScorer,
    state::AppState,
};
pub use utils::error::{Result, ServiceError};
