#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use sentiment_api::adapters::gateway::{GatewayEvent, GatewayResponse};
#[cfg(feature = "lambda")]
use sentiment_api::utils::logger::{self, LogFormat};
#[cfg(feature = "lambda")]
use sentiment_api::utils::validation::Validate;
#[cfg(feature = "lambda")]
use sentiment_api::{AppState, LambdaConfig, RequestHandler};

#[cfg(feature = "lambda")]
async fn function_handler(
    handler: &RequestHandler,
    event: LambdaEvent<GatewayEvent>,
) -> Result<GatewayResponse, Error> {
    let request = event.payload.into_api_request();
    let response = handler.handle(request).await;
    Ok(response.into())
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_logger(LogFormat::Json, false);

    // 冷啟動時建立一次，之後的每次呼叫共用
    let config = LambdaConfig::from_env()?;
    config.validate()?;
    let state = AppState::from_config(&config).await?;
    logger::log_startup(
        "lambda",
        &config.platform,
        state.scorer().name(),
        state.evaluator_available(),
    );

    let handler = RequestHandler::new(state);
    let handler = &handler;
    run(service_fn(move |event: LambdaEvent<GatewayEvent>| async move {
        function_handler(handler, event).await
    }))
    .await
}
