use anyhow::Result;
use httpmock::prelude::*;
use sentiment_api::domain::ports::ScorerKind;
use sentiment_api::{ApiRequest, AppState, RequestHandler, ServiceConfig};
use serde_json::{json, Value};

fn remote_config(endpoint: String) -> ServiceConfig {
    ServiceConfig {
        scorer: ScorerKind::Remote,
        evaluator_endpoint: Some(endpoint),
        evaluator_timeout_secs: 2,
        platform: "Evaluator Test".to_string(),
        ..ServiceConfig::default()
    }
}

fn analyze(text: &str) -> ApiRequest {
    let body = json!({ "text": text }).to_string().into_bytes();
    ApiRequest::new("POST", "/api/analyze", Some(body))
}

fn body_json(body: Option<String>) -> Value {
    serde_json::from_str(&body.unwrap_or_default()).unwrap()
}

#[tokio::test]
async fn test_remote_evaluator_used_when_probe_succeeds() -> Result<()> {
    let server = MockServer::start_async().await;
    let evaluator_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/evaluate");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({
                    "sentiment": "Positive",
                    "confidence": 0.91,
                    "analysis_method": "EnsembleModel"
                }));
        })
        .await;

    let state = AppState::from_config(&remote_config(server.url("/evaluate"))).await?;
    assert!(state.evaluator_available());

    let handler = RequestHandler::new(state);
    let response = handler.handle(analyze("the sky is blue today")).await;
    assert_eq!(response.status, 200);

    let body = body_json(response.body);
    assert_eq!(body["sentiment"], "positive");
    assert_eq!(body["confidence"], 0.91);
    assert_eq!(body["scores"]["confidencePercentage"], 91.0);
    assert_eq!(body["metadata"]["method"], "EnsembleModel");
    assert_eq!(body["metadata"]["wordCount"], 5);
    assert!(body["metadata"].get("positiveWords").is_none());

    let health = handler
        .handle(ApiRequest::new("GET", "/health", None))
        .await;
    assert_eq!(body_json(health.body)["evaluatorAvailable"], true);

    // 一次啟動探測加一次實際分析
    evaluator_mock.assert_hits_async(2).await;
    Ok(())
}

#[tokio::test]
async fn test_falls_back_when_evaluator_unhealthy() -> Result<()> {
    let server = MockServer::start_async().await;
    let evaluator_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/evaluate");
            then.status(503);
        })
        .await;

    let state = AppState::from_config(&remote_config(server.url("/evaluate"))).await?;
    assert!(!state.evaluator_available());

    let response = RequestHandler::new(state)
        .handle(analyze("great food and nice staff"))
        .await;
    let body = body_json(response.body);
    assert_eq!(body["sentiment"], "positive");
    assert_eq!(body["metadata"]["method"], "SimpleFallback");
    assert_eq!(body["metadata"]["positiveWords"], 2);

    evaluator_mock.assert_hits_async(1).await;
    Ok(())
}

#[tokio::test]
async fn test_falls_back_when_evaluator_unreachable() -> Result<()> {
    let state =
        AppState::from_config(&remote_config("http://127.0.0.1:1/evaluate".to_string())).await?;
    assert!(!state.evaluator_available());
    Ok(())
}

#[tokio::test]
async fn test_bad_evaluator_reply_is_internal_error() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/evaluate")
                .json_body(json!({ "text": "good" }));
            then.status(200)
                .json_body(json!({ "sentiment": "neutral", "confidence": 0.5 }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/evaluate")
                .json_body(json!({ "text": "something odd" }));
            then.status(200)
                .json_body(json!({ "sentiment": "ecstatic", "confidence": 0.9 }));
        })
        .await;

    let state = AppState::from_config(&remote_config(server.url("/evaluate"))).await?;
    assert!(state.evaluator_available());

    let response = RequestHandler::new(state)
        .handle(analyze("something odd"))
        .await;
    assert_eq!(response.status, 500);

    let body = body_json(response.body);
    assert_eq!(body["error"], "Internal server error");
    assert!(body["message"].as_str().unwrap().contains("ecstatic"));
    assert!(body["timestamp"].is_string());
    Ok(())
}

#[tokio::test]
async fn test_conflicting_lexicon_extension_fails_startup() {
    let config = ServiceConfig {
        extra_positive: vec!["terrible".to_string()],
        ..ServiceConfig::default()
    };
    assert!(AppState::from_config(&config).await.is_err());
}
