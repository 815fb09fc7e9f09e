use crate::core::handler::{ApiRequest, ApiResponse, RequestHandler};
use crate::utils::error::{Result, ServiceError};
use axum::{
    body::{Body, Bytes},
    extract::{rejection::BytesRejection, DefaultBodyLimit, State},
    http::{self as http_types, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;

/// 所有路徑都交給 RequestHandler 判斷，包含 404 與 CORS 預檢
pub fn router(handler: Arc<RequestHandler>, max_body_bytes: usize) -> Router {
    Router::new()
        .fallback(dispatch)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(handler)
}

async fn dispatch(
    State(handler): State<Arc<RequestHandler>>,
    method: Method,
    uri: Uri,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Response {
    // 讀取失敗 (例如超過大小上限) 也要走同一套錯誤格式與 CORS
    let body = match body {
        Ok(body) if body.is_empty() => None,
        Ok(body) => Some(body.to_vec()),
        Err(rejection) => {
            let err = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                ServiceError::PayloadTooLarge
            } else {
                ServiceError::internal(rejection.body_text())
            };
            return into_response(handler.reject_request(method.as_str(), uri.path(), err));
        }
    };
    let request = ApiRequest::new(method.as_str(), uri.path(), body);
    into_response(handler.handle(request).await)
}

fn into_response(response: ApiResponse) -> Response {
    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut builder = http_types::Response::builder().status(status);
    for (name, value) in &response.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    match builder.body(Body::from(response.body.unwrap_or_default())) {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("Failed to build HTTP response: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn serve(
    host: &str,
    port: u16,
    max_body_bytes: usize,
    handler: RequestHandler,
) -> Result<()> {
    let listener = TcpListener::bind((host, port)).await?;
    serve_on(listener, max_body_bytes, handler).await
}

/// 在已綁定的 listener 上提供服務，收到 Ctrl-C 後結束
pub async fn serve_on(
    listener: TcpListener,
    max_body_bytes: usize,
    handler: RequestHandler,
) -> Result<()> {
    tracing::info!(
        max_body_bytes,
        "🚀 Listening on {}",
        listener.local_addr()?
    );
    axum::serve(listener, router(Arc::new(handler), max_body_bytes))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
