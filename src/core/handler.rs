use crate::core::scorer::timestamp_now;
use crate::core::state::AppState;
use crate::domain::model::{AnalysisRequest, AnalysisResponse, ErrorEnvelope, HealthReport};
use crate::utils::error::{ErrorCategory, Result, ServiceError};
use serde::Serialize;

pub const ANALYZE_PATHS: [&str; 2] = ["/analyze", "/api/analyze"];
pub const HEALTH_PATHS: [&str; 2] = ["/health", "/api/health"];

pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "GET, POST, OPTIONS"),
    ("Access-Control-Allow-Headers", "Content-Type, Authorization"),
];

const FALLBACK_ERROR_BODY: &str = r#"{"error":"Internal server error"}"#;

/// 與傳輸層無關的請求
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: String,
    pub path: String,
    pub body: Option<Vec<u8>>,
}

impl ApiRequest {
    pub fn new(method: impl Into<String>, path: impl Into<String>, body: Option<Vec<u8>>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            body,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl ApiResponse {
    fn with_cors(status: u16) -> Self {
        Self {
            status,
            headers: CORS_HEADERS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            body: None,
        }
    }

    fn json(status: u16, body: String) -> Self {
        let mut response = Self::with_cors(status);
        response
            .headers
            .push(("Content-Type".to_string(), "application/json".to_string()));
        response.body = Some(body);
        response
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    Preflight,
    Health,
    Analyze,
    Unknown,
}

fn route(method: &str, path: &str) -> Route {
    if method.eq_ignore_ascii_case("OPTIONS") {
        return Route::Preflight;
    }
    if method.eq_ignore_ascii_case("GET") && HEALTH_PATHS.contains(&path) {
        return Route::Health;
    }
    if method.eq_ignore_ascii_case("POST") && ANALYZE_PATHS.contains(&path) {
        return Route::Analyze;
    }
    Route::Unknown
}

/// 每個請求只會寫出一個回應：完整的成功內容或完整的錯誤內容
#[derive(Debug, Clone)]
pub struct RequestHandler {
    state: AppState,
}

impl RequestHandler {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub async fn handle(&self, request: ApiRequest) -> ApiResponse {
        let path = request.path.split('?').next().unwrap_or_default();

        let response = match route(&request.method, path) {
            Route::Preflight => ApiResponse::with_cors(200),
            Route::Health => self.respond(self.health()),
            Route::Analyze => match self.analyze(request.body.as_deref()).await {
                Ok(analysis) => self.respond(Ok(analysis)),
                Err(e) => self.reject(e),
            },
            Route::Unknown => self.reject(ServiceError::NotFound),
        };

        tracing::info!(
            method = %request.method,
            path = %path,
            status = response.status,
            "Request handled"
        );
        response
    }

    /// 請求在進入路由前就失敗時使用，例如本文超過大小上限
    pub fn reject_request(&self, method: &str, path: &str, err: ServiceError) -> ApiResponse {
        let response = self.reject(err);
        tracing::info!(
            method = %method,
            path = %path,
            status = response.status,
            "Request rejected before routing"
        );
        response
    }

    async fn analyze(&self, body: Option<&[u8]>) -> Result<AnalysisResponse> {
        let request = AnalysisRequest::from_body(body)?;
        let scored = self.state.scorer().score(&request.text).await?;
        Ok(self.state.builder().build(scored))
    }

    fn health(&self) -> Result<HealthReport> {
        let builder = self.state.builder();
        Ok(HealthReport {
            status: "healthy".to_string(),
            timestamp: timestamp_now(),
            version: builder.api_version().to_string(),
            evaluator_available: self.state.evaluator_available(),
            platform: builder.platform().to_string(),
        })
    }

    fn respond<T: Serialize>(&self, payload: Result<T>) -> ApiResponse {
        let body = payload.and_then(|p| serde_json::to_string(&p).map_err(ServiceError::from));
        match body {
            Ok(body) => ApiResponse::json(200, body),
            Err(e) => self.reject(e),
        }
    }

    fn reject(&self, err: ServiceError) -> ApiResponse {
        match err.category() {
            ErrorCategory::ClientInput => tracing::warn!("Rejected request: {}", err),
            ErrorCategory::NotFound => tracing::debug!("No route matched"),
            _ => tracing::error!("❌ Internal failure while handling request: {}", err),
        }

        let status = err.status_code();
        let envelope = ErrorEnvelope::from_error(&err, timestamp_now());
        let body = serde_json::to_string(&envelope)
            .unwrap_or_else(|_| FALLBACK_ERROR_BODY.to_string());
        ApiResponse::json(status, body)
    }
}
