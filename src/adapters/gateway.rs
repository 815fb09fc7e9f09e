use crate::core::handler::{ApiRequest, ApiResponse};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// API Gateway proxy 事件，同時支援 REST (v1) 與 HTTP API (v2) 格式
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayEvent {
    #[serde(default)]
    pub http_method: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub raw_path: Option<String>,
    #[serde(default)]
    pub request_context: Option<RequestContext>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestContext {
    #[serde(default)]
    pub http: Option<HttpContext>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HttpContext {
    pub method: String,
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

impl GatewayEvent {
    pub fn into_api_request(self) -> ApiRequest {
        let http = self.request_context.and_then(|ctx| ctx.http);

        let method = self
            .http_method
            .or_else(|| http.as_ref().map(|h| h.method.clone()))
            .unwrap_or_default();
        let path = self
            .path
            .or(self.raw_path)
            .or_else(|| http.and_then(|h| h.path))
            .unwrap_or_else(|| "/".to_string());

        if self.is_base64_encoded {
            // 不解碼 base64，內容會在 JSON 驗證階段被拒絕
            tracing::warn!("Received base64-encoded body, passing through undecoded");
        }

        ApiRequest::new(method, path, self.body.map(String::into_bytes))
    }
}

impl From<ApiResponse> for GatewayResponse {
    fn from(response: ApiResponse) -> Self {
        Self {
            status_code: response.status,
            headers: response.headers.into_iter().collect(),
            body: response.body.unwrap_or_default(),
            is_base64_encoded: false,
        }
    }
}
