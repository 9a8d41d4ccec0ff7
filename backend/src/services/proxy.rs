//! Passthrough to the external ML backend.
//!
//! The frontend never talks to the Python service directly. These calls
//! forward JSON to it and relay the answer, reshaping only where the browser
//! payload differs from what the backend expects. There are no retries; a
//! transport failure becomes a 500 with a user-facing message.

use async_trait::async_trait;
use serde_json::{json, Map, Value};
use std::sync::Arc;

use crate::error::ExplorerResult;

pub const TABULAR_PREDICT_PATH: &str = "/v1/tabular/predict";
pub const CHAT_ASK_PATH: &str = "/v1/chat/ask";
pub const LIGHTCURVE_ANALYZE_PATH: &str = "/v1/lightcurve/analyze";

pub const DEFAULT_MISSION: &str = "KEPLER";
pub const DEFAULT_OBJECT_ID: &str = "UI-CLIENT";

const PROXY_FAILURE: &str = "Failed to proxy request";
const CHAT_UNREACHABLE: &str = "Unable to reach AI assistant. Please try again.";
const CHAT_FAILED: &str = "Failed to process chat request";
const CHAT_REQUIRED_FIELDS: [&str; 3] = ["session_id", "message", "context"];

/// Raw answer from the ML backend.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamResponse {
    pub status: u16,
    /// `None` when the body was not valid JSON
    pub body: Option<Value>,
}

impl UpstreamResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// What the proxy hands back to the browser.
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyResponse {
    pub status: u16,
    pub body: Value,
}

impl ProxyResponse {
    fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: json!({ "error": message }),
        }
    }
}

/// Transport to the ML backend.
#[async_trait]
pub trait PredictionBackend: Send + Sync {
    /// POST `body` as JSON to `path` (relative to the backend base URL).
    async fn post_json(&self, path: &str, body: &Value) -> ExplorerResult<UpstreamResponse>;
}

/// reqwest-backed transport.
#[cfg(feature = "http-server")]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

#[cfg(feature = "http-server")]
impl HttpBackend {
    pub fn new(base_url: &str, timeout: std::time::Duration) -> ExplorerResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                crate::error::ExplorerError::Configuration(format!(
                    "Failed to build HTTP client: {}",
                    e
                ))
            })?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(feature = "http-server")]
#[async_trait]
impl PredictionBackend for HttpBackend {
    async fn post_json(&self, path: &str, body: &Value) -> ExplorerResult<UpstreamResponse> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| crate::error::ExplorerError::Upstream(format!("POST {}: {}", url, e)))?;

        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| crate::error::ExplorerError::Upstream(format!("POST {}: {}", url, e)))?;
        Ok(UpstreamResponse {
            status,
            body: serde_json::from_slice(&bytes).ok(),
        })
    }
}

/// JavaScript-style truthiness, used for the chat required-field check.
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().map_or(false, |f| f != 0.0 && !f.is_nan()),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

fn non_null(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

/// Reshape a browser payload into the backend's tabular request.
///
/// Accepts `{features, mission, object_id}` or bare top-level features.
pub fn build_tabular_payload(incoming: &Value) -> Value {
    let features = non_null(incoming.get("features")).unwrap_or(incoming).clone();
    let mission = non_null(incoming.get("mission"))
        .cloned()
        .unwrap_or_else(|| Value::String(DEFAULT_MISSION.to_string()));
    let object_id = non_null(incoming.get("object_id"))
        .cloned()
        .unwrap_or_else(|| Value::String(DEFAULT_OBJECT_ID.to_string()));

    let mut payload = Map::new();
    payload.insert("mission".to_string(), mission);
    payload.insert("object_id".to_string(), object_id);
    payload.insert("features".to_string(), features);
    Value::Object(payload)
}

/// Names of required chat fields that are missing or empty.
pub fn missing_chat_fields(body: &Value) -> Vec<&'static str> {
    CHAT_REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| !is_truthy(body.get(*field)))
        .collect()
}

/// Endpoint semantics on top of a [`PredictionBackend`].
#[derive(Clone)]
pub struct BackendProxy {
    backend: Arc<dyn PredictionBackend>,
}

impl BackendProxy {
    pub fn new(backend: Arc<dyn PredictionBackend>) -> Self {
        Self { backend }
    }

    /// Forward a tabular feature vector for classification.
    pub async fn tabular_predict(&self, incoming: &Value) -> ProxyResponse {
        let payload = build_tabular_payload(incoming);
        self.relay(TABULAR_PREDICT_PATH, &payload).await
    }

    /// Forward a light-curve analysis request verbatim.
    pub async fn lightcurve_analyze(&self, body: &Value) -> ProxyResponse {
        self.relay(LIGHTCURVE_ANALYZE_PATH, body).await
    }

    /// Forward a chat message to the assistant.
    pub async fn chat_ask(&self, body: &Value) -> ProxyResponse {
        if !missing_chat_fields(body).is_empty() {
            return ProxyResponse::error(
                400,
                "Missing required fields: session_id, message, context",
            );
        }

        let upstream = match self.backend.post_json(CHAT_ASK_PATH, body).await {
            Ok(upstream) => upstream,
            Err(e) => {
                log::error!("Chat API error: {}", e);
                return ProxyResponse::error(500, CHAT_UNREACHABLE);
            }
        };

        if !upstream.is_success() {
            let detail = upstream
                .body
                .as_ref()
                .and_then(|b| b.get("detail"))
                .filter(|d| is_truthy(Some(*d)))
                .cloned()
                .unwrap_or_else(|| Value::String(CHAT_FAILED.to_string()));
            return ProxyResponse {
                status: upstream.status,
                body: json!({ "error": detail, "status": upstream.status }),
            };
        }

        match upstream.body {
            Some(body) => ProxyResponse {
                status: 200,
                body,
            },
            None => {
                log::error!("Chat API error: backend returned a non-JSON body");
                ProxyResponse::error(500, CHAT_UNREACHABLE)
            }
        }
    }

    async fn relay(&self, path: &str, payload: &Value) -> ProxyResponse {
        match self.backend.post_json(path, payload).await {
            Ok(UpstreamResponse {
                status,
                body: Some(body),
            }) => ProxyResponse { status, body },
            Ok(UpstreamResponse { status, body: None }) => {
                log::error!("Proxy {} error: non-JSON body with status {}", path, status);
                ProxyResponse::error(500, PROXY_FAILURE)
            }
            Err(e) => {
                log::error!("Proxy {} error: {}", path, e);
                ProxyResponse::error(500, PROXY_FAILURE)
            }
        }
    }
}

#[cfg(test)]
#[path = "proxy_tests.rs"]
mod tests;
