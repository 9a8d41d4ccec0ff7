#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use exoplanet_explorer::error::{ExplorerError, ExplorerResult};
use exoplanet_explorer::services::proxy::{PredictionBackend, UpstreamResponse};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// Restores the previous values on unwind and serializes access to the
/// process environment across parallel tests.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// In-process stand-in for the ML backend.
///
/// Records every call and answers with a canned response, or fails like an
/// unreachable host when built with [`StubBackend::unreachable`].
pub struct StubBackend {
    response: Option<UpstreamResponse>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl StubBackend {
    pub fn answering(status: u16, body: Value) -> Arc<Self> {
        Arc::new(Self {
            response: Some(UpstreamResponse {
                status,
                body: Some(body),
            }),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn unreachable() -> Arc<Self> {
        Arc::new(Self {
            response: None,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PredictionBackend for StubBackend {
    async fn post_json(&self, path: &str, body: &Value) -> ExplorerResult<UpstreamResponse> {
        self.calls
            .lock()
            .unwrap()
            .push((path.to_string(), body.clone()));
        self.response
            .clone()
            .ok_or_else(|| ExplorerError::Upstream("connection refused".to_string()))
    }
}
