//! Fact Client: the single point of entry for all cat-fact API calls.
//!
//! No other module talks to the upstream directly. One GET per call, bounded
//! by the configured timeout; the in-flight request is aborted when the
//! timeout elapses. No retries: callers decide fallback behavior.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum FactError {
    #[error("upstream request timed out")]
    Timeout,

    #[error("upstream returned status {status}")]
    Upstream { status: u16 },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct FactBody {
    fact: String,
}

/// Thin wrapper over a shared `reqwest::Client`, pointed at the configured
/// fact endpoint.
#[derive(Clone)]
pub struct FactClient {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl FactClient {
    pub fn new(endpoint: String, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            timeout,
        }
    }

    /// Performs one GET against the fact API and extracts the `fact` field.
    ///
    /// Error mapping: elapsed timeout becomes `Timeout`, connection-level
    /// failures become `Transport`, non-2xx statuses become `Upstream`, and
    /// a 2xx body without a usable `fact` field becomes `Parse`.
    pub async fn fetch_fact(&self) -> Result<String, FactError> {
        let response = self
            .client
            .get(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .timeout(self.timeout)
            .send()
            .await
            .map_err(classify_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FactError::Upstream {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(classify_transport)?;
        let parsed: FactBody = serde_json::from_str(&body)?;

        debug!("fact fetched ({} bytes)", parsed.fact.len());
        Ok(parsed.fact)
    }
}

fn classify_transport(e: reqwest::Error) -> FactError {
    if e.is_timeout() {
        FactError::Timeout
    } else {
        FactError::Transport(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;

    use axum::http::StatusCode;
    use axum::{routing::get, Json, Router};
    use serde_json::json;

    async fn spawn_upstream(router: Router) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        addr
    }

    fn client_for(addr: SocketAddr, timeout_ms: u64) -> FactClient {
        FactClient::new(
            format!("http://{addr}/fact"),
            Duration::from_millis(timeout_ms),
        )
    }

    #[tokio::test]
    async fn fetch_fact_returns_fact_on_success() {
        let upstream = Router::new().route(
            "/fact",
            get(|| async { Json(json!({"fact": "Cats sleep 16 hours a day.", "length": 26})) }),
        );
        let addr = spawn_upstream(upstream).await;

        let fact = client_for(addr, 1000).fetch_fact().await.unwrap();
        assert_eq!(fact, "Cats sleep 16 hours a day.");
    }

    #[tokio::test]
    async fn fetch_fact_maps_non_2xx_to_upstream_error() {
        let upstream = Router::new().route(
            "/fact",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let addr = spawn_upstream(upstream).await;

        let err = client_for(addr, 1000).fetch_fact().await.unwrap_err();
        match err {
            FactError::Upstream { status } => assert_eq!(status, 500),
            other => panic!("expected Upstream, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn fetch_fact_times_out_when_upstream_stalls() {
        let upstream = Router::new().route(
            "/fact",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({"fact": "too late"}))
            }),
        );
        let addr = spawn_upstream(upstream).await;

        let err = client_for(addr, 100).fetch_fact().await.unwrap_err();
        assert!(matches!(err, FactError::Timeout), "got {err:?}");
    }

    #[tokio::test]
    async fn fetch_fact_rejects_body_without_fact_field() {
        let upstream = Router::new().route(
            "/fact",
            get(|| async { Json(json!({"joke": "not a fact"})) }),
        );
        let addr = spawn_upstream(upstream).await;

        let err = client_for(addr, 1000).fetch_fact().await.unwrap_err();
        assert!(matches!(err, FactError::Parse(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn fetch_fact_maps_connection_refused_to_transport() {
        // Bind then drop the listener so the port is (almost certainly) closed.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client_for(addr, 1000).fetch_fact().await.unwrap_err();
        assert!(matches!(err, FactError::Transport(_)), "got {err:?}");
    }
}
