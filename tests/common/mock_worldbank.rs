//! Mock World Bank API server for integration tests.
//!
//! Serves one canned response per indicator on an ephemeral port. Tests
//! point the client's `base_url` at [`MockWorldBank::base_url`].

#![allow(dead_code)]

use std::net::SocketAddr;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

/// Canned response for one indicator path.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
    pub delay_ms: u64,
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            delay_ms: 0,
        }
    }

    pub fn error(status: u16) -> Self {
        Self {
            status,
            body: r#"{"message":"error"}"#.to_string(),
            delay_ms: 0,
        }
    }

    /// Records wrapped in the API's `[metadata, records]` envelope.
    pub fn records(records: &[(&str, Option<f64>)]) -> Self {
        let items: Vec<serde_json::Value> = records
            .iter()
            .map(|(date, value)| serde_json::json!({ "date": date, "value": value }))
            .collect();
        let body = serde_json::json!([{ "page": 1, "total": items.len() }, items]);
        Self::json(&body.to_string())
    }

    /// Hold the response back for `delay_ms` before answering.
    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}

#[derive(Clone)]
struct MockState {
    urban: MockResponse,
    rural: MockResponse,
}

/// A running mock server.
pub struct MockWorldBank {
    pub addr: SocketAddr,
}

impl MockWorldBank {
    /// Bind an ephemeral port and serve the two canned responses.
    pub async fn start(urban: MockResponse, rural: MockResponse) -> Self {
        let state = MockState { urban, rural };
        let app = Router::new()
            .route("/country/{country}/indicator/{indicator}", get(serve_indicator))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock server");
        let addr = listener.local_addr().expect("mock server address");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { addr }
    }

    /// Base URL in the shape the client's config expects.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

async fn serve_indicator(
    State(state): State<MockState>,
    Path((_country, indicator)): Path<(String, String)>,
) -> Response {
    let canned = if indicator.contains("URB") {
        state.urban.clone()
    } else {
        state.rural.clone()
    };

    if canned.delay_ms > 0 {
        tokio::time::sleep(std::time::Duration::from_millis(canned.delay_ms)).await;
    }

    (
        StatusCode::from_u16(canned.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        [("content-type", "application/json")],
        canned.body,
    )
        .into_response()
}
