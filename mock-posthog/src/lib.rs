//! In-process PostHog test double
//!
//! Serves a `/capture` endpoint that records every request body and answers
//! with a configurable canned reply, so client tests can exercise real HTTP
//! without a PostHog instance.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// Canned reply returned by `/capture`
#[derive(Clone, Debug)]
pub enum CaptureReply {
    /// Fixed status and body
    Static { status: StatusCode, body: Value },
    /// 200 with `{"status": 1, "event": <event from the request body>}`,
    /// for tests that need per-call distinguishable responses
    EchoEvent,
}

impl CaptureReply {
    /// 200 with the given body
    pub fn ok(body: Value) -> Self {
        CaptureReply::Static {
            status: StatusCode::OK,
            body,
        }
    }

    /// Failure reply with the given status code and body
    pub fn error(status: u16, body: Value) -> Self {
        CaptureReply::Static {
            status: StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body,
        }
    }
}

impl Default for CaptureReply {
    fn default() -> Self {
        Self::ok(json!({ "status": 1 }))
    }
}

#[derive(Clone)]
struct AppState {
    reply: CaptureReply,
    received: Arc<Mutex<Vec<Value>>>,
}

/// Build the router serving `/capture`
pub fn app(reply: CaptureReply, received: Arc<Mutex<Vec<Value>>>) -> Router {
    Router::new()
        .route("/capture", post(capture))
        .with_state(AppState { reply, received })
}

async fn capture(State(state): State<AppState>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    state.received.lock().await.push(body.clone());
    match &state.reply {
        CaptureReply::Static { status, body } => (*status, Json(body.clone())),
        CaptureReply::EchoEvent => (
            StatusCode::OK,
            Json(json!({ "status": 1, "event": body["event"].clone() })),
        ),
    }
}

/// A mock server bound to an ephemeral local port
pub struct MockPostHog {
    addr: SocketAddr,
    received: Arc<Mutex<Vec<Value>>>,
}

impl MockPostHog {
    /// Bind and serve in a background task
    pub async fn start(reply: CaptureReply) -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let received = Arc::new(Mutex::new(Vec::new()));
        let router = app(reply, received.clone());
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });
        Ok(Self { addr, received })
    }

    /// Base URL for client credentials
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Request bodies received so far, in arrival order
    pub async fn received_bodies(&self) -> Vec<Value> {
        self.received.lock().await.clone()
    }
}
