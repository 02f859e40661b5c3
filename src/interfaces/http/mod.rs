//! HTTP surface: the frame mint endpoint and a health probe.

pub mod frame;

use crate::application::handler::DropHandler;
use crate::domain::frame::FrameRequest;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::Html;
use axum::routing::{get, post};
use axum::Router;
use frame::FrameRenderer;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::warn;

pub const MINT_PATH: &str = "/api/frame/mint";

#[derive(Clone)]
pub struct AppState {
    handler: Arc<DropHandler>,
    renderer: Arc<FrameRenderer>,
}

impl AppState {
    pub fn new(handler: DropHandler, renderer: FrameRenderer) -> Self {
        Self {
            handler: Arc::new(handler),
            renderer: Arc::new(renderer),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(MINT_PATH, post(mint))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Always answers 200; the outcome is carried by the rendered frame.
async fn mint(State(state): State<AppState>, body: Bytes) -> Html<String> {
    let request = serde_json::from_slice::<FrameRequest>(&body).unwrap_or_else(|e| {
        warn!(error = %e, "unreadable frame body");
        FrameRequest::default()
    });

    let outcome = state.handler.handle(request).await;
    Html(state.renderer.render(outcome))
}

async fn healthz() -> &'static str {
    "ok"
}
