//! HTTP API definitions.

pub mod chat;
pub mod properties;

use axum::Json;
use serde::Serialize;

pub use self::{chat::chat, properties::properties};

/// Liveness probe of the API.
#[expect(
    clippy::unused_async,
    reason = "`async` is required to match signature"
)]
#[tracing::instrument(skip_all, fields(http.route = "/api/health"))]
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "healthy",
        message: "Property Chatbot API is running",
    })
}

/// Health check response body.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Health {
    /// Overall service status.
    pub status: &'static str,

    /// Human-readable detail.
    pub message: &'static str,
}
