//! HTTP Routes
//!
//! API Endpoints:
//! - /api/speech   POST  文本转语音（返回 audio/mpeg）
//! - /api/ping     GET   健康检查

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route("/speech", post(handlers::synthesize_speech))
}
