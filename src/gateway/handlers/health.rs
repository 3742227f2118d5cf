//! 健康检查处理器

use axum::Json;
use serde::Serialize;

use crate::verifier::VERIFY_MODEL;

/// 健康检查响应
#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    model: &'static str,
}

/// GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        model: VERIFY_MODEL,
    })
}
