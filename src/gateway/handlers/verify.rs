//! 陈述核查处理器

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::gateway::handlers::{error_response, request_error};
use crate::gateway::state::AppState;
use crate::verifier::Verdict;

/// 核查结果响应
#[derive(Debug, Serialize)]
pub struct VerificationResult {
    pub claim: String,
    pub verdict: Verdict,
    pub confidence: f64,
    pub reasoning: String,
    /// ISO-8601，UTC，毫秒精度
    pub timestamp: String,
}

/// POST /v1/verify-claim 处理器
pub async fn handle_verify(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> axum::response::Response {
    // claim 缺失或不是字符串都按同一个请求错误处理
    let Some(claim) = body.get("claim").and_then(|v| v.as_str()) else {
        return request_error(StatusCode::BAD_REQUEST, "Missing or invalid 'claim' field");
    };

    tracing::info!(claim_chars = claim.chars().count(), "verification request");

    match state.verifier().verify(claim).await {
        Ok(verdict) => {
            tracing::info!(
                verdict = ?verdict.verdict,
                confidence = verdict.confidence,
                "verdict received"
            );

            let result = VerificationResult {
                claim: claim.to_string(),
                verdict: verdict.verdict,
                confidence: verdict.confidence,
                reasoning: verdict.reasoning,
                timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            };
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(err) => {
            tracing::warn!(error = %err, "verification failed");
            error_response(err)
        }
    }
}
