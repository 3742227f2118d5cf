//! HTTP 请求处理器

pub mod health;
pub mod verify;

pub use health::handle_health;
pub use verify::handle_verify;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::verifier::VerifyError;

/// 错误响应体；`details` 仅在网关错误时携带上游原文
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

/// 将核查错误映射为 HTTP 响应
///
/// 状态码由 [`VerifyError::status_code`] 给出，文案取自错误的 Display。
fn error_response(err: VerifyError) -> axum::response::Response {
    let error = ErrorResponse {
        error: err.to_string(),
        details: err.details().map(str::to_string),
    };
    (err.status_code(), Json(error)).into_response()
}

/// 请求级错误（如缺失字段）的统一响应
fn request_error(status: StatusCode, message: &str) -> axum::response::Response {
    let error = ErrorResponse {
        error: message.to_string(),
        details: None,
    };
    (status, Json(error)).into_response()
}
