//! 陈述核查客户端
//!
//! 负责与 Lovable AI 网关的单次往返：构造带 `verify_claim` 工具
//! schema 的 chat completion 请求，发送一次 POST，把上游响应中的
//! 工具调用参数解析为结构化结论。无重试，无流式。

mod constants;

pub use constants::{LOVABLE_API_URL, SYSTEM_PROMPT, VERIFY_MODEL, VERIFY_TOOL_NAME};

use http::StatusCode;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::OnceLock;
use thiserror::Error;

use crate::config::Config;

/// 上游请求超时（秒）
const API_TIMEOUT_SECS: u64 = 60;

/// 共享的 API 客户端
static API_CLIENT: OnceLock<Client> = OnceLock::new();

fn get_api_client() -> &'static Client {
    API_CLIENT.get_or_init(|| {
        Client::builder()
            .timeout(std::time::Duration::from_secs(API_TIMEOUT_SECS))
            .user_agent(concat!("factgate/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create AI gateway client")
    })
}

/// 核查结论
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    True,
    False,
    Uncertain,
}

/// 上游工具调用返回的结构化结论
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimVerdict {
    pub verdict: Verdict,
    /// 置信度 0-100，由工具 schema 约束，服务端不再复核
    pub confidence: f64,
    pub reasoning: String,
}

/// 核查流程中的错误，按阶段打标签，状态码映射见 [`VerifyError::status_code`]
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("LOVABLE_API_KEY is not configured")]
    MissingApiKey,
    #[error("LOVABLE_API_KEY contains invalid characters")]
    InvalidApiKey,
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,
    #[error("Payment required. Please add credits to your Lovable AI workspace.")]
    PaymentRequired,
    #[error("AI gateway error")]
    Gateway { details: String },
    #[error("No tool call in AI response")]
    MissingToolCall,
    #[error("AI gateway request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Failed to parse AI verdict: {0}")]
    Parse(#[from] serde_json::Error),
}

impl VerifyError {
    /// 错误到 HTTP 状态码的完整映射
    pub fn status_code(&self) -> StatusCode {
        match self {
            VerifyError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            VerifyError::PaymentRequired => StatusCode::PAYMENT_REQUIRED,
            VerifyError::MissingApiKey
            | VerifyError::InvalidApiKey
            | VerifyError::Gateway { .. }
            | VerifyError::MissingToolCall
            | VerifyError::Network(_)
            | VerifyError::Parse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 随响应附带的细节（目前仅网关错误携带上游原文）
    pub fn details(&self) -> Option<&str> {
        match self {
            VerifyError::Gateway { details } => Some(details),
            _ => None,
        }
    }
}

/// Lovable AI 网关客户端
pub struct ClaimVerifier {
    api_url: String,
    api_key: Option<String>,
}

impl ClaimVerifier {
    pub fn new(api_url: String, api_key: Option<String>) -> Self {
        Self { api_url, api_key }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.upstream_url.clone(), config.api_key.clone())
    }

    /// 核查一条陈述
    ///
    /// 对上游只发起一次请求；429/402 映射为限流/欠费错误，
    /// 其它非 2xx 连同上游原文一起作为网关错误返回。
    pub async fn verify(&self, claim: &str) -> Result<ClaimVerdict, VerifyError> {
        let api_key = self.api_key.as_deref().ok_or(VerifyError::MissingApiKey)?;
        let headers = build_headers(api_key)?;
        let body = build_request(claim);

        tracing::debug!(url = %self.api_url, model = VERIFY_MODEL, "dispatching verification request");

        let response = get_api_client()
            .post(&self.api_url)
            .headers(headers)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(VerifyError::RateLimited);
        }
        if status == reqwest::StatusCode::PAYMENT_REQUIRED {
            return Err(VerifyError::PaymentRequired);
        }
        if !status.is_success() {
            let details = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "AI gateway returned an error");
            return Err(VerifyError::Gateway { details });
        }

        let payload: Value = response.json().await?;
        let arguments = extract_tool_arguments(&payload)?;
        let verdict: ClaimVerdict = serde_json::from_str(arguments)?;

        Ok(verdict)
    }
}

/// 构造 chat completion 请求体：固定模型 + 提示词 + 强制工具调用
fn build_request(claim: &str) -> Value {
    json!({
        "model": VERIFY_MODEL,
        "messages": [
            { "role": "system", "content": SYSTEM_PROMPT },
            { "role": "user", "content": constants::user_prompt(claim) }
        ],
        "tools": [constants::verify_claim_tool()],
        "tool_choice": {
            "type": "function",
            "function": { "name": VERIFY_TOOL_NAME }
        }
    })
}

fn build_headers(api_key: &str) -> Result<http::HeaderMap, VerifyError> {
    use http::{header, HeaderValue};

    let mut map = http::HeaderMap::new();
    map.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|_| VerifyError::InvalidApiKey)?,
    );
    map.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    Ok(map)
}

/// 取第一个 choice 的第一个工具调用的参数串
fn extract_tool_arguments(response: &Value) -> Result<&str, VerifyError> {
    response
        .pointer("/choices/0/message/tool_calls/0/function/arguments")
        .and_then(|v| v.as_str())
        .ok_or(VerifyError::MissingToolCall)
}
