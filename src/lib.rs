//! Factgate - 陈述核查 API 服务
//!
//! 一个轻量级的事实核查后端，由两部分独立工具组成：
//!
//! - [`user_errors`] / [`validation`]: 后端错误归一化与用户输入校验，
//!   作为库导出供前端 BFF 复用
//! - [`gateway`] / [`verifier`]: 无状态 HTTP 端点，将待核查陈述转发给
//!   Lovable AI 网关，以强制 function-calling 拿到结构化结论

pub mod commands;
pub mod config;
pub mod gateway;
pub mod user_errors;
pub mod validation;
pub mod verifier;

pub use user_errors::{user_friendly_message, BackendError};
pub use validation::{validate_claim, validate_profile_name, validate_tag, ValidationError};
pub use verifier::{ClaimVerdict, ClaimVerifier, Verdict, VerifyError};
