//! 应用配置模块
//!
//! 负责从环境变量加载应用配置，包括：
//! - 服务器监听地址和端口
//! - Lovable AI 网关的 API key 与上游地址

use anyhow::{Context, Result};

use crate::verifier::LOVABLE_API_URL;

/// 应用配置
#[derive(Debug, Clone)]
pub struct Config {
    /// 服务器监听地址（如 "0.0.0.0" 或 "127.0.0.1"）
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
    /// Lovable AI 网关的 API key
    ///
    /// 启动时允许缺失：缺失属于配置故障，在请求处理时以 500 暴露，
    /// 而不是阻止服务启动。
    pub api_key: Option<String>,
    /// 上游 chat completions 地址（可覆盖，便于联调和测试）
    pub upstream_url: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// # 环境变量
    ///
    /// - `FACTGATE_HOST`: 服务器监听地址（默认: "0.0.0.0"）
    /// - `FACTGATE_PORT`: 服务器监听端口（默认: 8080）
    /// - `LOVABLE_API_KEY`: 上游网关密钥（缺失时请求阶段报错）
    /// - `FACTGATE_UPSTREAM_URL`: 上游地址（默认: Lovable AI 网关）
    ///
    /// # 错误
    ///
    /// - 如果 `FACTGATE_PORT` 不是有效的端口号
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("FACTGATE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = std::env::var("FACTGATE_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .context("FACTGATE_PORT must be a valid port number")?;

        let api_key = std::env::var("LOVABLE_API_KEY").ok().filter(|k| !k.is_empty());

        let upstream_url = std::env::var("FACTGATE_UPSTREAM_URL")
            .unwrap_or_else(|_| LOVABLE_API_URL.to_string());

        Ok(Self {
            host,
            port,
            api_key,
            upstream_url,
        })
    }
}
