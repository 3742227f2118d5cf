//! Test 命令 - 发送测试请求到本地服务器
//!
//! 向本地运行的 factgate 服务器提交一条示例陈述，
//! 用于验证服务和上游网关配置是否正常。

use anyhow::{Context, Result};

use crate::config::Config;

/// 执行测试命令
///
/// 向本地服务器的 `/v1/verify-claim` 端点发送一条示例陈述，
/// 打印响应状态和核查结果。
pub async fn test_command(config: Config) -> Result<()> {
    println!("Sending test claim to local server...");

    let test_body = serde_json::json!({
        "claim": "The Great Wall of China is visible from the Moon with the naked eye."
    });

    let url = format!("http://{}:{}/v1/verify-claim", config.host, config.port);

    println!("Request URL: {}", url);

    let response = reqwest::Client::new()
        .post(&url)
        .json(&test_body)
        .send()
        .await
        .context("Request failed. Make sure the server is running.")?;

    let status = response.status();
    println!("Response status: {}", status);

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("Request failed: {}", body);
    }

    let body = response
        .text()
        .await
        .context("Failed to read response body")?;

    println!("Response:");
    println!("{}", body);

    Ok(())
}
