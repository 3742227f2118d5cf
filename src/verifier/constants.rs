//! Lovable AI 网关常量
//!
//! 上游地址、模型标识、事实核查提示词和 `verify_claim` 工具 schema。

use serde_json::{json, Value};

/// Lovable AI 网关的 chat completions 端点
pub const LOVABLE_API_URL: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";

/// 固定使用的模型
pub const VERIFY_MODEL: &str = "google/gemini-2.5-flash";

/// 工具名，上游必须以该函数调用的形式返回结果
pub const VERIFY_TOOL_NAME: &str = "verify_claim";

/// 系统提示词：要求模型扮演事实核查员，只在三种结论中选择
pub const SYSTEM_PROMPT: &str = "You are a professional fact-checker. Analyze the claim \
    provided by the user and determine whether it is true, false, or uncertain. Base your \
    verdict on well-established knowledge. You must answer by calling the verify_claim \
    function with exactly one of the verdicts: True, False, or Uncertain.";

/// 构造用户消息，将待核查陈述原样嵌入引号内
pub fn user_prompt(claim: &str) -> String {
    format!("Verify the following claim and give your verdict: \"{claim}\"")
}

/// `verify_claim` 的 function-calling schema
///
/// `verdict` 限定为三个枚举值，`confidence` 限定在 0-100，
/// `additionalProperties: false` 禁止模型添加额外字段。
pub fn verify_claim_tool() -> Value {
    json!({
        "type": "function",
        "function": {
            "name": VERIFY_TOOL_NAME,
            "description": "Report the fact-check verdict for a claim",
            "parameters": {
                "type": "object",
                "properties": {
                    "verdict": {
                        "type": "string",
                        "enum": ["True", "False", "Uncertain"],
                        "description": "The fact-check verdict"
                    },
                    "confidence": {
                        "type": "number",
                        "minimum": 0,
                        "maximum": 100,
                        "description": "Confidence in the verdict, 0-100"
                    },
                    "reasoning": {
                        "type": "string",
                        "description": "Short explanation supporting the verdict"
                    }
                },
                "required": ["verdict", "confidence", "reasoning"],
                "additionalProperties": false
            }
        }
    })
}
