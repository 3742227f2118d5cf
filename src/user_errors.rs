//! 后端错误归一化
//!
//! 将后端返回的各种错误（认证错误码、数据库错误码、自由文本消息）
//! 统一映射为一组固定的、可直接展示给用户的文案。
//! 原始错误码和消息永远不会透传给调用方。

/// 后端返回的原始错误
///
/// `code` 和 `message` 均可能缺失，调用方按实际拿到的字段构造。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackendError {
    /// 错误码（如 `invalid_credentials`、`23505`）
    pub code: Option<String>,
    /// 原始错误消息
    pub message: Option<String>,
}

impl BackendError {
    /// 仅含错误码的错误
    pub fn from_code(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: None,
        }
    }

    /// 仅含消息文本的错误
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: Some(message.into()),
        }
    }
}

/// 未提供错误对象时的兜底文案
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred. Please try again.";

/// 无法归类时的兜底文案
pub const GENERIC_ERROR: &str = "An error occurred. Please try again later.";

const INVALID_CREDENTIALS_MSG: &str = "Invalid email or password. Please try again.";
const EMAIL_NOT_CONFIRMED_MSG: &str = "Please verify your email address before signing in.";
const ACCOUNT_EXISTS_MSG: &str = "An account with this email already exists.";
const NETWORK_ERROR_MSG: &str = "Network error. Please check your connection and try again.";
const TIMEOUT_MSG: &str = "The request timed out. Please try again.";

/// 认证错误码表（精确匹配，区分大小写）
const AUTH_ERROR_MESSAGES: &[(&str, &str)] = &[
    ("invalid_credentials", INVALID_CREDENTIALS_MSG),
    ("invalid_grant", INVALID_CREDENTIALS_MSG),
    ("email_not_confirmed", EMAIL_NOT_CONFIRMED_MSG),
    ("user_already_exists", ACCOUNT_EXISTS_MSG),
    ("email_exists", ACCOUNT_EXISTS_MSG),
    ("weak_password", "Password is too weak. Please use at least 6 characters."),
    ("user_not_found", "No account found with this email address."),
    ("over_request_rate_limit", "Too many attempts. Please wait a moment and try again."),
    ("over_email_send_rate_limit", "Too many emails sent. Please wait before requesting another."),
    ("signup_disabled", "New account registration is currently disabled."),
    ("validation_failed", "Please enter a valid email address."),
];

/// 数据库错误码表（Postgres SQLSTATE / PostgREST）
const DB_ERROR_MESSAGES: &[(&str, &str)] = &[
    ("23505", "This record already exists."),
    ("23503", "This operation references data that does not exist."),
    ("23514", "The provided data does not meet the requirements."),
    ("42501", "You do not have permission to perform this action."),
    ("PGRST116", "The requested record was not found."),
];

/// 消息短语表（子串匹配，不区分大小写）
const MESSAGE_PATTERNS: &[(&[&str], &str)] = &[
    (&["invalid login credentials"], INVALID_CREDENTIALS_MSG),
    (&["email not confirmed"], EMAIL_NOT_CONFIRMED_MSG),
    (&["already registered", "already exists"], ACCOUNT_EXISTS_MSG),
    (&["network", "fetch"], NETWORK_ERROR_MSG),
    (&["timeout"], TIMEOUT_MSG),
];

/// 将后端错误映射为用户可见文案
///
/// 匹配顺序：认证错误码 → 数据库错误码 → 消息短语 → 兜底文案。
/// 纯函数，无副作用；相同输入恒得相同输出。
pub fn user_friendly_message(error: Option<&BackendError>) -> &'static str {
    let Some(error) = error else {
        return UNEXPECTED_ERROR;
    };

    let code = error.code.as_deref().unwrap_or("");
    let message = error.message.as_deref().unwrap_or("");

    if !code.is_empty() {
        if let Some(msg) = lookup(AUTH_ERROR_MESSAGES, code) {
            return msg;
        }
        if let Some(msg) = lookup(DB_ERROR_MESSAGES, code) {
            return msg;
        }
    }

    if !message.is_empty() {
        let lowered = message.to_lowercase();
        for &(needles, msg) in MESSAGE_PATTERNS {
            if needles.iter().any(|needle| lowered.contains(needle)) {
                return msg;
            }
        }
    }

    GENERIC_ERROR
}

fn lookup(table: &[(&'static str, &'static str)], code: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| *key == code)
        .map(|(_, msg)| *msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_every_auth_and_db_code() {
        for (code, expected) in AUTH_ERROR_MESSAGES.iter().chain(DB_ERROR_MESSAGES) {
            let error = BackendError::from_code(*code);
            assert_eq!(user_friendly_message(Some(&error)), *expected, "code {code}");
        }
    }

    #[test]
    fn code_lookup_wins_over_message() {
        let error = BackendError {
            code: Some("23505".to_string()),
            message: Some("network request failed".to_string()),
        };
        assert_eq!(
            user_friendly_message(Some(&error)),
            "This record already exists."
        );
    }

    #[test]
    fn matches_message_phrases_case_insensitively() {
        let cases = [
            ("Invalid Login Credentials provided", INVALID_CREDENTIALS_MSG),
            ("Email not confirmed yet", EMAIL_NOT_CONFIRMED_MSG),
            ("User already registered", ACCOUNT_EXISTS_MSG),
            ("this email already exists", ACCOUNT_EXISTS_MSG),
            ("Network request failed", NETWORK_ERROR_MSG),
            ("Failed to fetch", NETWORK_ERROR_MSG),
            ("connection timeout exceeded", TIMEOUT_MSG),
        ];
        for (message, expected) in cases {
            let error = BackendError::from_message(message);
            assert_eq!(user_friendly_message(Some(&error)), expected, "message {message:?}");
        }
    }

    #[test]
    fn unknown_code_falls_through_to_message() {
        let error = BackendError {
            code: Some("totally_unknown".to_string()),
            message: Some("request timeout".to_string()),
        };
        assert_eq!(user_friendly_message(Some(&error)), TIMEOUT_MSG);
    }

    #[test]
    fn absent_error_returns_unexpected_fallback() {
        assert_eq!(user_friendly_message(None), UNEXPECTED_ERROR);
    }

    #[test]
    fn empty_error_returns_generic_fallback() {
        let error = BackendError::default();
        assert_eq!(user_friendly_message(Some(&error)), GENERIC_ERROR);
    }

    #[test]
    fn never_echoes_raw_input() {
        let error = BackendError {
            code: Some("XX999".to_string()),
            message: Some("secret internal detail at line 42".to_string()),
        };
        let result = user_friendly_message(Some(&error));
        assert!(!result.is_empty());
        assert!(!result.contains("XX999"));
        assert!(!result.contains("secret internal detail"));
    }
}
