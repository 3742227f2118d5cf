//! 用户输入校验
//!
//! 三个独立的字段校验器：标签、昵称、待核查的新闻陈述。
//! 长度上限（50 / 100 / 5000）和标签字符集是对外契约，
//! 与下游存储和处理的字段上限保持一致。

use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// 标签最大长度（字符数）
pub const MAX_TAG_LEN: usize = 50;

/// 昵称最大长度（字符数）
pub const MAX_PROFILE_NAME_LEN: usize = 100;

/// 陈述最大长度（字符数）
pub const MAX_CLAIM_LEN: usize = 5000;

/// 标签允许的字符集：字母、数字、空白、连字符、下划线
pub const TAG_PATTERN: &str = r"^[A-Za-z0-9\s_-]+$";

static TAG_REGEX: OnceLock<Regex> = OnceLock::new();

fn tag_regex() -> &'static Regex {
    TAG_REGEX.get_or_init(|| Regex::new(TAG_PATTERN).expect("invalid tag pattern"))
}

/// 字段校验错误，Display 即面向用户的提示文案
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Tag cannot be empty")]
    EmptyTag,
    #[error("Tag must be 50 characters or less")]
    TagTooLong,
    #[error("Tag can only contain letters, numbers, spaces, hyphens, and underscores")]
    TagInvalidChars,
    #[error("Name must be 100 characters or less")]
    NameTooLong,
    #[error("Please enter a news claim to verify")]
    EmptyClaim,
    #[error("Claim must be 5000 characters or less")]
    ClaimTooLong,
}

/// 校验标签：去除首尾空白后检查非空、长度、字符集
pub fn validate_tag(tag: &str) -> Result<(), ValidationError> {
    let trimmed = tag.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyTag);
    }
    if trimmed.chars().count() > MAX_TAG_LEN {
        return Err(ValidationError::TagTooLong);
    }
    if !tag_regex().is_match(trimmed) {
        return Err(ValidationError::TagInvalidChars);
    }
    Ok(())
}

/// 校验昵称：仅限制长度，允许为空
pub fn validate_profile_name(name: &str) -> Result<(), ValidationError> {
    if name.chars().count() > MAX_PROFILE_NAME_LEN {
        return Err(ValidationError::NameTooLong);
    }
    Ok(())
}

/// 校验陈述：去除首尾空白后检查非空和长度
pub fn validate_claim(claim: &str) -> Result<(), ValidationError> {
    let trimmed = claim.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyClaim);
    }
    if trimmed.chars().count() > MAX_CLAIM_LEN {
        return Err(ValidationError::ClaimTooLong);
    }
    Ok(())
}
