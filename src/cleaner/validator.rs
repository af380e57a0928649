//! 字符校验：计算规范键并检查字符集
//!
//! 规范键 = 去掉所有校验标记字符 `?` 后的 token，只用于校验与去重身份判断，
//! 从不直接输出。
use super::syntax::{is_allowed_char, VALIDATION_MARKER};

/// 规范键
pub type CanonicalKey = String;

/// 计算规范键：删除每一个 `?`（不特意针对 `?*` 子串）
pub fn canonical_key(token: &str) -> CanonicalKey {
    token.chars().filter(|&ch| ch != VALIDATION_MARKER).collect()
}

/// 规范键非空且仅由字母、数字、`*` 组成
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && key.chars().all(is_allowed_char)
}

/// 校验 token，通过则返回其规范键
pub fn validate(token: &str) -> Option<CanonicalKey> {
    let key = canonical_key(token);
    is_valid_key(&key).then_some(key)
}
