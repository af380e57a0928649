//! 规则格式化：把保留下来的原始地址转换为上传规则
//! - 标准：`regex 1,1,<address>`
//! - 通配：含 `?*` 时去掉全部 `?*` 并追加 `[0-9]*`
//!
//! 注意：这里处理的是原始文本而不是规范键，`?*` 之外的单个 `?` 会原样保留。
use super::syntax::{NUMERIC_WILDCARD_SUFFIX, RULE_PREFIX, WILDCARD_MARKER};
use crate::error::{CleanerError, CleanerResult};

/// 格式化单个地址
pub fn format_address(address: &str) -> CleanerResult<String> {
    if address.is_empty() {
        return Err(CleanerError::InvalidInput("Address cannot be empty.".to_string()));
    }

    if address.contains(WILDCARD_MARKER) {
        let remainder = address.replace(WILDCARD_MARKER, "");
        Ok(format!("{RULE_PREFIX}{remainder}{NUMERIC_WILDCARD_SUFFIX}"))
    } else {
        Ok(format!("{RULE_PREFIX}{address}"))
    }
}

/// 按顺序批量格式化，遇到第一个错误即返回
pub fn format_addresses<S: AsRef<str>>(addresses: &[S]) -> CleanerResult<Vec<String>> {
    addresses
        .iter()
        .map(|addr| format_address(addr.as_ref()))
        .collect()
}
