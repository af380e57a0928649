//! 规则语法常量（固定，不可配置）

/// 校验标记字符：仅在计算规范键时剔除
pub const VALIDATION_MARKER: char = '?';

/// 通配标记子串：出现即改写为数字通配后缀
pub const WILDCARD_MARKER: &str = "?*";

/// 规则前缀
pub const RULE_PREFIX: &str = "regex 1,1,";

/// 数字通配后缀
pub const NUMERIC_WILDCARD_SUFFIX: &str = "[0-9]*";

/// 规范键允许的字符：ASCII 字母、数字、`*`
#[inline(always)]
pub fn is_allowed_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '*'
}
