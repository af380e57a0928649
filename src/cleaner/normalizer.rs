//! 原始 token 规整：去首尾空白、丢弃空 token、识别通配标记子串
use super::syntax::WILDCARD_MARKER;

pub struct Normalizer;

impl Normalizer {
    /// 去首尾空白；空 token 返回 None（静默丢弃，不计入无效）
    #[inline(always)]
    pub fn normalize(raw: &str) -> Option<&str> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }

    /// 是否包含通配标记子串 `?*`（仅用于统计，不影响校验和去重）
    #[inline(always)]
    pub fn has_wildcard_marker(token: &str) -> bool {
        token.contains(WILDCARD_MARKER)
    }
}
