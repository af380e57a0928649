//! 负责统计数据的定义、更新与格式化输出
use serde::Serialize;

/// 地址清理统计信息
/// 记录一次清理运行中的各类指标：
/// 1. 载入 token 数 / 空 token 数 / 保留规则数
/// 2. 含 `?*` 的 token 数
/// 3. 因字符非法被跳过的 token（按输入顺序）
/// 4. 重复 token 原文（按输入顺序）
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct CleanStats {
    /// 输入 token 总数（含空 token）
    pub loaded_tokens: usize,
    /// 去空白后为空而被静默丢弃的 token 数
    pub empty_skipped: usize,
    /// 含通配标记子串 `?*` 的 token 数
    pub wildcard_marker_count: usize,
    /// 字符非法被跳过的 token 原文
    pub invalid_entries: Vec<String>,
    /// 规范键重复被跳过的 token 原文
    pub duplicates: Vec<String>,
    /// 最终输出的规则数
    pub kept_rules: usize,
}

impl CleanStats {
    pub fn invalid_count(&self) -> usize {
        self.invalid_entries.len()
    }

    pub fn duplicate_count(&self) -> usize {
        self.duplicates.len()
    }

    pub fn record_invalid(&mut self, token: &str) {
        self.invalid_entries.push(token.to_owned());
    }

    pub fn record_duplicate(&mut self, token: &str) {
        self.duplicates.push(token.to_owned());
    }

    /// 格式化输出统计信息（结构化日志）
    pub fn print_stats(&self, total_time: std::time::Duration) {
        log::debug!(
            "Address cleaning completed | Time: {:?} | Loaded: {} | Empty: {} | Invalid: {} | Duplicates: {} | Kept rules: {}",
            total_time,
            self.loaded_tokens,
            self.empty_skipped,
            self.invalid_count(),
            self.duplicate_count(),
            self.kept_rules
        );
        log::debug!(
            "Wildcard marker stats: '?*' tokens {}",
            self.wildcard_marker_count
        );
    }
}
