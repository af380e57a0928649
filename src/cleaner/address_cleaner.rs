//! 负责整体清理流程的串联：规整 → 校验 → 去重 → 格式化 → 排序
use super::clean_stats::CleanStats;
use super::dedup::Deduplicator;
use super::formatter::format_address;
use super::normalizer::Normalizer;
use super::validator;
use crate::error::CleanerResult;
use crate::report::Reporter;
use crate::utils::log_format::compress_token_list;

/// 日志中最多展示的重复 token 数
const MAX_LOGGED_DUPLICATES: usize = 50;

/// 单次清理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanOutcome {
    /// 按字典序升序排列的规则
    pub rules: Vec<String>,
    pub stats: CleanStats,
}

/// 地址清理器
/// 自身无状态，去重集合与统计信息只存在于单次 [`AddressCleaner::clean`] 调用内
#[derive(Debug, Default, Clone, Copy)]
pub struct AddressCleaner;

impl AddressCleaner {
    pub fn new() -> Self {
        Self
    }

    /// 清理原始 token 序列并产出排序后的上传规则
    ///
    /// 非法字符与重复 token 只会记录并跳过，不会中断流程；
    /// 仅格式化阶段收到空值时返回错误。
    pub fn clean<S: AsRef<str>>(
        &self,
        raw_addresses: &[S],
        reporter: &dyn Reporter,
    ) -> CleanerResult<CleanOutcome> {
        let start = std::time::Instant::now();
        let mut stats = CleanStats {
            loaded_tokens: raw_addresses.len(),
            ..Default::default()
        };
        let mut dedup = Deduplicator::new();
        let mut rules = Vec::with_capacity(raw_addresses.len());

        for raw in raw_addresses {
            // 1. 规整：空 token 静默丢弃
            let Some(token) = Normalizer::normalize(raw.as_ref()) else {
                stats.empty_skipped += 1;
                continue;
            };

            if Normalizer::has_wildcard_marker(token) {
                stats.wildcard_marker_count += 1;
            }

            // 2. 校验：规范键字符非法则告警跳过
            let Some(key) = validator::validate(token) else {
                reporter.warning(&format!("Invalid format skipped: {token}"));
                stats.record_invalid(token);
                continue;
            };

            // 3. 去重：按规范键，先到先得，记录原文
            if !dedup.admit(&key) {
                stats.record_duplicate(token);
                continue;
            }

            // 4. 格式化：使用原始文本而非规范键
            rules.push(format_address(token)?);
        }

        if stats.duplicates.is_empty() {
            reporter.info("No duplicates found.");
        } else {
            reporter.info(&format!(
                "Found {} duplicate(s): {}",
                stats.duplicate_count(),
                compress_token_list(&stats.duplicates, MAX_LOGGED_DUPLICATES)
            ));
        }
        reporter.info(&format!(
            "Addresses containing '?*': {}",
            stats.wildcard_marker_count
        ));

        // 5. 排序：按字节序升序，与输入顺序无关
        rules.sort();
        stats.kept_rules = rules.len();
        stats.print_stats(start.elapsed());

        Ok(CleanOutcome { rules, stats })
    }
}
