//! 地址清理模块
//! 负责去空白、字符校验、按规范键去重，并把保留的地址格式化为上传规则，
//! 为下游过滤系统提供干净、可用的规则数据。

pub mod address_cleaner;
pub mod clean_stats;
pub mod dedup;
pub mod formatter;
pub mod normalizer;
pub mod syntax;
pub mod validator;

pub use address_cleaner::{AddressCleaner, CleanOutcome};
pub use clean_stats::CleanStats;
pub use dedup::Deduplicator;
pub use formatter::{format_address, format_addresses};
pub use normalizer::Normalizer;
pub use validator::{canonical_key, is_valid_key, CanonicalKey};
