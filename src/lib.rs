//! oa-cleaner - 短信发送方地址（Originating Address）清理工具
//!
//! 把格式松散的地址列表（混合分隔符、残留标记字符、重复、非法字符）
//! 转换为下游过滤系统可直接上传的规则：`regex 1,1,<address>`。

pub mod cleaner;
pub mod config;
pub mod error;
pub mod io;
pub mod report;
pub mod runner;
pub mod utils;

// 导出全局错误类型
pub use self::error::{CleanerError, CleanerResult};

// 导出配置模块核心结构体与构建器
pub use self::config::{CleanerConfig, ConfigManager, CustomConfigBuilder};

// 导出清理模块核心接口
pub use self::cleaner::{format_address, format_addresses, AddressCleaner, CleanOutcome, CleanStats};

// 导出报告通道
pub use self::report::{ConsoleReporter, LogReporter, MemoryReporter, ReportLevel, Reporter};

// 导出运行入口
pub use self::runner::{report_failure, run, run_and_report};
