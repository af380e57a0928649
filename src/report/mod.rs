//! 运行报告通道
//! 清理流程通过注入的 [`Reporter`] 输出进度与诊断信息，而不是直接访问全局日志对象，
//! 测试中可替换为 [`MemoryReporter`] 捕获全部消息。

pub mod console;
pub mod memory;

pub use console::{ConsoleReporter, LogReporter};
pub use memory::MemoryReporter;

use std::fmt;

/// 报告级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportLevel {
    Info,
    Warning,
    Error,
    Success,
}

impl ReportLevel {
    /// 终端输出标签
    pub fn tag(&self) -> &'static str {
        match self {
            ReportLevel::Info => "INFO",
            ReportLevel::Warning => "WARN",
            ReportLevel::Error => "ERROR",
            ReportLevel::Success => "SUCCESS",
        }
    }

    /// 对应的 log 级别（success 记为 info）
    pub fn log_level(&self) -> log::Level {
        match self {
            ReportLevel::Info | ReportLevel::Success => log::Level::Info,
            ReportLevel::Warning => log::Level::Warn,
            ReportLevel::Error => log::Level::Error,
        }
    }
}

impl fmt::Display for ReportLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// 报告通道接口
pub trait Reporter {
    /// 按级别输出一条消息
    fn report(&self, level: ReportLevel, message: &str);

    fn info(&self, message: &str) {
        self.report(ReportLevel::Info, message);
    }

    fn warning(&self, message: &str) {
        self.report(ReportLevel::Warning, message);
    }

    fn error(&self, message: &str) {
        self.report(ReportLevel::Error, message);
    }

    fn success(&self, message: &str) {
        self.report(ReportLevel::Success, message);
    }
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn report(&self, level: ReportLevel, message: &str) {
        (**self).report(level, message);
    }
}
