use super::{ReportLevel, Reporter};

/// 终端 + 日志双路输出
/// 终端打印 `[TAG] message`；开启转发时同时交给 log 门面写入活动日志文件。
/// 日志输出到 stderr 时应关闭转发，否则同一条消息会在终端出现两次。
#[derive(Debug, Clone, Copy)]
pub struct ConsoleReporter {
    forward_to_log: bool,
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ConsoleReporter {
    pub fn new(forward_to_log: bool) -> Self {
        Self { forward_to_log }
    }

    pub fn forwards_to_log(&self) -> bool {
        self.forward_to_log
    }
}

impl Reporter for ConsoleReporter {
    fn report(&self, level: ReportLevel, message: &str) {
        println!("[{}] {}", level.tag(), message);
        if self.forward_to_log {
            log::log!(level.log_level(), "{}", message);
        }
    }
}

/// 仅转发给 log 门面，供库内嵌使用
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&self, level: ReportLevel, message: &str) {
        match level {
            ReportLevel::Success => log::info!("[SUCCESS] {}", message),
            _ => log::log!(level.log_level(), "{}", message),
        }
    }
}
