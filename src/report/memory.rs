use super::{ReportLevel, Reporter};
use std::cell::RefCell;

/// 内存捕获型报告通道：按调用顺序记录 (级别, 消息)
/// 单线程使用；每次清理运行应使用独立实例
#[derive(Debug, Default)]
pub struct MemoryReporter {
    entries: RefCell<Vec<(ReportLevel, String)>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 全部记录（副本）
    pub fn entries(&self) -> Vec<(ReportLevel, String)> {
        self.entries.borrow().clone()
    }

    /// 指定级别的消息
    pub fn messages(&self, level: ReportLevel) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|(lvl, _)| *lvl == level)
            .map(|(_, msg)| msg.clone())
            .collect()
    }

    pub fn count(&self, level: ReportLevel) -> usize {
        self.entries.borrow().iter().filter(|(lvl, _)| *lvl == level).count()
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, level: ReportLevel, message: &str) {
        self.entries.borrow_mut().push((level, message.to_owned()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captures_in_order() {
        let reporter = MemoryReporter::new();
        reporter.info("a");
        reporter.warning("b");
        reporter.success("c");
        reporter.info("d");

        assert_eq!(
            reporter.entries(),
            vec![
                (ReportLevel::Info, "a".to_string()),
                (ReportLevel::Warning, "b".to_string()),
                (ReportLevel::Success, "c".to_string()),
                (ReportLevel::Info, "d".to_string()),
            ]
        );
        assert_eq!(reporter.messages(ReportLevel::Info), vec!["a", "d"]);
        assert_eq!(reporter.count(ReportLevel::Error), 0);
    }

    #[test]
    fn test_reference_forwarding() {
        // 测试场景：&MemoryReporter 作为 Reporter 使用时写入同一实例
        let reporter = MemoryReporter::new();
        let by_ref: &dyn Reporter = &reporter;
        (&by_ref).error("boom");
        assert_eq!(reporter.messages(ReportLevel::Error), vec!["boom"]);
    }
}
