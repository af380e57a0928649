//! 完整运行流程：读取 → 清理 → 写出 → 汇报
use crate::cleaner::{AddressCleaner, CleanOutcome};
use crate::config::CleanerConfig;
use crate::error::{CleanerError, CleanerResult};
use crate::io::{read_input_file, write_output_file, write_stats_file};
use crate::report::Reporter;

/// 执行一次完整清理
/// 任一致命错误都会在写出规则文件之前返回，不会产生半成品输出
pub fn run(config: &CleanerConfig, reporter: &dyn Reporter) -> CleanerResult<CleanOutcome> {
    let raw_addresses = read_input_file(&config.input_path)?;
    reporter.info(&format!(
        "Loaded {} addresses from {}",
        raw_addresses.len(),
        config.input_path.display()
    ));

    let outcome = AddressCleaner::new().clean(&raw_addresses, reporter)?;

    // 统计文件先于规则文件写出：导出失败时不留下规则文件
    if let Some(stats_path) = &config.stats_path {
        write_stats_file(stats_path, &outcome.stats)?;
        log::info!("Stats exported to {}", stats_path.display());
    }
    write_output_file(&config.output_path, &outcome.rules)?;

    reporter.success(&format!(
        "Cleaned addresses written to {}",
        config.output_path.display()
    ));
    reporter.info(&format!(
        "Final count: {} unique addresses",
        outcome.rules.len()
    ));

    Ok(outcome)
}

/// 顶层错误汇报：输入缺失按原文输出，其余统一包装
pub fn report_failure(err: &CleanerError, reporter: &dyn Reporter) {
    if err.is_source_missing() {
        reporter.error(&err.to_string());
    } else {
        reporter.error(&format!("Unexpected error: {err}"));
    }
}

/// 执行并汇报结果，成功返回 true
pub fn run_and_report(config: &CleanerConfig, reporter: &dyn Reporter) -> bool {
    match run(config, reporter) {
        Ok(_) => true,
        Err(err) => {
            report_failure(&err, reporter);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigManager;
    use crate::report::{MemoryReporter, ReportLevel};
    use std::fs;
    use std::path::Path;

    fn config_in(dir: &Path) -> CleanerConfig {
        ConfigManager::custom()
            .input_path(dir.join("data").join("input_addresses.txt"))
            .output_path(dir.join("output").join("cleaned_addresses.txt"))
            .no_log_file()
            .build()
    }

    #[test]
    fn test_run_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        fs::create_dir_all(config.input_path.parent().unwrap()).unwrap();
        fs::write(
            &config.input_path,
            "12345, 12345\nABC?*; bad!char\n\n  XY?Z  \n",
        )
        .unwrap();

        let reporter = MemoryReporter::new();
        let outcome = run(&config, &reporter).unwrap();

        let written = fs::read_to_string(&config.output_path).unwrap();
        assert_eq!(
            written,
            "regex 1,1,12345\nregex 1,1,ABC[0-9]*\nregex 1,1,XY?Z\n"
        );
        assert_eq!(outcome.stats.duplicates, vec!["12345"]);

        let infos = reporter.messages(ReportLevel::Info);
        let loaded = format!("Loaded 5 addresses from {}", config.input_path.display());
        assert_eq!(infos.first(), Some(&loaded));
        assert_eq!(
            infos.last().map(String::as_str),
            Some("Final count: 3 unique addresses")
        );
        assert_eq!(
            reporter.messages(ReportLevel::Success),
            vec![format!(
                "Cleaned addresses written to {}",
                config.output_path.display()
            )]
        );
        assert_eq!(reporter.count(ReportLevel::Warning), 1);
    }

    #[test]
    fn test_missing_input_aborts_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        let reporter = MemoryReporter::new();
        assert!(!run_and_report(&config, &reporter));

        assert!(!config.output_path.exists());
        let errors = reporter.messages(ReportLevel::Error);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("File not found: "));
        assert_eq!(reporter.count(ReportLevel::Success), 0);
    }

    #[test]
    fn test_other_failures_are_reported_as_unexpected() {
        // 测试场景：输出路径被目录占用，写出失败
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        fs::create_dir_all(config.input_path.parent().unwrap()).unwrap();
        fs::write(&config.input_path, "1\n").unwrap();
        fs::create_dir_all(&config.output_path).unwrap();

        let reporter = MemoryReporter::new();
        assert!(!run_and_report(&config, &reporter));

        let errors = reporter.messages(ReportLevel::Error);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("Unexpected error: Failed to write file"));
    }

    #[test]
    fn test_stats_export_failure_leaves_no_rules_file() {
        // 测试场景：统计导出路径被目录占用，整次运行失败且不产生规则文件
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path());
        let stats_dir = dir.path().join("statsdir");
        fs::create_dir_all(&stats_dir).unwrap();
        config.stats_path = Some(stats_dir);
        fs::create_dir_all(config.input_path.parent().unwrap()).unwrap();
        fs::write(&config.input_path, "12345
").unwrap();

        let reporter = MemoryReporter::new();
        assert!(!run_and_report(&config, &reporter));

        assert!(!config.output_path.exists());
        let errors = reporter.messages(ReportLevel::Error);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("Unexpected error: Failed to write file"));
        assert_eq!(reporter.count(ReportLevel::Success), 0);
    }

    #[test]
    fn test_stats_export() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config_in(dir.path());
        config.stats_path = Some(dir.path().join("reports").join("stats.json"));
        fs::create_dir_all(config.input_path.parent().unwrap()).unwrap();
        fs::write(&config.input_path, "7?*, 7?*, !!\n").unwrap();

        run(&config, &MemoryReporter::new()).unwrap();

        let stats: serde_json::Value = serde_json::from_str(
            &fs::read_to_string(config.stats_path.as_ref().unwrap()).unwrap(),
        )
        .unwrap();
        assert_eq!(stats["wildcard_marker_count"], 2);
        assert_eq!(stats["duplicates"][0], "7?*");
        assert_eq!(stats["invalid_entries"][0], "!!");
        assert_eq!(stats["kept_rules"], 1);
    }
}
