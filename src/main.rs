//! oa-cleaner 命令行入口
//!
//! 运行命令：
//! cargo run -- --input data/input_addresses.txt --output output/cleaned_addresses.txt

use clap::Parser;
use oa_cleaner::utils::init_activity_log;
use oa_cleaner::{run_and_report, CleanerConfig, ConfigManager, ConsoleReporter, Reporter};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "oa-cleaner", version, about = "Clean originating addresses into upload rules")]
struct Cli {
    /// 原始地址文件
    #[arg(short, long, default_value = oa_cleaner::config::DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// 规则输出文件
    #[arg(short, long, default_value = oa_cleaner::config::DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// 活动日志文件
    #[arg(long, default_value = oa_cleaner::config::DEFAULT_LOG_PATH, conflicts_with = "no_log_file")]
    log_file: PathBuf,

    /// 不写日志文件，日志输出到 stderr
    #[arg(long)]
    no_log_file: bool,

    /// 统计信息 JSON 导出路径
    #[arg(long, value_name = "PATH")]
    stats_json: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> CleanerConfig {
        let mut builder = ConfigManager::custom()
            .input_path(self.input)
            .output_path(self.output);
        builder = if self.no_log_file {
            builder.no_log_file()
        } else {
            builder.log_path(self.log_file)
        };
        if let Some(stats) = self.stats_json {
            builder = builder.stats_path(stats);
        }
        builder.build()
    }
}

fn main() -> ExitCode {
    let config = Cli::parse().into_config();
    // 日志写 stderr 时终端已有 `[TAG]` 输出，不再重复转发
    let reporter = ConsoleReporter::new(config.log_path.is_some());

    // 日志初始化失败不影响清理本身
    if let Err(e) = init_activity_log(config.log_path.as_deref()) {
        reporter.warning(&e.to_string());
    }

    if run_and_report(&config, &reporter) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
