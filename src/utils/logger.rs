//! 活动日志初始化：env_logger 作为 log 门面的后端
//! 行格式：`<timestamp> | <LEVEL> | <message>`
use crate::error::{CleanerError, CleanerResult};
use env_logger::{Builder, Env, Target, WriteStyle};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// 初始化全局日志
/// - `Some(path)`：追加写入日志文件，自动创建父目录
/// - `None`：写 stderr
///
/// 过滤级别读取 `RUST_LOG`，默认 info。进程内只能成功初始化一次。
pub fn init_activity_log(log_path: Option<&Path>) -> CleanerResult<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} | {} | {}",
            buf.timestamp_seconds(),
            record.level(),
            record.args()
        )
    });

    match log_path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .write_style(WriteStyle::Never)
                .target(Target::Pipe(Box::new(file)));
        }
        None => {
            builder.target(Target::Stderr);
        }
    }

    builder
        .try_init()
        .map_err(|e| CleanerError::LogInit(e.to_string()))
}
