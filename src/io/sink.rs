//! 规则输出：每行一条，自动创建父目录
use crate::cleaner::CleanStats;
use crate::error::{CleanerError, CleanerResult};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// 确保父目录存在
fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

/// 按给定顺序写出规则，每条以换行结尾
pub fn write_output_file<S: AsRef<str>>(path: &Path, rules: &[S]) -> CleanerResult<()> {
    let write_err = |source| CleanerError::SinkWrite {
        path: path.to_path_buf(),
        source,
    };

    ensure_parent_dir(path).map_err(write_err)?;

    let mut writer = BufWriter::new(File::create(path).map_err(write_err)?);
    for rule in rules {
        writeln!(writer, "{}", rule.as_ref()).map_err(write_err)?;
    }
    writer.flush().map_err(write_err)?;

    log::debug!("Wrote {} rules to {}", rules.len(), path.display());
    Ok(())
}

/// 以格式化 JSON 导出统计信息
pub fn write_stats_file(path: &Path, stats: &CleanStats) -> CleanerResult<()> {
    let write_err = |source| CleanerError::SinkWrite {
        path: path.to_path_buf(),
        source,
    };

    ensure_parent_dir(path).map_err(write_err)?;
    let json = serde_json::to_string_pretty(stats)?;
    fs::write(path, json + "\n").map_err(write_err)?;
    Ok(())
}
