//! 原始地址读取
//! 支持灵活的输入格式：每行一个、逗号/分号/空白分隔，或混合
use crate::error::{CleanerError, CleanerResult};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// 分隔符：逗号、分号、任意空白的连续组合
static DELIMITERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,;\s]+").unwrap());

/// 拆分单行文本为 token，丢弃空片段
pub fn split_tokens(line: &str) -> impl Iterator<Item = &str> {
    DELIMITERS
        .split(line.trim())
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// 逐行读取地址文件并拆分为扁平的 token 序列（保持输入顺序）
pub fn read_input_file(path: &Path) -> CleanerResult<Vec<String>> {
    if !path.exists() {
        return Err(CleanerError::SourceNotFound(path.to_path_buf()));
    }

    let read_err = |source| CleanerError::SourceRead {
        path: path.to_path_buf(),
        source,
    };

    let reader = BufReader::new(File::open(path).map_err(read_err)?);
    let mut addresses = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(read_err)?;
        addresses.extend(split_tokens(&line).map(str::to_owned));
    }

    log::debug!(
        "Read {} raw tokens from {}",
        addresses.len(),
        path.display()
    );
    Ok(addresses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_split_mixed_delimiters() {
        let tokens: Vec<&str> = split_tokens(" 123, 456;789  ABC?*\t,;, XY?Z ").collect();
        assert_eq!(tokens, vec!["123", "456", "789", "ABC?*", "XY?Z"]);
    }

    #[test]
    fn test_split_blank_line() {
        assert_eq!(split_tokens("   ").count(), 0);
        assert_eq!(split_tokens(",;,").count(), 0);
    }

    #[test]
    fn test_read_input_file_flattens_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "12345, 12345").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "ABC?*;bad!char XY?Z").unwrap();
        write!(file, "last").unwrap();

        let tokens = read_input_file(file.path()).unwrap();
        assert_eq!(
            tokens,
            vec!["12345", "12345", "ABC?*", "bad!char", "XY?Z", "last"]
        );
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");

        let err = read_input_file(&missing).unwrap_err();
        assert!(err.is_source_missing());
        assert!(err.to_string().starts_with("File not found: "));
    }

    #[test]
    fn test_read_invalid_utf8() {
        // 测试场景：非 UTF-8 内容返回 SourceRead 而不是 panic
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, b'\n']).unwrap();

        let err = read_input_file(file.path()).unwrap_err();
        assert!(matches!(err, CleanerError::SourceRead { .. }));
    }
}
