use std::fmt::Write;

/// 单个 token 在日志中最多展示的字符数
const MAX_TOKEN_CHARS: usize = 40;

/// 按字符数截断（保证落在 UTF-8 边界上）
fn truncate_token(token: &str, max_chars: usize) -> &str {
    match token.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &token[..byte_idx],
        None => token,
    }
}

/// 保持输入顺序的 token 列表格式化
/// 格式：[token1, token2, ...]，超过上限时追加 `… (total: N)`
pub fn compress_token_list<S: AsRef<str>>(tokens: &[S], max_count: usize) -> String {
    if tokens.is_empty() {
        return "[]".to_string();
    }

    let mut result = String::from("[");
    for (idx, token) in tokens.iter().take(max_count).enumerate() {
        if idx > 0 {
            result.push_str(", ");
        }
        let token = token.as_ref();
        let shown = truncate_token(token, MAX_TOKEN_CHARS);
        result.push_str(shown);
        if shown.len() < token.len() {
            result.push('…');
        }
    }

    if tokens.len() > max_count {
        // 写入 String 不会失败
        let _ = write!(result, ", … (total: {})", tokens.len());
    }
    result.push(']');

    result
}
