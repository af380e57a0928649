//! 按规范键去重（先到先得）
use rustc_hash::FxHashSet;

/// 去重器：记录单次运行内已出现的规范键，不跨运行保留
#[derive(Debug, Default)]
pub struct Deduplicator {
    seen: FxHashSet<String>,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 规范键首次出现返回 true 并记录；已出现过返回 false
    #[inline]
    pub fn admit(&mut self, key: &str) -> bool {
        if self.seen.contains(key) {
            return false;
        }
        self.seen.insert(key.to_owned());
        true
    }

    /// 已记录的规范键数量
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
