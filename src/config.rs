//! 全局配置管理,存储所有可配置的路径项
//! 规则语法（前缀/标记字符/通配后缀）固定不可配置，见 [`crate::cleaner::syntax`]

use std::path::PathBuf;

/// 默认输入文件
pub const DEFAULT_INPUT_PATH: &str = "data/input_addresses.txt";
/// 默认输出文件
pub const DEFAULT_OUTPUT_PATH: &str = "output/cleaned_addresses.txt";
/// 默认活动日志文件
pub const DEFAULT_LOG_PATH: &str = "logs/activity.log";

/// 清理任务配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanerConfig {
    // 原始地址文件
    pub input_path: PathBuf,
    // 规则输出文件
    pub output_path: PathBuf,
    // 活动日志文件（None 表示日志写 stderr）
    pub log_path: Option<PathBuf>,
    // 统计信息 JSON 导出路径（None 表示不导出）
    pub stats_path: Option<PathBuf>,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            log_path: Some(PathBuf::from(DEFAULT_LOG_PATH)),
            stats_path: None,
        }
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> CleanerConfig {
        CleanerConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（链式 API）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: CleanerConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.input_path = path.into();
        self
    }

    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_path = path.into();
        self
    }

    pub fn log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.log_path = Some(path.into());
        self
    }

    /// 关闭活动日志文件
    pub fn no_log_file(mut self) -> Self {
        self.config.log_path = None;
        self
    }

    pub fn stats_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.stats_path = Some(path.into());
        self
    }

    pub fn build(self) -> CleanerConfig {
        self.config
    }
}
