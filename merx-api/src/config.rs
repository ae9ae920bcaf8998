//! API 配置
//!
//! 运行配置，以及供 CLI 使用的进程级单例。
//! 作为库使用时应显式传入 `RunConfig`。

use merx_config::{HighlightConfig, LimitConfig, LoggingConfig, MerxConfig};
use once_cell::sync::{Lazy, OnceCell};

use crate::error::MerxError;

/// 分析配置
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunConfig {
    /// 语法检查限制
    pub limits: LimitConfig,
    /// 日志级别，由安装 subscriber 的一方使用
    pub logging: LoggingConfig,
    /// 主题选择和自定义配色
    pub highlight: HighlightConfig,
}

impl From<MerxConfig> for RunConfig {
    fn from(config: MerxConfig) -> Self {
        Self {
            limits: config.limits,
            logging: config.logging,
            highlight: config.highlight,
        }
    }
}

// 全局配置单例（CLI 便利用）
static GLOBAL_CONFIG: OnceCell<RunConfig> = OnceCell::new();
static DEFAULT_CONFIG: Lazy<RunConfig> = Lazy::new(RunConfig::default);

/// 初始化全局配置，已初始化时返回错误
pub fn init(config: RunConfig) -> Result<(), MerxError> {
    GLOBAL_CONFIG
        .set(config)
        .map_err(|_| MerxError::AlreadyInitialized)
}

/// 全局配置；未调用 [`init`] 时返回默认值
pub fn config() -> &'static RunConfig {
    GLOBAL_CONFIG.get().unwrap_or_else(|| &*DEFAULT_CONFIG)
}

/// 检查配置是否已初始化
pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}
