//! CLI 配置
//!
//! 读取 `merx.json`，把其中的日志级别转换为 `tracing` 的级别过滤。

use std::path::Path;

use merx_api::{parse_config, MerxError};
use merx_config::{LogLevel, LoggingConfig, MerxConfig, Phase};
use tracing::level_filters::LevelFilter;

/// 默认配置文件，在工作目录下查找
pub const DEFAULT_CONFIG_FILE: &str = "merx.json";

/// CLI 日志配置，每个阶段都已解析出实际级别
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub global: LevelFilter,
    pub lexer: LevelFilter,
    pub parser: LevelFilter,
    pub highlight: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: LevelFilter::WARN,
            lexer: LevelFilter::WARN,
            parser: LevelFilter::WARN,
            highlight: LevelFilter::WARN,
        }
    }
}

impl From<&LoggingConfig> for LogConfig {
    fn from(config: &LoggingConfig) -> Self {
        Self {
            global: to_level_filter(config.level),
            lexer: to_level_filter(config.level_for(Phase::Lexer)),
            parser: to_level_filter(config.level_for(Phase::Parser)),
            highlight: to_level_filter(config.level_for(Phase::Highlight)),
        }
    }
}

impl LogConfig {
    /// 指定阶段的级别
    pub fn level_for(&self, phase: Phase) -> LevelFilter {
        match phase {
            Phase::Lexer => self.lexer,
            Phase::Parser => self.parser,
            Phase::Highlight => self.highlight,
        }
    }
}

pub fn to_level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Off => LevelFilter::OFF,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Trace => LevelFilter::TRACE,
    }
}

/// 读取配置文件
///
/// 只有显式指定的路径不存在时才报错，否则使用默认配置。
pub fn load_config(path: Option<&Path>) -> Result<MerxConfig, MerxError> {
    let (path, explicit) = match path {
        Some(path) => (path, true),
        None => (Path::new(DEFAULT_CONFIG_FILE), false),
    };

    if !explicit && !path.exists() {
        return Ok(MerxConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}
