//! API 错误类型

use merx_core::highlight::ThemeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MerxError {
    /// 自定义配色无法转换为主题
    #[error("Theme error: {0}")]
    Theme(#[from] ThemeError),

    #[error("Unknown theme '{name}', available: {}", .available.join(", "))]
    UnknownTheme { name: String, available: Vec<String> },

    #[error("Config already initialized")]
    AlreadyInitialized,

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MerxError {
    /// 出错的阶段
    pub fn phase(&self) -> &'static str {
        match self {
            MerxError::Theme(_) | MerxError::UnknownTheme { .. } => "highlight",
            MerxError::AlreadyInitialized | MerxError::Config(_) => "config",
            MerxError::Io(_) => "io",
        }
    }
}
