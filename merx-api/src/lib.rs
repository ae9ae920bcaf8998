//! MerX API - 分析编排层
//!
//! 提供统一的分析接口，包括：
//! - 词法分析 + 语法检查流水线（`analyze`）
//! - 配置抽象（RunConfig）
//! - 进程级主题选择
//! - 供编辑器前端使用的无界面文档模型
//! - 统一错误处理（MerxError）
//!
//! 为方便 CLI，本 crate 提供全局单例配置。
//! 作为库使用时，优先使用显式的 `analyze(source, &config)`。

use merx_core::compiler::lexer::{self, Token};
use merx_core::compiler::parser::Parser;
use tracing::debug;

pub mod config;
pub use config::{config as get_config, init as init_config, is_initialized, RunConfig};

pub mod document;
pub mod error;
pub mod theme;
pub mod types;

pub use document::Document;
pub use error::MerxError;
pub use theme::{
    apply_highlight_config, current_theme, find_theme, register_theme, register_theme_configs,
    theme_names, use_preset, use_theme,
};
pub use types::Analysis;

// 重新导出配置和核心类型
pub use merx_config::{
    HighlightConfig, LimitConfig, LogLevel, LoggingConfig, MerxConfig, Phase, ThemeConfig,
};
pub use merx_core::highlight::{Color, ColoredRange, Theme, ThemeRegistry};
pub use merx_core::{Token as MerxToken, TokenKind};

/// 用显式配置对 `source` 做词法分析和语法检查
pub fn analyze(source: &str, config: &RunConfig) -> Analysis {
    let tokens = lexer::tokenize(source);
    let valid = Parser::with_limits(&tokens, config.limits).parse();
    debug!(
        target: "merx::api",
        tokens = tokens.len(),
        valid,
        "Analysis finished"
    );
    Analysis { tokens, valid }
}

/// 对 `source` 做词法分析
pub fn tokenize(source: &str) -> Vec<Token> {
    lexer::tokenize(source)
}

/// 用全局配置检查 `source`
pub fn check(source: &str) -> bool {
    analyze(source, get_config()).valid
}

/// 用默认配置分析
pub fn quick_analyze(source: &str) -> Analysis {
    analyze(source, &RunConfig::default())
}

/// 解析 `merx.json` 内容
pub fn parse_config(json: &str) -> Result<MerxConfig, MerxError> {
    Ok(MerxConfig::from_json_str(json)?)
}
