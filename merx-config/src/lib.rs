//! MerX Config - 纯配置数据结构
//!
//! 本 crate 只包含数据结构，不含逻辑和全局状态，
//! 作为各 MerX crate 共享的配置词汇。
//!
//! 所有结构都带 `#[serde(default)]`，`merx.json` 只需写出要覆盖的字段。

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 日志级别，从最安静到最详细排列
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// 不输出任何日志
    #[serde(alias = "silent")]
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// 解析级别名（不区分大小写），`silent` 是 `off` 的别名
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "off" | "silent" => Some(LogLevel::Off),
            "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// 流水线阶段，用于按阶段过滤日志
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Lexer,
    Parser,
    Highlight,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Lexer, Phase::Parser, Phase::Highlight];

    /// 阶段名
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Lexer => "lexer",
            Phase::Parser => "parser",
            Phase::Highlight => "highlight",
        }
    }

    /// 该阶段的日志 target
    pub fn target(&self) -> String {
        format!("merx::{}", self.as_str())
    }
}

/// 日志配置：全局级别加可选的分阶段覆盖
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub lexer: Option<LogLevel>,
    pub parser: Option<LogLevel>,
    pub highlight: Option<LogLevel>,
}

impl LoggingConfig {
    /// 阶段的实际级别，未覆盖时取全局级别
    pub fn level_for(&self, phase: Phase) -> LogLevel {
        let specific = match phase {
            Phase::Lexer => self.lexer,
            Phase::Parser => self.parser,
            Phase::Highlight => self.highlight,
        };
        specific.unwrap_or(self.level)
    }
}

/// 分析限制
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitConfig {
    /// 语法检查接受的最大嵌套深度（块、嵌套语句、括号）
    pub max_nesting_depth: usize,
}

impl Default for LimitConfig {
    /// 每层嵌套要占用好几个递归帧。256 层在 2 MB 的线程栈上
    /// （测试线程的默认大小）的 debug 构建里仍有余量；更深的输入
    /// 被判为不合法，而不是栈溢出。需要更深嵌套时在 `merx.json`
    /// 的 `limits` 里调大，同时保证调用线程的栈足够。
    fn default() -> Self {
        Self {
            max_nesting_depth: 256,
        }
    }
}

/// 用户自定义配色
///
/// 颜色是字符串（`#RRGGBB`、`#AARRGGBB` 或 `"cyan"` 这样的调色板名），
/// token 类型按名字索引（`"keyword"`、`"comment"` 等）。
/// 校验在 `merx-core` 把配色转换成主题时进行。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub name: String,
    pub background: String,
    pub foreground: String,
    pub colors: BTreeMap<String, String>,
}

/// 高亮配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// 启动时选用的主题名
    pub theme: String,
    /// 在内置预设之外额外注册的配色
    pub themes: Vec<ThemeConfig>,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            theme: "Dark".to_string(),
            themes: Vec::new(),
        }
    }
}

/// 顶层配置，对应 `merx.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MerxConfig {
    pub logging: LoggingConfig,
    pub limits: LimitConfig,
    pub highlight: HighlightConfig,
}

impl MerxConfig {
    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}
