//! MerX Core - 词法分析、语法检查与高亮着色（纯逻辑，无 IO）
//!
//! 只操作内存中的数据结构，不做文件 IO，也不输出到终端。
//!
//! 配置通过参数显式传入，不依赖全局状态。

pub mod compiler;
pub mod highlight;
pub mod kit;

// 重新导出常用类型
pub use compiler::lexer::{tokenize, Token, TokenKind};
pub use compiler::parser::{check, check_with_limits, Parser};
pub use highlight::{Color, Theme, ThemeRegistry};

// 重新导出 merx-config 的配置类型
pub use merx_config::{LimitConfig, Phase};
