//! MerX - 小型类 C 语言的语法检查与高亮
//!
//! # 架构
//!
//! ```text
//! merx-config/  - 纯配置数据（serde 类型）
//! merx-core/    - 词法分析、语法检查、主题与着色（无 IO）
//! merx-api/     - 分析流水线、当前主题、文档模型
//! merx-cli/     - `merx` 可执行文件
//! ```
//!
//! # 快速开始
//!
//! ```
//! use merx_workspace::{quick_analyze, Theme, TokenKind};
//!
//! let analysis = quick_analyze("int x = 1 + 2;");
//! assert!(analysis.valid);
//! assert_eq!(analysis.tokens[0].kind, TokenKind::Keyword);
//! # let _ = Theme::dark();
//! ```

pub use merx_api::*;
