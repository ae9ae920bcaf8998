//! MerX 词法分析：token 类型与构建函数

pub mod builder;
pub mod token_kind;

pub use builder::{build_lexer, tokenize};
pub use token_kind::{TokenKind, UnknownTokenKind};

/// MerX 扫描器产出的 token
pub type Token = crate::kit::lexer::Token<TokenKind>;
