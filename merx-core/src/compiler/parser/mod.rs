pub mod error;
pub mod expr;
pub mod parser;
pub mod stmt;
mod utils;

pub use error::{ParseResult, ParserError, ParserErrorKind};
pub use parser::Parser;

use crate::compiler::lexer::Token;
use merx_config::LimitConfig;

/// `tokens` 是否构成合法程序
pub fn check(tokens: &[Token]) -> bool {
    Parser::new(tokens).parse()
}

/// 带显式嵌套限制的 [`check`]
pub fn check_with_limits(tokens: &[Token], limits: LimitConfig) -> bool {
    Parser::with_limits(tokens, limits).parse()
}
