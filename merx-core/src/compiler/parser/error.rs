//! 语法拒绝原因
//!
//! 对外的检查只回答是或否。这些错误在递归下降规则之间用 `?` 传递，
//! 最终只出现在一条 debug 日志里。

use thiserror::Error;

/// token 序列被拒绝的原因
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ParserError {
    pub kind: ParserErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParserErrorKind {
    /// 此处需要特定的 token
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },
    /// 当前 token 不能开始一条语句
    #[error("expected a statement, found {found}")]
    ExpectedStatement { found: String },
    /// 当前 token 不能开始一个操作数
    #[error("expected a number, identifier, string or '(', found {found}")]
    ExpectedOperand { found: String },
    /// 块、嵌套语句和括号的深度超过限制
    #[error("nesting exceeds the limit of {limit}")]
    NestingTooDeep { limit: usize },
}

impl ParserError {
    pub fn new(kind: ParserErrorKind) -> Self {
        Self { kind }
    }
}

impl From<ParserErrorKind> for ParserError {
    fn from(kind: ParserErrorKind) -> Self {
        Self::new(kind)
    }
}

pub type ParseResult<T> = Result<T, ParserError>;
