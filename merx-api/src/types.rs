//! API 结果类型

use merx_core::compiler::lexer::{Token, TokenKind};
use serde::Serialize;

/// 对一份文本快照跑完整条流水线的结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    /// 覆盖全文的所有 token，包括空白和注释
    pub tokens: Vec<Token>,
    /// 语法检查是否接受该文本
    pub valid: bool,
}

/// 空文本的分析结果：没有 token，判为合法
impl Default for Analysis {
    fn default() -> Self {
        Self {
            tokens: Vec::new(),
            valid: true,
        }
    }
}

impl Analysis {
    /// 语法检查实际看到的 token
    pub fn significant_tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| !t.kind.is_trivia())
    }

    pub fn count(&self, kind: TokenKind) -> usize {
        self.tokens.iter().filter(|t| t.kind == kind).count()
    }
}
