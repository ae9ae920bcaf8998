//! 词法分析器构建

use super::Token;
use crate::kit::lexer::Lexer;

/// 为一份文本快照创建 MerX 词法分析器
pub fn build_lexer(text: impl Into<String>) -> Lexer {
    Lexer::new(text)
}

/// 对全文做词法分析；每个字符恰好落在一个 token 里
pub fn tokenize(text: &str) -> Vec<Token> {
    build_lexer(text).tokenize()
}
