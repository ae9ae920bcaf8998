//! 集成测试共用的辅助函数

#![allow(dead_code)]

use merx_core::compiler::lexer::{tokenize, Token, TokenKind};
use merx_core::compiler::parser::Parser;

/// 词法分析，只保留 `(kind, text)`
pub fn lex(source: &str) -> Vec<(TokenKind, String)> {
    tokenize(source)
        .into_iter()
        .map(|t| (t.kind, t.text))
        .collect()
}

/// 词法分析并去掉空白和注释
pub fn significant(source: &str) -> Vec<(TokenKind, String)> {
    lex(source)
        .into_iter()
        .filter(|(kind, _)| !kind.is_trivia())
        .collect()
}

/// 对 `source` 跑完整语法检查
pub fn accepts(source: &str) -> bool {
    let tokens = tokenize(source);
    Parser::new(&tokens).parse()
}

/// 把 `source` 当作单个块或语句检查
pub fn accepts_block(source: &str) -> bool {
    let tokens = tokenize(source);
    Parser::new(&tokens).parse_block_or_statement()
}

/// 断言 token 序列恰好无缝覆盖 `source`
pub fn assert_contiguous(source: &str, tokens: &[Token]) {
    let mut offset = 0;
    for (i, token) in tokens.iter().enumerate() {
        assert_eq!(token.start(), offset, "token {i} ({:?}) starts at a gap", token.text);
        assert!(!token.is_empty(), "token {i} is empty");
        assert_eq!(&source[token.range()], token.text);
        offset = token.end();
    }
    assert_eq!(offset, source.len(), "tokens stop before end of input");
}
