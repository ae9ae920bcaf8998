//! 词法分析入口
//!
//! 词法分析器持有一份文本快照。每次调用 [`Lexer::tokenize`] 或 [`Lexer::tokens`]
//! 都从偏移 0 新建一个 [`CharStream`]，各次扫描互不影响，词法分析器本身也不会被修改。
//!
//! ```rust
//! use merx_core::kit::lexer::Lexer;
//! use merx_core::compiler::lexer::TokenKind;
//!
//! let lexer: Lexer = Lexer::new("int x;");
//! let kinds: Vec<_> = lexer.tokens().map(|t| t.kind).collect();
//! assert_eq!(kinds[0], TokenKind::Keyword);
//! ```

use std::marker::PhantomData;

use tracing::debug;

use super::core::CharStream;
use super::merx::MerxScanner;
use super::scanner::{Scanner, Token};

pub struct Lexer<S: Scanner = MerxScanner> {
    text: String,
    _scanner: PhantomData<S>,
}

impl<S: Scanner> Lexer<S> {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            _scanner: PhantomData,
        }
    }

    /// 被扫描的文本快照
    pub fn text(&self) -> &str {
        &self.text
    }

    /// 扫描全文
    pub fn tokenize(&self) -> Vec<Token<S::TokenKind>> {
        let tokens: Vec<_> = self.tokens().collect();
        debug!(
            target: "merx::lexer",
            bytes = self.text.len(),
            tokens = tokens.len(),
            "Tokenized input"
        );
        tokens
    }

    /// 惰性扫描，每次 `next()` 产出一个 token
    pub fn tokens(&self) -> Tokens<'_, S> {
        Tokens {
            scanner: S::default(),
            stream: CharStream::new(&self.text),
        }
    }
}

/// [`Lexer::tokens`] 返回的迭代器
pub struct Tokens<'a, S: Scanner> {
    scanner: S,
    stream: CharStream<'a>,
}

impl<S: Scanner> Iterator for Tokens<'_, S> {
    type Item = Token<S::TokenKind>;

    fn next(&mut self) -> Option<Self::Item> {
        self.scanner.next_token(&mut self.stream)
    }
}
