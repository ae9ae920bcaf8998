//! 扫描器 trait
//!
//! 扫描器把 [`CharStream`] 接下来的一段切成一个 token。
//! [`Lexer`](super::Lexer) 只负责驱动循环，语言规则全部在扫描器实现里。

use super::core::{CharStream, SourcePosition, SourceSpan};
use serde::Serialize;
use std::ops::Range;
use unicode_general_category::{get_general_category, GeneralCategory};

pub trait Scanner: Default {
    /// 扫描器产出的 token 类型
    type TokenKind: Copy + PartialEq + std::fmt::Debug;

    /// 扫描下一个 token
    ///
    /// 仅在输入结束时返回 `None`；返回 `Some` 时至少消费一个字符。
    fn next_token(&mut self, stream: &mut CharStream<'_>) -> Option<Token<Self::TokenKind>>;
}

/// 字母：Lu / Ll / Lt / Lm / Lo 类别
pub fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// 十进制数字：Nd 类别，不只是 ASCII
pub fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit() || matches!(get_general_category(c), GeneralCategory::DecimalNumber)
}

/// 标识符首字符：字母或 `_`
pub fn is_identifier_start(c: char) -> bool {
    is_letter(c) || c == '_'
}

/// 标识符后续字符：字母、十进制数字或 `_`
pub fn is_identifier_continue(c: char) -> bool {
    is_letter(c) || is_decimal_digit(c) || c == '_'
}

/// 带分类和位置的源码片段
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token<K> {
    pub kind: K,
    /// token 对应的原始文本
    pub text: String,
    pub span: SourceSpan,
}

impl<K> Token<K> {
    pub fn new(kind: K, span: SourceSpan, text: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            text: text.into(),
        }
    }

    /// 首字符的字节偏移
    pub fn start(&self) -> usize {
        self.span.start.byte_offset
    }

    /// 末字符之后的字节偏移
    pub fn end(&self) -> usize {
        self.span.end.byte_offset
    }

    /// 字节长度
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn range(&self) -> Range<usize> {
        self.start()..self.end()
    }

    /// 是否与半开字节区间 `range` 重叠
    pub fn intersects(&self, range: &Range<usize>) -> bool {
        self.start() < range.end && self.end() > range.start
    }
}

/// 扫描器辅助：记住 token 的起点
pub struct TokenBuilder<K> {
    kind: K,
    start: SourcePosition,
}

impl<K> TokenBuilder<K> {
    pub fn new(kind: K, start: SourcePosition) -> Self {
        Self { kind, start }
    }

    pub fn start(&self) -> SourcePosition {
        self.start
    }

    /// 结束前改写类型，例如标识符改为关键字
    pub fn set_kind(&mut self, kind: K) {
        self.kind = kind;
    }

    /// 在流的当前位置结束 token
    pub fn finish(self, stream: &CharStream<'_>) -> Token<K> {
        let text = stream.slice_from(self.start);
        Token::new(self.kind, SourceSpan::range(self.start, stream.position()), text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum TestToken {
        Word,
    }

    #[test]
    fn test_token_builder_captures_text() {
        let mut stream = CharStream::new("hello world");
        let builder = TokenBuilder::new(TestToken::Word, stream.position());
        stream.advance_while(|c| c.is_alphabetic());
        let token = builder.finish(&stream);

        assert_eq!(token.kind, TestToken::Word);
        assert_eq!(token.text, "hello");
        assert_eq!(token.start(), 0);
        assert_eq!(token.end(), 5);
        assert_eq!(token.len(), 5);
        assert_eq!(token.range(), 0..5);
    }

    #[test]
    fn test_character_classes() {
        assert!(is_identifier_start('a'));
        assert!(is_identifier_start('变'));
        assert!(is_identifier_start('_'));
        // 字母型数字（Nl）和组合附加符（Mn）都不是字母
        assert!(!is_identifier_start('\u{216B}'));
        assert!(!is_identifier_start('\u{0301}'));
        assert!(!is_identifier_continue('\u{0301}'));

        assert!(is_decimal_digit('7'));
        assert!(is_decimal_digit('\u{0663}'));
        assert!(is_decimal_digit('\u{FF15}'));
        assert!(!is_decimal_digit('\u{00B2}'));
        assert!(!is_decimal_digit('\u{216B}'));
        assert!(is_identifier_continue('\u{0663}'));
    }

    #[test]
    fn test_intersects() {
        let mut stream = CharStream::new("ab\ncd");
        stream.advance();
        let builder = TokenBuilder::new(TestToken::Word, stream.position());
        stream.advance_while(|c| c != 'd');
        let token = builder.finish(&stream); // "b\nc"，字节 1..4

        assert!(token.intersects(&(0..2)));
        assert!(token.intersects(&(3..5)));
        assert!(!token.intersects(&(0..1)));
        assert!(!token.intersects(&(4..5)));
    }
}
