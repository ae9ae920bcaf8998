//! MerX 语言扫描器
//!
//! 每个位置按以下顺序分类：
//! - 连续空白
//! - `//` 行注释与 `/* */` 块注释
//! - 标识符与关键字
//! - 数字（`123`、`1.5`、`1.`），任意 Unicode 十进制数字
//! - 双引号字符串，支持反斜杠转义
//! - 运算符，复合运算符优先
//! - 其余字符各自成为单字符 `Unknown` token
//!
//! 扫描器不会失败。未闭合的字符串和块注释一直延伸到输入末尾。

use std::collections::HashSet;

use once_cell::sync::Lazy;
use tracing::trace;

use super::core::CharStream;
use super::scanner::{
    is_decimal_digit, is_identifier_continue, is_identifier_start, Scanner, Token, TokenBuilder,
};
use crate::compiler::lexer::token_kind::TokenKind;

/// 保留字
pub static KEYWORDS: [&str; 27] = [
    "if", "else", "while", "for", "return", "int", "string", "void", "class", "public", "private",
    "static", "new", "this", "null", "true", "false", "break", "continue", "switch", "case",
    "default", "try", "catch", "finally", "throw", "bool",
];

/// 运算符的首字符
pub static OPERATOR_CHARS: [char; 18] = [
    '+', '-', '*', '/', '=', '>', '<', '!', '&', '|', ';', '(', ')', '{', '}', '[', ']', ',',
];

/// 双字符运算符，先于单字符匹配
pub static COMPOUND_OPERATORS: [&str; 12] = [
    "==", "!=", ">=", "<=", "&&", "||", "++", "--", "+=", "-=", "*=", "/=",
];

static KEYWORD_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| KEYWORDS.iter().copied().collect());

pub fn is_keyword(text: &str) -> bool {
    KEYWORD_SET.contains(text)
}

pub fn is_operator_char(c: char) -> bool {
    OPERATOR_CHARS.contains(&c)
}

/// MerX 源码扫描器
#[derive(Debug, Default)]
pub struct MerxScanner;

impl Scanner for MerxScanner {
    type TokenKind = TokenKind;

    fn next_token(&mut self, stream: &mut CharStream<'_>) -> Option<Token<TokenKind>> {
        let c = stream.peek(0)?;

        let token = match c {
            c if c.is_whitespace() => self.scan_whitespace(stream),
            '/' if matches!(stream.peek(1), Some('/')) => self.scan_line_comment(stream),
            '/' if matches!(stream.peek(1), Some('*')) => self.scan_block_comment(stream),
            c if is_identifier_start(c) => self.scan_identifier_or_keyword(stream),
            c if is_decimal_digit(c) => self.scan_number(stream),
            '"' => self.scan_string(stream),
            c if is_operator_char(c) => self.scan_operator(stream),
            _ => self.scan_unknown(stream),
        };

        trace!(
            target: "merx::lexer",
            kind = token.kind.as_str(),
            text = %token.text.escape_debug(),
            line = token.span.start.line,
            column = token.span.start.column,
            "Scanned token"
        );
        Some(token)
    }
}

impl MerxScanner {
    fn scan_whitespace(&mut self, stream: &mut CharStream<'_>) -> Token<TokenKind> {
        let builder = TokenBuilder::new(TokenKind::Whitespace, stream.position());
        stream.advance_while(char::is_whitespace);
        builder.finish(stream)
    }

    /// `//` 直到换行符（不含）
    fn scan_line_comment(&mut self, stream: &mut CharStream<'_>) -> Token<TokenKind> {
        let builder = TokenBuilder::new(TokenKind::Comment, stream.position());
        stream.advance_while(|c| c != '\n' && c != '\r');
        builder.finish(stream)
    }

    /// `/*` 到第一个 `*/`，或到输入末尾
    fn scan_block_comment(&mut self, stream: &mut CharStream<'_>) -> Token<TokenKind> {
        let builder = TokenBuilder::new(TokenKind::Comment, stream.position());
        stream.advance();
        stream.advance();

        loop {
            if stream.starts_with("*/") {
                stream.advance();
                stream.advance();
                break;
            }
            if stream.advance().is_none() {
                trace!(target: "merx::lexer", "Unterminated block comment");
                break;
            }
        }

        builder.finish(stream)
    }

    fn scan_identifier_or_keyword(&mut self, stream: &mut CharStream<'_>) -> Token<TokenKind> {
        let mut builder = TokenBuilder::new(TokenKind::Identifier, stream.position());
        stream.advance_while(is_identifier_continue);
        if is_keyword(stream.slice_from(builder.start())) {
            builder.set_kind(TokenKind::Keyword);
        }
        builder.finish(stream)
    }

    /// 数字串，可选 `.` 加小数部分；`.` 后没有数字时也吞掉 `.`
    fn scan_number(&mut self, stream: &mut CharStream<'_>) -> Token<TokenKind> {
        let builder = TokenBuilder::new(TokenKind::Number, stream.position());
        stream.advance_while(is_decimal_digit);
        if stream.check('.') {
            stream.advance();
            stream.advance_while(is_decimal_digit);
        }
        builder.finish(stream)
    }

    /// 反斜杠吞掉下一个字符，不论是什么；引号计入 token 文本
    fn scan_string(&mut self, stream: &mut CharStream<'_>) -> Token<TokenKind> {
        let builder = TokenBuilder::new(TokenKind::String, stream.position());
        stream.advance();

        loop {
            match stream.advance() {
                Some('"') => break,
                Some('\\') => {
                    stream.advance();
                }
                Some(_) => {}
                None => {
                    trace!(target: "merx::lexer", "Unterminated string literal");
                    break;
                }
            }
        }

        builder.finish(stream)
    }

    fn scan_operator(&mut self, stream: &mut CharStream<'_>) -> Token<TokenKind> {
        let builder = TokenBuilder::new(TokenKind::Operator, stream.position());
        let compound = COMPOUND_OPERATORS.iter().any(|op| stream.starts_with(op));

        stream.advance();
        if compound {
            stream.advance();
        }
        builder.finish(stream)
    }

    fn scan_unknown(&mut self, stream: &mut CharStream<'_>) -> Token<TokenKind> {
        let builder = TokenBuilder::new(TokenKind::Unknown, stream.position());
        stream.advance();
        builder.finish(stream)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_all(input: &str) -> Vec<(TokenKind, String)> {
        let mut scanner = MerxScanner;
        let mut stream = CharStream::new(input);
        let mut tokens = Vec::new();
        while let Some(token) = scanner.next_token(&mut stream) {
            tokens.push((token.kind, token.text));
        }
        tokens
    }

    fn kinds(input: &str) -> Vec<TokenKind> {
        scan_all(input).into_iter().map(|(k, _)| k).collect()
    }

    #[test]
    fn test_keyword_table_is_consistent() {
        assert_eq!(KEYWORD_SET.len(), KEYWORDS.len());
        assert!(is_keyword("bool"));
        assert!(!is_keyword("Int"));
    }

    #[test]
    fn test_every_compound_operator_starts_with_operator_char() {
        for op in COMPOUND_OPERATORS {
            for c in op.chars() {
                assert!(is_operator_char(c), "{op}");
            }
        }
    }

    #[test]
    fn test_whitespace_run_is_one_token() {
        let tokens = scan_all(" \t\r\n  x");
        assert_eq!(tokens[0], (TokenKind::Whitespace, " \t\r\n  ".to_string()));
        assert_eq!(tokens[1], (TokenKind::Identifier, "x".to_string()));
    }

    #[test]
    fn test_keyword_vs_identifier() {
        assert_eq!(kinds("int"), vec![TokenKind::Keyword]);
        assert_eq!(kinds("intx"), vec![TokenKind::Identifier]);
        assert_eq!(kinds("_int"), vec![TokenKind::Identifier]);
        assert_eq!(kinds("int2"), vec![TokenKind::Identifier]);
    }

    #[test]
    fn test_unicode_identifier() {
        let tokens = scan_all("变量1");
        assert_eq!(tokens, vec![(TokenKind::Identifier, "变量1".to_string())]);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(scan_all("42"), vec![(TokenKind::Number, "42".to_string())]);
        assert_eq!(scan_all("3.14"), vec![(TokenKind::Number, "3.14".to_string())]);
        assert_eq!(scan_all("1."), vec![(TokenKind::Number, "1.".to_string())]);

        // 只有一段小数
        let tokens = scan_all("1.2.3");
        assert_eq!(tokens[0], (TokenKind::Number, "1.2".to_string()));
        assert_eq!(tokens[1], (TokenKind::Unknown, ".".to_string()));
        assert_eq!(tokens[2], (TokenKind::Number, "3".to_string()));
    }

    #[test]
    fn test_unicode_digits() {
        assert_eq!(scan_all("\u{0663}"), vec![(TokenKind::Number, "\u{0663}".to_string())]);
        assert_eq!(
            scan_all("\u{0661}.\u{0665}"),
            vec![(TokenKind::Number, "\u{0661}.\u{0665}".to_string())]
        );
        assert_eq!(scan_all("x\u{0663}"), vec![(TokenKind::Identifier, "x\u{0663}".to_string())]);
        // 上标数字属于 No 类别，不是十进制数字
        assert_eq!(kinds("\u{00B2}"), vec![TokenKind::Unknown]);
    }

    #[test]
    fn test_non_letters_do_not_start_identifiers() {
        assert_eq!(scan_all("\u{216B}"), vec![(TokenKind::Unknown, "\u{216B}".to_string())]);
        assert_eq!(
            kinds("x\u{0301}"),
            vec![TokenKind::Identifier, TokenKind::Unknown]
        );
    }

    #[test]
    fn test_number_followed_by_letters() {
        assert_eq!(kinds("12ab"), vec![TokenKind::Number, TokenKind::Identifier]);
    }

    #[test]
    fn test_line_comment_stops_before_newline() {
        let tokens = scan_all("// hi\nx");
        assert_eq!(tokens[0], (TokenKind::Comment, "// hi".to_string()));
        assert_eq!(tokens[1], (TokenKind::Whitespace, "\n".to_string()));

        let tokens = scan_all("// hi\r\nx");
        assert_eq!(tokens[0], (TokenKind::Comment, "// hi".to_string()));
        assert_eq!(tokens[1], (TokenKind::Whitespace, "\r\n".to_string()));
    }

    #[test]
    fn test_block_comment() {
        let tokens = scan_all("/* a\n b */x");
        assert_eq!(tokens[0], (TokenKind::Comment, "/* a\n b */".to_string()));
        assert_eq!(tokens[1], (TokenKind::Identifier, "x".to_string()));
    }

    #[test]
    fn test_unterminated_block_comment_consumes_rest() {
        let tokens = scan_all("x /* never closed");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[2], (TokenKind::Comment, "/* never closed".to_string()));
    }

    #[test]
    fn test_block_comment_shortest_close() {
        assert_eq!(scan_all("/**/")[0], (TokenKind::Comment, "/**/".to_string()));
        // `/*/` 不会自我闭合
        assert_eq!(scan_all("/*/"), vec![(TokenKind::Comment, "/*/".to_string())]);
    }

    #[test]
    fn test_slash_operators() {
        assert_eq!(scan_all("/"), vec![(TokenKind::Operator, "/".to_string())]);
        assert_eq!(scan_all("/="), vec![(TokenKind::Operator, "/=".to_string())]);
    }

    #[test]
    fn test_strings() {
        assert_eq!(scan_all(r#""abc""#), vec![(TokenKind::String, r#""abc""#.to_string())]);
        assert_eq!(scan_all(r#""a\"b""#), vec![(TokenKind::String, r#""a\"b""#.to_string())]);
        assert_eq!(scan_all("\"abc"), vec![(TokenKind::String, "\"abc".to_string())]);
        // 反斜杠位于输入末尾
        assert_eq!(scan_all("\"ab\\"), vec![(TokenKind::String, "\"ab\\".to_string())]);
    }

    #[test]
    fn test_string_spans_lines() {
        let tokens = scan_all("\"a\nb\" c");
        assert_eq!(tokens[0], (TokenKind::String, "\"a\nb\"".to_string()));
    }

    #[test]
    fn test_compound_operators() {
        for op in COMPOUND_OPERATORS {
            assert_eq!(scan_all(op), vec![(TokenKind::Operator, op.to_string())]);
        }
    }

    #[test]
    fn test_operator_greediness() {
        let tokens = scan_all("===");
        assert_eq!(tokens[0], (TokenKind::Operator, "==".to_string()));
        assert_eq!(tokens[1], (TokenKind::Operator, "=".to_string()));

        let tokens = scan_all("=!");
        assert_eq!(tokens[0], (TokenKind::Operator, "=".to_string()));
        assert_eq!(tokens[1], (TokenKind::Operator, "!".to_string()));
    }

    #[test]
    fn test_non_compound_pairs_split() {
        assert_eq!(kinds("->"), vec![TokenKind::Operator, TokenKind::Operator]);
        assert_eq!(kinds("*/"), vec![TokenKind::Operator, TokenKind::Operator]);
    }

    #[test]
    fn test_unknown_chars() {
        let tokens = scan_all("@#.");
        assert_eq!(
            tokens,
            vec![
                (TokenKind::Unknown, "@".to_string()),
                (TokenKind::Unknown, "#".to_string()),
                (TokenKind::Unknown, ".".to_string()),
            ]
        );
        assert_eq!(scan_all("\0"), vec![(TokenKind::Unknown, "\0".to_string())]);
    }

    #[test]
    fn test_empty_input() {
        assert!(scan_all("").is_empty());
    }
}
