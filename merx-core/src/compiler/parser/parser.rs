use merx_config::LimitConfig;
use tracing::{debug, trace};

use super::error::{ParseResult, ParserError, ParserErrorKind};
use crate::compiler::lexer::{Token, TokenKind};

/// 递归下降语法检查器
///
/// 构造时丢弃空白和注释。游标只向前移动，每次只看一个 token；
/// 第一条失败的规则终止整个检查。
pub struct Parser<'t> {
    tokens: Vec<&'t Token>,
    position: usize,
    depth: usize,
    limits: LimitConfig,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self::with_limits(tokens, LimitConfig::default())
    }

    pub fn with_limits(tokens: &'t [Token], limits: LimitConfig) -> Self {
        let tokens: Vec<_> = tokens.iter().filter(|t| !t.kind.is_trivia()).collect();
        trace!(target: "merx::parser", significant = tokens.len(), "Creating parser");
        Self {
            tokens,
            position: 0,
            depth: 0,
            limits,
        }
    }

    /// 当且仅当序列由零或多条语句组成时接受
    pub fn parse(&mut self) -> bool {
        let result = self.parse_program();
        self.finish(result)
    }

    /// 当且仅当序列恰好是一个 `{ ... }` 块或一条语句时接受
    pub fn parse_block_or_statement(&mut self) -> bool {
        let result = self
            .parse_block_or_stmt()
            .and_then(|()| self.expect_end_of_input());
        self.finish(result)
    }

    /// 已消费的有效 token 数
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    fn finish(&self, result: ParseResult<()>) -> bool {
        match result {
            Ok(()) => {
                debug!(target: "merx::parser", tokens = self.tokens.len(), "Input accepted");
                true
            }
            Err(err) => {
                let (line, column) = self
                    .current()
                    .map(|t| (t.span.start.line, t.span.start.column))
                    .unwrap_or((0, 0));
                debug!(
                    target: "merx::parser",
                    error = %err,
                    consumed = self.position,
                    line,
                    column,
                    "Input rejected"
                );
                false
            }
        }
    }

    fn parse_program(&mut self) -> ParseResult<()> {
        while !self.is_at_end() {
            self.parse_statement()?;
        }
        Ok(())
    }

    fn expect_end_of_input(&self) -> ParseResult<()> {
        if self.is_at_end() {
            Ok(())
        } else {
            Err(self.unexpected("end of input"))
        }
    }

    // ===== Token 辅助方法 =====

    pub(super) fn current(&self) -> Option<&'t Token> {
        self.tokens.get(self.position).copied()
    }

    /// 消费当前 token 并返回
    pub(super) fn consume(&mut self) -> Option<&'t Token> {
        let token = self.current()?;
        self.position += 1;
        Some(token)
    }

    /// 当前 token 是否为指定类型
    pub(super) fn check(&self, kind: TokenKind) -> bool {
        self.current().is_some_and(|t| t.kind == kind)
    }

    /// 当前 token 是否为指定类型且文本一致
    pub(super) fn check_text(&self, kind: TokenKind, text: &str) -> bool {
        self.current().is_some_and(|t| t.kind == kind && t.text == text)
    }

    pub(super) fn check_operator(&self, op: &str) -> bool {
        self.check_text(TokenKind::Operator, op)
    }

    pub(super) fn check_keyword(&self, keyword: &str) -> bool {
        self.check_text(TokenKind::Keyword, keyword)
    }

    /// 当前 token 是运算符 `op` 时消费它
    pub(super) fn match_operator(&mut self, op: &str) -> bool {
        if self.check_operator(op) {
            self.consume();
            true
        } else {
            false
        }
    }

    pub(super) fn expect_operator(&mut self, op: &str) -> ParseResult<()> {
        if self.match_operator(op) {
            Ok(())
        } else {
            Err(self.unexpected(&format!("'{op}'")))
        }
    }

    pub(super) fn expect_keyword(&mut self, keyword: &str) -> ParseResult<()> {
        if self.check_keyword(keyword) {
            self.consume();
            Ok(())
        } else {
            Err(self.unexpected(&format!("'{keyword}'")))
        }
    }

    pub(super) fn expect_identifier(&mut self) -> ParseResult<()> {
        if self.check(TokenKind::Identifier) {
            self.consume();
            Ok(())
        } else {
            Err(self.unexpected("identifier"))
        }
    }

    /// 当前 token 的可读描述
    pub(super) fn found(&self) -> String {
        match self.current() {
            Some(token) => format!("{} '{}'", token.kind, token.text),
            None => "end of input".to_string(),
        }
    }

    pub(super) fn unexpected(&self, expected: &str) -> ParserError {
        ParserError::new(ParserErrorKind::UnexpectedToken {
            expected: expected.to_string(),
            found: self.found(),
        })
    }

    /// 在更深一层嵌套中执行规则
    pub(super) fn nested<T>(
        &mut self,
        rule: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        if self.depth >= self.limits.max_nesting_depth {
            return Err(ParserErrorKind::NestingTooDeep {
                limit: self.limits.max_nesting_depth,
            }
            .into());
        }
        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }
}
