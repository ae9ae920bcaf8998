//! 表达式规则
//!
//! ```text
//! Expr   := Term (('+' | '-' | '==' | '!=' | '>' | '<' | '>=' | '<=') Term)*
//! Term   := Factor (('*' | '/') Factor)*
//! Factor := Number | Identifier | String | '(' Expr ')'
//! ```

use super::error::{ParseResult, ParserErrorKind};
use super::parser::Parser;
use super::utils::{is_expression_operator, is_term_operator};
use crate::compiler::lexer::TokenKind;

impl Parser<'_> {
    pub(super) fn parse_expression(&mut self) -> ParseResult<()> {
        self.parse_term()?;
        while self.check_binary(is_expression_operator) {
            self.consume();
            self.parse_term()?;
        }
        Ok(())
    }

    fn parse_term(&mut self) -> ParseResult<()> {
        self.parse_factor()?;
        while self.check_binary(is_term_operator) {
            self.consume();
            self.parse_factor()?;
        }
        Ok(())
    }

    fn parse_factor(&mut self) -> ParseResult<()> {
        match self.current() {
            Some(token)
                if matches!(
                    token.kind,
                    TokenKind::Number | TokenKind::Identifier | TokenKind::String
                ) =>
            {
                self.consume();
                Ok(())
            }
            Some(_) if self.check_operator("(") => self.nested(|parser| {
                parser.consume();
                parser.parse_expression()?;
                parser.expect_operator(")")
            }),
            _ => Err(ParserErrorKind::ExpectedOperand { found: self.found() }.into()),
        }
    }

    fn check_binary(&self, is_operator: fn(&str) -> bool) -> bool {
        self.current()
            .is_some_and(|t| t.kind == TokenKind::Operator && is_operator(&t.text))
    }
}
