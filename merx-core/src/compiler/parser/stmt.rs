//! 语句规则
//!
//! ```text
//! Stmt        := IfStmt | WhileStmt | ReturnStmt | DeclStmt | AssignStmt
//! IfStmt      := 'if' '(' Expr ')' BlockOrStmt ('else' BlockOrStmt)?
//! WhileStmt   := 'while' '(' Expr ')' BlockOrStmt
//! ReturnStmt  := 'return' Expr? ';'
//! DeclStmt    := ('int' | 'string' | 'void') Identifier ('=' Expr)? ';'
//! AssignStmt  := Identifier ('=' Expr)? ';'
//! BlockOrStmt := '{' Stmt* '}' | Stmt
//! ```
//!
//! 单独的 `{ ... }` 只在需要 `BlockOrStmt` 的位置才算块，不能自成一条语句。

use tracing::trace;

use super::error::{ParseResult, ParserErrorKind};
use super::parser::Parser;
use super::utils::is_declaration_keyword;
use crate::compiler::lexer::TokenKind;

impl Parser<'_> {
    pub(super) fn parse_statement(&mut self) -> ParseResult<()> {
        let Some(token) = self.current() else {
            return Err(ParserErrorKind::ExpectedStatement { found: self.found() }.into());
        };

        match token.kind {
            TokenKind::Keyword => match token.text.as_str() {
                "if" => self.parse_if_statement(),
                "while" => self.parse_while_statement(),
                "return" => self.parse_return_statement(),
                text if is_declaration_keyword(text) => self.parse_declaration(),
                _ => Err(ParserErrorKind::ExpectedStatement { found: self.found() }.into()),
            },
            TokenKind::Identifier => self.parse_assignment(),
            _ => Err(ParserErrorKind::ExpectedStatement { found: self.found() }.into()),
        }
    }

    fn parse_if_statement(&mut self) -> ParseResult<()> {
        trace!(target: "merx::parser", "Parsing if statement");
        self.expect_keyword("if")?;
        self.parse_condition()?;
        self.parse_block_or_stmt()?;

        if self.check_keyword("else") {
            self.consume();
            self.parse_block_or_stmt()?;
        }
        Ok(())
    }

    fn parse_while_statement(&mut self) -> ParseResult<()> {
        trace!(target: "merx::parser", "Parsing while statement");
        self.expect_keyword("while")?;
        self.parse_condition()?;
        self.parse_block_or_stmt()
    }

    /// `'(' Expr ')'`
    fn parse_condition(&mut self) -> ParseResult<()> {
        self.expect_operator("(")?;
        self.parse_expression()?;
        self.expect_operator(")")
    }

    /// 只要下一个 token 是任意运算符，就视为没有表达式，
    /// 因此 `return (x);` 和 `return -1;` 会被拒绝。
    fn parse_return_statement(&mut self) -> ParseResult<()> {
        trace!(target: "merx::parser", "Parsing return statement");
        self.expect_keyword("return")?;
        if self.current().is_some() && !self.check(TokenKind::Operator) {
            self.parse_expression()?;
        }
        self.expect_operator(";")
    }

    fn parse_declaration(&mut self) -> ParseResult<()> {
        trace!(target: "merx::parser", "Parsing declaration");
        // 调用方已检查过类型关键字
        self.consume();
        self.expect_identifier()?;
        self.parse_initializer()?;
        self.expect_operator(";")
    }

    fn parse_assignment(&mut self) -> ParseResult<()> {
        trace!(target: "merx::parser", "Parsing assignment");
        self.expect_identifier()?;
        self.parse_initializer()?;
        self.expect_operator(";")
    }

    /// 可选的 `'=' Expr`
    fn parse_initializer(&mut self) -> ParseResult<()> {
        if self.match_operator("=") {
            self.parse_expression()?;
        }
        Ok(())
    }

    pub(super) fn parse_block_or_stmt(&mut self) -> ParseResult<()> {
        self.nested(|parser| {
            if parser.match_operator("{") {
                while parser.current().is_some() && !parser.check_operator("}") {
                    parser.parse_statement()?;
                }
                parser.expect_operator("}")
            } else {
                parser.parse_statement()
            }
        })
    }
}
