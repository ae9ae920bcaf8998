//! MerX 前端：词法分析与语法检查

pub mod lexer;
pub mod parser;
