//! 词法分析工具包
//!
//! 与语言无关的扫描机制（位置、字符流、`Scanner` trait 和 `Lexer` 驱动），
//! 以及在其上实现的 MerX 扫描器。

pub mod core;
pub mod lexer;
pub mod merx;
pub mod scanner;

pub use self::core::{CharStream, SourcePosition, SourceSpan};
pub use lexer::{Lexer, Tokens};
pub use merx::MerxScanner;
pub use scanner::{Scanner, Token, TokenBuilder};
