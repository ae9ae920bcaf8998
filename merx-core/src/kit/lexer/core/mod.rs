//! 词法分析基础组件：位置与字符流

mod position;
mod stream;

pub use position::{SourcePosition, SourceSpan};
pub use stream::CharStream;
