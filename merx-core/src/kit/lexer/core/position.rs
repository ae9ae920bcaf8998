//! 源码位置跟踪
//!
//! 同时跟踪几套坐标，不同使用方需要不同的坐标：
//! - line/column：给人看的行列号（从 1 开始）
//! - byte_offset：切分 UTF-8 源码（从 0 开始）
//! - utf16_column：按 UTF-16 单元索引行的编辑器（从 0 开始）

use serde::Serialize;

/// 源码中的一个位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SourcePosition {
    /// 行号，从 1 开始
    pub line: usize,
    /// 列号，从 1 开始，按 Unicode 码点计
    pub column: usize,
    /// UTF-8 源码中的字节偏移，从 0 开始
    pub byte_offset: usize,
    /// 按 UTF-16 码元计的列，从 0 开始
    pub utf16_column: usize,
}

impl SourcePosition {
    pub fn new(line: usize, column: usize, byte_offset: usize, utf16_column: usize) -> Self {
        Self {
            line,
            column,
            byte_offset,
            utf16_column,
        }
    }

    /// 输入起点
    pub fn start() -> Self {
        Self {
            line: 1,
            column: 1,
            byte_offset: 0,
            utf16_column: 0,
        }
    }

    /// 前进一个字符
    ///
    /// 只有 `\n` 开始新行；单独的 `\r` 按普通列计算，
    /// 所以 `\r\n` 只让行号加一。
    pub fn advance(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.column = 1;
            self.utf16_column = 0;
        } else {
            self.column += 1;
            self.utf16_column += c.len_utf16();
        }

        self.byte_offset += c.len_utf8();
    }
}

/// 源码中的半开区间 `start..end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceSpan {
    pub start: SourcePosition,
    pub end: SourcePosition,
}

impl SourceSpan {
    /// 单个位置上的空区间
    pub fn at(pos: SourcePosition) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    pub fn range(start: SourcePosition, end: SourcePosition) -> Self {
        Self { start, end }
    }

    /// 字节长度
    pub fn byte_len(&self) -> usize {
        self.end.byte_offset - self.start.byte_offset
    }
}
