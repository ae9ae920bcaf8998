//! 字符流
//!
//! 借用 `&str` 的只进游标，带位置跟踪和有限的前瞻。每次扫描都创建自己的流，
//! 词法分析器不会在两次扫描之间保留游标状态。

use super::position::SourcePosition;

pub struct CharStream<'a> {
    source: &'a str,
    position: SourcePosition,
}

impl<'a> CharStream<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: SourcePosition::start(),
        }
    }

    /// 当前位置（下一个要消费的字符）
    pub fn position(&self) -> SourcePosition {
        self.position
    }

    pub fn is_eof(&self) -> bool {
        self.position.byte_offset >= self.source.len()
    }

    /// 尚未消费的剩余输入
    pub fn rest(&self) -> &'a str {
        &self.source[self.position.byte_offset..]
    }

    /// 查看前方第 `offset` 个字符，不消费
    pub fn peek(&self, offset: usize) -> Option<char> {
        self.rest().chars().nth(offset)
    }

    /// 下一个字符是否为 `expected`
    pub fn check(&self, expected: char) -> bool {
        self.peek(0) == Some(expected)
    }

    /// 剩余输入是否以 `prefix` 开头
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    /// 消费一个字符
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek(0)?;
        self.position.advance(c);
        Some(c)
    }

    /// 在 `pred` 成立时持续消费，返回消费的字符数
    pub fn advance_while(&mut self, mut pred: impl FnMut(char) -> bool) -> usize {
        let mut count = 0;
        while let Some(c) = self.peek(0) {
            if !pred(c) {
                break;
            }
            self.position.advance(c);
            count += 1;
        }
        count
    }

    /// `start` 到当前位置之间的源码
    pub fn slice_from(&self, start: SourcePosition) -> &'a str {
        &self.source[start.byte_offset..self.position.byte_offset]
    }
}
