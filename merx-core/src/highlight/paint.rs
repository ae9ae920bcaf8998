//! 逐行着色
//!
//! 把 token 序列转换成逐行的着色区间。跨多行的 token（块注释、多行字符串）
//! 会按它触及的每一行裁剪，因此每行都能单独绘制。

use std::ops::Range;

use serde::Serialize;
use tracing::trace;

use super::color::Color;
use super::theme::Theme;
use crate::compiler::lexer::{Token, TokenKind};

/// 一行中以同一颜色绘制的字节区间
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColoredRange {
    pub range: Range<usize>,
    pub kind: TokenKind,
    #[serde(serialize_with = "serialize_color")]
    pub color: Color,
}

fn serialize_color<S: serde::Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&color.to_hex())
}

/// `text` 各行的字节区间，不含换行符
///
/// `\n`、`\r\n` 和单独的 `\r` 都结束一行。至少有一行，
/// 末尾的换行符会再开一个空行。
pub fn line_ranges(text: &str) -> Vec<Range<usize>> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(start..i);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(start..i);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }

    lines.push(start..bytes.len());
    lines
}

/// 为与 `line` 相交的每个 token 着色，并裁剪到该行
///
/// `tokens` 必须是词法分析产出的连续序列；第一个相交的 token
/// 用二分查找定位。
pub fn paint_line(tokens: &[Token], line: Range<usize>, theme: &Theme) -> Vec<ColoredRange> {
    let first = tokens.partition_point(|t| t.end() <= line.start);

    tokens[first..]
        .iter()
        .take_while(|t| t.start() < line.end)
        .filter_map(|t| {
            let start = t.start().max(line.start);
            let end = t.end().min(line.end);
            (start < end).then(|| ColoredRange {
                range: start..end,
                kind: t.kind,
                color: theme.color_for(t.kind),
            })
        })
        .collect()
}

/// 为 `text` 的每一行着色
pub fn paint(text: &str, tokens: &[Token], theme: &Theme) -> Vec<Vec<ColoredRange>> {
    let lines = line_ranges(text);
    trace!(
        target: "merx::highlight",
        theme = %theme.name,
        lines = lines.len(),
        tokens = tokens.len(),
        "Painting"
    );
    lines
        .into_iter()
        .map(|line| paint_line(tokens, line, theme))
        .collect()
}
