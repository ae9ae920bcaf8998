//! CLI 格式化输出
//!
//! token 列表、主题列表，以及着色行的 ANSI 真彩色渲染。

use std::fmt::Write as _;

use crossterm::style::{Color as TermColor, Stylize};
use merx_api::{Color, ColoredRange, Document, MerxToken, Theme};

fn term_color(color: Color) -> TermColor {
    TermColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// 渲染一行着色结果，透明区间不加颜色
pub fn render_line(text: &str, ranges: &[ColoredRange]) -> String {
    let mut out = String::new();
    for range in ranges {
        let slice = &text[range.range.clone()];
        if range.color.is_transparent() {
            out.push_str(slice);
        } else {
            let _ = write!(out, "{}", slice.with(term_color(range.color)));
        }
    }
    out
}

/// 渲染整个文档，每个源码行输出一行
pub fn render_document(doc: &Document, theme: &Theme, line_numbers: bool) -> Vec<String> {
    let painted = doc.highlight(theme);
    let width = painted.len().to_string().len();

    painted
        .iter()
        .enumerate()
        .map(|(index, ranges)| {
            let line = render_line(doc.text(), ranges);
            if line_numbers {
                format!("{:>width$} | {}", index + 1, line)
            } else {
                line
            }
        })
        .collect()
}

/// 每个 token 输出 `行:列  类型  "文本"`
pub fn print_tokens(tokens: &[MerxToken]) {
    for token in tokens {
        println!("{}", format_token(token));
    }
}

fn format_token(token: &MerxToken) -> String {
    format!(
        "{:>4}:{:<4} {:<10} \"{}\"",
        token.span.start.line,
        token.span.start.column,
        token.kind.as_str(),
        token.text.escape_debug()
    )
}

/// 列出主题并标记当前主题
pub fn print_themes(themes: &[std::sync::Arc<Theme>], active: &str) {
    for theme in themes {
        let marker = if theme.name.eq_ignore_ascii_case(active) { "*" } else { " " };
        println!(
            "{} {:<12} background {}  foreground {}",
            marker, theme.name, theme.background, theme.foreground
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn test_render_keeps_text() {
        let mut doc = Document::new();
        doc.update("int x = 1; // one\nreturn x;");
        let lines = render_document(&doc, &Theme::dark(), false);
        assert_eq!(lines.len(), 2);
        assert_eq!(strip_ansi(&lines[0]), "int x = 1; // one");
        assert_eq!(strip_ansi(&lines[1]), "return x;");
    }

    #[test]
    fn test_line_numbers() {
        let mut doc = Document::new();
        doc.update(&"x;\n".repeat(10));
        let lines = render_document(&doc, &Theme::light(), true);
        assert_eq!(lines.len(), 11);
        assert_eq!(strip_ansi(&lines[0]), " 1 | x;");
        assert_eq!(strip_ansi(&lines[10]), "11 | ");
    }

    #[test]
    fn test_transparent_ranges_are_plain() {
        let mut doc = Document::new();
        doc.update("   ");
        let lines = render_document(&doc, &Theme::dark(), false);
        assert_eq!(lines[0], "   ");
    }

    #[test]
    fn test_format_token() {
        let tokens = merx_api::tokenize("x\n  total");
        assert_eq!(format_token(&tokens[2]), "   2:3    Identifier \"total\"");
        assert_eq!(format_token(&tokens[1]), "   1:2    Whitespace \"\\n  \"");
    }
}
