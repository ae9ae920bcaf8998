//! 无界面的编辑器文档
//!
//! 对应编辑器窗口每次按键时做的事：取新文本，重跑整条流水线，
//! 覆盖上一份快照。着色只读取已存的 token，不会重新词法分析。

use merx_core::compiler::lexer::Token;
use merx_core::highlight::{line_ranges, paint, paint_line, ColoredRange, Theme};
use tracing::debug;

use crate::config::RunConfig;
use crate::theme::current_theme;
use crate::{analyze, Analysis};

#[derive(Debug, Clone, Default)]
pub struct Document {
    text: String,
    analysis: Analysis,
    config: RunConfig,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RunConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// 替换文本，对全文重新做词法分析和语法检查
    pub fn update(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.analysis = analyze(&self.text, &self.config);
        debug!(
            target: "merx::api",
            bytes = self.text.len(),
            tokens = self.analysis.tokens.len(),
            valid = self.analysis.valid,
            "Document updated"
        );
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.analysis.tokens
    }

    pub fn is_valid(&self) -> bool {
        self.analysis.valid
    }

    pub fn analysis(&self) -> &Analysis {
        &self.analysis
    }

    pub fn line_count(&self) -> usize {
        line_ranges(&self.text).len()
    }

    /// 每一行的着色区间
    pub fn highlight(&self, theme: &Theme) -> Vec<Vec<ColoredRange>> {
        paint(&self.text, &self.analysis.tokens, theme)
    }

    /// 某一行的着色区间，超出最后一行时为 `None`
    pub fn highlight_line(&self, index: usize, theme: &Theme) -> Option<Vec<ColoredRange>> {
        let line = line_ranges(&self.text).into_iter().nth(index)?;
        Some(paint_line(&self.analysis.tokens, line, theme))
    }

    /// 用进程级当前主题调用 [`Document::highlight`]
    pub fn highlight_current(&self) -> Vec<Vec<ColoredRange>> {
        self.highlight(&current_theme())
    }
}
