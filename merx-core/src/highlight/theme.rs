//! 配色主题
//!
//! 主题把每种 [`TokenKind`] 映射到一个颜色，并带有编辑器的背景色和前景色。
//! 没有映射的类型使用前景色绘制。

use std::collections::HashMap;
use std::sync::Arc;

use merx_config::ThemeConfig;
use thiserror::Error;
use tracing::debug;

use super::color::{Color, ColorError};
use crate::compiler::lexer::{TokenKind, UnknownTokenKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub colors: HashMap<TokenKind, Color>,
    pub background: Color,
    pub foreground: Color,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("theme has no name")]
    MissingName,
    #[error("theme '{theme}' does not set a {field} color")]
    MissingColor { theme: String, field: &'static str },
    #[error("theme '{theme}', {field}: {source}")]
    InvalidColor {
        theme: String,
        field: String,
        #[source]
        source: ColorError,
    },
    #[error("theme '{theme}': {source}")]
    UnknownKind {
        theme: String,
        #[source]
        source: UnknownTokenKind,
    },
}

impl Theme {
    pub fn new(name: impl Into<String>, background: Color, foreground: Color) -> Self {
        Self {
            name: name.into(),
            colors: HashMap::new(),
            background,
            foreground,
        }
    }

    pub fn with_color(mut self, kind: TokenKind, color: Color) -> Self {
        self.colors.insert(kind, color);
        self
    }

    pub fn dark() -> Self {
        Theme::new("Dark", Color::BLACK, Color::WHITE)
            .with_color(TokenKind::Keyword, Color::CYAN)
            .with_color(TokenKind::Identifier, Color::WHITE)
            .with_color(TokenKind::Number, Color::YELLOW)
            .with_color(TokenKind::String, Color::ORANGE)
            .with_color(TokenKind::Operator, Color::MAGENTA)
            .with_color(TokenKind::Whitespace, Color::TRANSPARENT)
            .with_color(TokenKind::Comment, Color::GREEN)
            .with_color(TokenKind::Unknown, Color::RED)
    }

    pub fn light() -> Self {
        Theme::new("Light", Color::WHITE, Color::BLACK)
            .with_color(TokenKind::Keyword, Color::DARK_MAGENTA)
            .with_color(TokenKind::Identifier, Color::BLACK)
            .with_color(TokenKind::Number, Color::DARK_GREEN)
            .with_color(TokenKind::String, Color::CHOCOLATE)
            .with_color(TokenKind::Operator, Color::DARK_VIOLET)
            .with_color(TokenKind::Whitespace, Color::TRANSPARENT)
            .with_color(TokenKind::Comment, Color::GRAY)
            .with_color(TokenKind::Unknown, Color::RED)
    }

    /// token 类型的颜色，没有映射时用前景色
    pub fn color_for(&self, kind: TokenKind) -> Color {
        self.colors.get(&kind).copied().unwrap_or(self.foreground)
    }

    /// 从用户配色构建主题
    pub fn from_config(config: &ThemeConfig) -> Result<Self, ThemeError> {
        let name = config.name.trim();
        if name.is_empty() {
            return Err(ThemeError::MissingName);
        }

        let required = |field: &'static str, value: &str| -> Result<Color, ThemeError> {
            if value.trim().is_empty() {
                return Err(ThemeError::MissingColor {
                    theme: name.to_string(),
                    field,
                });
            }
            value.parse::<Color>().map_err(|source| ThemeError::InvalidColor {
                theme: name.to_string(),
                field: field.to_string(),
                source,
            })
        };

        let background = required("background", &config.background)?;
        let foreground = required("foreground", &config.foreground)?;
        let mut theme = Theme::new(name, background, foreground);

        for (kind_name, value) in &config.colors {
            let kind = kind_name.parse::<TokenKind>().map_err(|source| ThemeError::UnknownKind {
                theme: name.to_string(),
                source,
            })?;
            let color = value.parse::<Color>().map_err(|source| ThemeError::InvalidColor {
                theme: name.to_string(),
                field: kind_name.clone(),
                source,
            })?;
            theme.colors.insert(kind, color);
        }

        Ok(theme)
    }
}

/// 按注册顺序排列的命名主题，预设在前
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: Vec<Arc<Theme>>,
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::with_presets()
    }
}

impl ThemeRegistry {
    /// 不含任何主题的注册表
    pub fn empty() -> Self {
        Self { themes: Vec::new() }
    }

    /// Dark 与 Light
    pub fn with_presets() -> Self {
        let mut registry = Self::empty();
        registry.register(Theme::dark());
        registry.register(Theme::light());
        registry
    }

    /// 预设加上 `configs` 中的所有配色
    pub fn from_configs(configs: &[ThemeConfig]) -> Result<Self, ThemeError> {
        let mut registry = Self::with_presets();
        for config in configs {
            registry.register(Theme::from_config(config)?);
        }
        Ok(registry)
    }

    /// 添加主题；同名（不区分大小写）时原位替换
    pub fn register(&mut self, theme: Theme) -> Arc<Theme> {
        let theme = Arc::new(theme);
        match self.position(&theme.name) {
            Some(index) => {
                debug!(target: "merx::highlight", name = %theme.name, "Replacing theme");
                self.themes[index] = Arc::clone(&theme);
            }
            None => {
                debug!(target: "merx::highlight", name = %theme.name, "Registering theme");
                self.themes.push(Arc::clone(&theme));
            }
        }
        theme
    }

    /// 不区分大小写的查找
    pub fn get(&self, name: &str) -> Option<Arc<Theme>> {
        self.position(name).map(|index| Arc::clone(&self.themes[index]))
    }

    pub fn names(&self) -> Vec<&str> {
        self.themes.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Theme>> {
        self.themes.iter()
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.themes
            .iter()
            .position(|t| t.name.eq_ignore_ascii_case(name))
    }
}
