//! 语法高亮：颜色、主题和逐行着色

pub mod color;
pub mod paint;
pub mod theme;

pub use color::{Color, ColorError};
pub use paint::{line_ranges, paint, paint_line, ColoredRange};
pub use theme::{Theme, ThemeError, ThemeRegistry};
