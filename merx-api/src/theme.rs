//! 进程级主题选择
//!
//! 当前主题放在 `RwLock<Arc<Theme>>` 里整体替换。读者克隆 `Arc` 后着色；
//! 替换主题不触碰 token 序列，因此切换主题无需重新词法分析。

use std::sync::{Arc, PoisonError, RwLock};

use merx_config::{HighlightConfig, ThemeConfig};
use merx_core::highlight::{Theme, ThemeRegistry};
use once_cell::sync::Lazy;
use tracing::debug;

use crate::error::MerxError;

static REGISTRY: Lazy<RwLock<ThemeRegistry>> = Lazy::new(|| RwLock::new(ThemeRegistry::default()));
static ACTIVE_THEME: Lazy<RwLock<Arc<Theme>>> = Lazy::new(|| RwLock::new(Arc::new(Theme::dark())));

/// 当前选中的主题
pub fn current_theme() -> Arc<Theme> {
    let guard = ACTIVE_THEME.read().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(&guard)
}

/// 把 `theme` 设为当前主题并返回
pub fn use_theme(theme: impl Into<Arc<Theme>>) -> Arc<Theme> {
    let theme = theme.into();
    debug!(target: "merx::api", theme = %theme.name, "Switching theme");
    let mut guard = ACTIVE_THEME.write().unwrap_or_else(PoisonError::into_inner);
    *guard = Arc::clone(&theme);
    theme
}

/// 按名字选中已注册的主题（不区分大小写）
pub fn use_preset(name: &str) -> Result<Arc<Theme>, MerxError> {
    let theme = find_theme(name)?;
    Ok(use_theme(theme))
}

/// 查找已注册的主题，不改变当前主题
pub fn find_theme(name: &str) -> Result<Arc<Theme>, MerxError> {
    let registry = REGISTRY.read().unwrap_or_else(PoisonError::into_inner);
    registry.get(name).ok_or_else(|| MerxError::UnknownTheme {
        name: name.to_string(),
        available: registry.names().into_iter().map(String::from).collect(),
    })
}

/// 注册主题，同名则替换
pub fn register_theme(theme: Theme) -> Arc<Theme> {
    let mut registry = REGISTRY.write().unwrap_or_else(PoisonError::into_inner);
    registry.register(theme)
}

/// 注册所有配色；任一配色无效时一个都不注册
pub fn register_theme_configs(configs: &[ThemeConfig]) -> Result<(), MerxError> {
    let themes = configs
        .iter()
        .map(Theme::from_config)
        .collect::<Result<Vec<_>, _>>()?;
    for theme in themes {
        register_theme(theme);
    }
    Ok(())
}

/// 已注册主题名，预设在前
pub fn theme_names() -> Vec<String> {
    let registry = REGISTRY.read().unwrap_or_else(PoisonError::into_inner);
    registry.names().into_iter().map(String::from).collect()
}

/// 注册配置中的配色并选中配置的主题
pub fn apply_highlight_config(config: &HighlightConfig) -> Result<Arc<Theme>, MerxError> {
    register_theme_configs(&config.themes)?;
    use_preset(&config.theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use merx_core::highlight::Color;
    use merx_core::TokenKind;

    // 注册表和当前主题是全局的；这里的测试只添加唯一命名的主题，
    // 之后也不对当前主题做断言。

    #[test]
    fn test_presets_registered() {
        let names = theme_names();
        assert_eq!(&names[..2], &["Dark".to_string(), "Light".to_string()]);
        assert!(find_theme("dark").is_ok());
    }

    #[test]
    fn test_unknown_theme() {
        let err = find_theme("NoSuchTheme").unwrap_err();
        assert!(matches!(err, MerxError::UnknownTheme { ref name, .. } if name == "NoSuchTheme"));
    }

    #[test]
    fn test_register_and_find() {
        register_theme(Theme::new("UnitTestTheme", Color::GRAY, Color::BLACK));
        let theme = find_theme("unittesttheme").unwrap();
        assert_eq!(theme.color_for(TokenKind::Keyword), Color::BLACK);
    }

    #[test]
    fn test_invalid_config_registers_nothing() {
        let good = ThemeConfig {
            name: "UnitGood".to_string(),
            background: "black".to_string(),
            foreground: "white".to_string(),
            ..Default::default()
        };
        let bad = ThemeConfig {
            name: "UnitBad".to_string(),
            ..Default::default()
        };
        assert!(register_theme_configs(&[good, bad]).is_err());
        assert!(find_theme("UnitGood").is_err());
    }
}
