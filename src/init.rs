use gpui::App;

use crate::{config::StorefrontConfig, theme::ThemeExt};

/// Installs the configured theme as the app-wide global.
pub fn init(cx: &mut App, config: &StorefrontConfig) {
    cx.set_theme(config.load_theme());
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use gpui::TestAppContext;

    #[gpui::test]
    fn test_init_installs_builtin_theme(cx: &mut TestAppContext) {
        cx.update(|cx| {
            init(cx, &StorefrontConfig::default());
            assert_eq!(cx.get_theme(), Theme::storefront());
        });
    }
}
