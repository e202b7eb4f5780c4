use gpui::App;

use crate::theme::Theme;

/// Extension trait for accessing and modifying the global theme.
pub trait ThemeExt {
    /// Changes the theme.
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T);

    /// Gets an immutable reference to the theme.
    fn get_theme(&self) -> &Theme;
}

impl ThemeExt for App {
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T) {
        let theme = theme.as_ref();
        tracing::debug!(name = %theme.name, "theme set");
        self.set_global::<Theme>(theme.clone())
    }

    fn get_theme(&self) -> &Theme {
        self.global()
    }
}
