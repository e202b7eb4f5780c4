use gpui::Rgba;

/// Extension trait for modifying RGBA colors.
pub trait RgbaExt {
    /// Returns a new color with the specified alpha value.
    fn alpha(self, alpha: f32) -> Self;

    /// Returns a new color with a hex alpha byte, as in `#RRGGBBAA`.
    fn alpha_byte(self, alpha: u8) -> Self;
}

impl RgbaExt for Rgba {
    fn alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    fn alpha_byte(self, alpha: u8) -> Self {
        self.alpha(alpha as f32 / 255.)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::rgb;
    use gpui_storefront_theme::{same_rgb, to_hex};

    #[test]
    fn test_alpha_keeps_channels() {
        let tinted = rgb(0x0A79DE).alpha(0.5);

        assert!(same_rgb(tinted, rgb(0x0A79DE)));
        assert_eq!(tinted.a, 0.5);
    }

    #[test]
    fn test_alpha_byte_matches_hex_suffix() {
        assert_eq!(to_hex(rgb(0x0A79DE).alpha_byte(0x20)), "#0A79DE20");
        assert_eq!(to_hex(rgb(0x0A79DE).alpha_byte(0x15)), "#0A79DE15");
    }
}
