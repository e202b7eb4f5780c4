use gpui::{Rgba, rgb, rgba};

use crate::ThemeError;

/// Parses `#RGB`, `#RRGGBB` or `#RRGGBBAA` into a color.
///
/// Channels go through [`gpui::rgb`]/[`gpui::rgba`], so a parsed color is
/// bit-identical to the same literal written with those helpers.
pub fn parse_hex(value: &str) -> Result<Rgba, ThemeError> {
    let invalid = || ThemeError::InvalidColor(value.to_string());

    let digits = value.strip_prefix('#').ok_or_else(invalid)?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    match digits.len() {
        3 => {
            let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
            let hex = u32::from_str_radix(&expanded, 16).map_err(|_| invalid())?;
            Ok(rgb(hex))
        }
        6 => {
            let hex = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
            Ok(rgb(hex))
        }
        8 => {
            let hex = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
            Ok(rgba(hex))
        }
        _ => Err(invalid()),
    }
}

/// Formats a color as uppercase `#RRGGBB`, or `#RRGGBBAA` when translucent.
pub fn to_hex(color: Rgba) -> String {
    let [r, g, b, a] = [color.r, color.g, color.b, color.a].map(channel);

    if a == u8::MAX {
        format!("#{r:02X}{g:02X}{b:02X}")
    } else {
        format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
    }
}

/// Compares the color channels of two colors, ignoring alpha.
pub fn same_rgb(a: Rgba, b: Rgba) -> bool {
    a.r == b.r && a.g == b.g && a.b == b.b
}

fn channel(value: f32) -> u8 {
    (value.clamp(0., 1.) * 255.).round() as u8
}
