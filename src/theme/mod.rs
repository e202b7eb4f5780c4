//! Theme access and style derivation.
//!
//! Palettes come from [`gpui_storefront_theme`]. Screens turn a resolved
//! palette into a [`StyleSheet`] of named [`StyleRule`]s and never read the
//! window appearance themselves.

pub use gpui_storefront_theme::*;

mod ext;
pub use ext::*;

mod kinds;
pub use kinds::*;

mod styles;
pub use styles::*;
