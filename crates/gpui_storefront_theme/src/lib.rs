//! Palettes and brand colors for the storefront.
//!
//! A [`Theme`] holds one [`Palette`] per [`AppearanceMode`] and a set of
//! mode-invariant [`BrandColors`]. Resolving a palette is a pure lookup, so
//! callers can re-resolve on every render pass.

mod appearance;
pub use appearance::*;

mod colors;
pub use colors::*;

mod deserializers;

mod error;
pub use error::*;

mod schema;
pub use schema::*;
