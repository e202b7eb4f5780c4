pub mod catalog;

pub mod components;

pub mod config;

pub mod navigation;

pub mod theme;

pub mod views;

mod utils;
pub use utils::{ElementIdExt, RgbaExt};

mod init;
pub use init::*;
