use std::{io, path::PathBuf};

use thiserror::Error;

use crate::AppearanceMode;

/// Errors raised while loading a theme definition.
///
/// Resolving palettes never fails; only building a [`crate::Theme`] from
/// external input does.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to read theme file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse theme: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid color {0:?}, expected #RGB, #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),

    #[error("theme has no {0} variant")]
    MissingVariant(AppearanceMode),

    #[error("theme defines the {0} variant more than once")]
    DuplicateVariant(AppearanceMode),
}
