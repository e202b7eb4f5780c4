use gpui::Rgba;
use serde::{Deserialize, Deserializer, de::Error};
use smallvec::SmallVec;

use crate::{ThemeVariant, ThemeVariants, parse_hex};

pub fn de_color<'de, D>(deserializer: D) -> Result<Rgba, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;

    parse_hex(&value).map_err(D::Error::custom)
}

pub fn de_variants<'de, D>(deserializer: D) -> Result<ThemeVariants, D::Error>
where
    D: Deserializer<'de>,
{
    let value: SmallVec<[ThemeVariant; 2]> = SmallVec::deserialize(deserializer)?;

    if value.is_empty() {
        return Err(D::Error::custom(
            "a light and a dark theme variant need to be provided.",
        ));
    }

    ThemeVariants::from_list(value).map_err(D::Error::custom)
}
