//! Compile-time defaults for the page. Individual loads can override parts of
//! this through query parameters, see [`crate::app::ClimberQuery`].

use crate::route_name::NameStyle;
use std::ops::RangeInclusive;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub name_style: NameStyle,
    pub palette: PaletteConfig,
}

/// Ranges the background saturation and lightness are drawn from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteConfig {
    pub saturation: RangeInclusive<i32>,
    pub lightness: RangeInclusive<i32>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            saturation: 55..=70,
            lightness: 65..=85,
        }
    }
}
