//! Random but pleasant page colors.
//!
//! One background color is drawn per page load, the route name and the links
//! in the description get a darker color with the same hue so they stay
//! readable on top of it.

use crate::{config::PaletteConfig, util::color::ColorTriple};
use rand::Rng;

/// Golden ratio conjugate.
pub const GOLDEN_RATIO_CONJUGATE: f64 = 0.618_033_988_749_895;
const HUE_MAX: u16 = 360;

const ACCENT_SATURATION_DROP: i32 = 10;
const ACCENT_LIGHTNESS_DROP: i32 = 30;

/// Spreads a uniformly drawn hue using the golden ratio conjugate.
///
/// The output is intentionally not uniform over `[0, 360)`.
pub fn pleasant_hue(base_hue: f64) -> f64 {
    (base_hue + base_hue / GOLDEN_RATIO_CONJUGATE) % f64::from(HUE_MAX)
}

pub fn generate_background<R: Rng + ?Sized>(rng: &mut R, config: &PaletteConfig) -> ColorTriple {
    let base_hue = rng.gen_range(0..HUE_MAX);
    let saturation = rng.gen_range(config.saturation.clone());
    let lightness = rng.gen_range(config.lightness.clone());
    ColorTriple::new(pleasant_hue(f64::from(base_hue)), saturation, lightness)
}

/// Darker, same-hue variant of `base`. Not clamped, may go below zero.
pub fn derive_accent_color(base: ColorTriple) -> ColorTriple {
    ColorTriple::new(
        base.hue,
        base.saturation - ACCENT_SATURATION_DROP,
        base.lightness - ACCENT_LIGHTNESS_DROP,
    )
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: ColorTriple,
    pub route_name: ColorTriple,
    pub link: ColorTriple,
}

impl Palette {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, config: &PaletteConfig) -> Self {
        Self::from_background(generate_background(rng, config))
    }

    pub fn from_background(background: ColorTriple) -> Self {
        let accent = derive_accent_color(background);
        Self {
            background,
            route_name: accent,
            link: accent,
        }
    }
}
