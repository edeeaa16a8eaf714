/// A color in HSL space, rendered as a CSS `hsl(h,s%,l%)` string.
///
/// Saturation and lightness are signed: derived accent colors are not clamped,
/// the CSS engine clamps them when the string is applied.
#[derive(Clone, Copy, Debug, PartialEq, derive_more::Display)]
#[display("hsl({hue},{saturation}%,{lightness}%)")]
pub struct ColorTriple {
    /// Hue: 0-360
    pub hue: f64,
    pub saturation: i32,
    pub lightness: i32,
}

impl ColorTriple {
    pub const fn new(hue: f64, saturation: i32, lightness: i32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ColorTriple;
    use rstest::rstest;

    #[rstest]
    #[case(ColorTriple::new(120.0, 50, 45), "hsl(120,50%,45%)")]
    #[case(ColorTriple::new(111.5, 60, 75), "hsl(111.5,60%,75%)")]
    #[case(ColorTriple::new(0.0, -5, -20), "hsl(0,-5%,-20%)")]
    fn renders_css_hsl(#[case] color: ColorTriple, #[case] expected: &str) {
        assert_eq!(expected, color.to_string());
    }
}
