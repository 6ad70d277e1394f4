//! Fill and background colors.

use std::fmt;
use std::str::FromStr;

use crate::error::QrGenError;

/// An 8-bit RGB color.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const BLACK: Rgb = Rgb([0, 0, 0]);
    pub const WHITE: Rgb = Rgb([255, 255, 255]);

    /// Lowercase `#rrggbb` form, as written into SVG output.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.0;
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl From<Rgb> for image::Rgb<u8> {
    fn from(color: Rgb) -> Self {
        image::Rgb(color.0)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Accepts the CSS color syntax: the 148 named colors, `#rgb` / `#rrggbb`
/// hex and the `rgb()`, `hsl()` and `hwb()` functions. Alpha is dropped.
impl FromStr for Rgb {
    type Err = QrGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let color = csscolorparser::parse(s.trim())
            .map_err(|_| QrGenError::InvalidColor(s.to_string()))?;
        let [r, g, b, _] = color.to_rgba8();
        Ok(Rgb([r, g, b]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors_are_case_insensitive() {
        assert_eq!("black".parse::<Rgb>().unwrap(), Rgb::BLACK);
        assert_eq!("White".parse::<Rgb>().unwrap(), Rgb::WHITE);
        assert_eq!(" NAVY ".parse::<Rgb>().unwrap(), Rgb([0, 0, 128]));
    }

    #[test]
    fn test_hex_colors() {
        assert_eq!("#ff8800".parse::<Rgb>().unwrap(), Rgb([255, 136, 0]));
        assert_eq!("#F80".parse::<Rgb>().unwrap(), Rgb([255, 136, 0]));
        assert!("#ff88f".parse::<Rgb>().is_err());
        assert!("#gg0000".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_extended_names_and_functions() {
        assert_eq!("crimson".parse::<Rgb>().unwrap(), Rgb([220, 20, 60]));
        assert_eq!("DarkOrange".parse::<Rgb>().unwrap(), Rgb([255, 140, 0]));
        assert_eq!("rebeccapurple".parse::<Rgb>().unwrap(), Rgb([102, 51, 153]));
        assert_eq!("rgb(10,20,30)".parse::<Rgb>().unwrap(), Rgb([10, 20, 30]));
        assert_eq!("rgb(10, 20, 30)".parse::<Rgb>().unwrap(), Rgb([10, 20, 30]));
        assert_eq!("hsl(0, 100%, 50%)".parse::<Rgb>().unwrap(), Rgb([255, 0, 0]));
    }

    #[test]
    fn test_unknown_color_is_rejected() {
        match "blurple".parse::<Rgb>() {
            Err(QrGenError::InvalidColor(name)) => assert_eq!(name, "blurple"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Rgb([255, 165, 0]).to_hex(), "#ffa500");
    }
}
