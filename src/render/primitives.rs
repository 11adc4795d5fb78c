use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::Point;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Serialized as `#rrggbb` or `#rrggbbaa`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba8(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn rgba8(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self::rgba(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
            alpha,
        )
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self::rgba(self.red, self.green, self.blue, alpha)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }

    /// `#rrggbb` without the alpha channel.
    #[must_use]
    pub fn to_hex_rgb(self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            channel_to_u8(self.red),
            channel_to_u8(self.green),
            channel_to_u8(self.blue)
        )
    }
}

fn channel_to_u8(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_rgb())?;
        if self.alpha < 1.0 {
            write!(f, "{:02x}", channel_to_u8(self.alpha))?;
        }
        Ok(())
    }
}

impl FromStr for Color {
    type Err = ChartError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = || ChartError::InvalidData(format!("invalid hex color `{input}`"));
        let hex = input.strip_prefix('#').ok_or_else(invalid)?;
        if !matches!(hex.len(), 6 | 8) || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |offset: usize| {
            u8::from_str_radix(&hex[offset..offset + 2], 16).map_err(|_| invalid())
        };
        let alpha = if hex.len() == 8 {
            f64::from(channel(6)?) / 255.0
        } else {
            1.0
        };
        Ok(Self::rgba8(channel(0)?, channel(2)?, channel(4)?, alpha))
    }
}

impl TryFrom<String> for Color {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Fill and stroke color of one plotted series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorPair {
    /// Expected to be translucent so overlapping series stay legible.
    pub fill: Color,
    pub stroke: Color,
}

impl ColorPair {
    #[must_use]
    pub const fn new(fill: Color, stroke: Color) -> Self {
        Self { fill, stroke }
    }

    /// Opaque stroke plus a translucent fill of the same hue.
    #[must_use]
    pub const fn from_stroke(stroke: Color, fill_alpha: f64) -> Self {
        Self::new(stroke.with_alpha(fill_alpha), stroke)
    }

    pub fn validate(self) -> ChartResult<()> {
        self.fill.validate()?;
        self.stroke.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::anchor`.
///
/// Text is always vertically centered on the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub anchor: Point,
    pub font_size_px: f64,
    pub color: Color,
    pub align: TextAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        anchor: Point,
        font_size_px: f64,
        color: Color,
        align: TextAlign,
    ) -> Self {
        Self {
            text: text.into(),
            anchor,
            font_size_px,
            color,
            align,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData("text primitive must not be empty".to_owned()));
        }
        if !self.anchor.is_finite() {
            return Err(ChartError::InvalidData("text coordinates must be finite".to_owned()));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData("font size must be finite and > 0".to_owned()));
        }
        self.color.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing_accepts_optional_alpha() {
        let opaque: Color = "#ff5555".parse().expect("opaque");
        assert_eq!(opaque, Color::rgb8(0xff, 0x55, 0x55));

        let translucent: Color = "#ff55554d".parse().expect("translucent");
        assert!((translucent.alpha - 0x4d as f64 / 255.0).abs() <= 1e-12);
    }

    #[test]
    fn hex_parsing_rejects_garbage() {
        for input in ["ff5555", "#ff55", "#gg5555", "#ff5555ff00"] {
            assert!(input.parse::<Color>().is_err(), "{input} should fail");
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        let color = Color::rgba8(0x55, 0x90, 0xf0, 0x4d as f64 / 255.0);
        let parsed: Color = color.to_string().parse().expect("parse");
        assert_eq!(parsed, color);
    }
}
