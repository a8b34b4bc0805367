use std::fmt;

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
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

    /// Builds a color from 8-bit channels, as written in CSS hex tokens.
    #[must_use]
    pub const fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
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

    /// CSS token consumed by web renderers: `#rrggbb` when opaque, else `rgba(..)`.
    #[must_use]
    pub fn to_css(self) -> String {
        self.to_string()
    }

    fn channel_u8(value: f64) -> u8 {
        (value.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (red, green, blue) = (
            Self::channel_u8(self.red),
            Self::channel_u8(self.green),
            Self::channel_u8(self.blue),
        );
        if self.alpha >= 1.0 {
            write!(f, "#{red:02x}{green:02x}{blue:02x}")
        } else {
            let alpha = (self.alpha.clamp(0.0, 1.0) * 100.0).round() / 100.0;
            write!(f, "rgba({red}, {green}, {blue}, {alpha})")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn opaque_colors_render_as_hex() {
        assert_eq!(Color::rgb8(0x4f, 0x46, 0xe5).to_css(), "#4f46e5");
    }

    #[test]
    fn translucent_colors_render_as_rgba() {
        assert_eq!(
            Color::rgb8(255, 255, 255).with_alpha(0.12).to_css(),
            "rgba(255, 255, 255, 0.12)"
        );
    }

    #[test]
    fn out_of_range_channels_are_rejected() {
        assert!(Color::rgba(1.2, 0.0, 0.0, 1.0).validate().is_err());
        assert!(Color::rgb(0.2, 0.4, 0.6).validate().is_ok());
    }
}
