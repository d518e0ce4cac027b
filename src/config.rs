use std::str::FromStr;
use std::time::Duration;

use bon::Builder;
use thiserror::Error;

/// Minimum delay between two rendered frames.
pub const REDRAW_INTERVAL: Duration = Duration::from_millis(1000);

/// Width used when the host leaves the width unconstrained ("wrap content").
pub const WRAP_CONTENT_WIDTH: u32 = 100;
/// Height used when the host leaves the height unconstrained ("wrap content").
pub const WRAP_CONTENT_HEIGHT: u32 = 100;

// ============================================================================
// COLOR
// ============================================================================

/// Opaque RGB color used by every clock element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::new(0xff, 0xff, 0xff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn as_tuple(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("expected 3 or 6 hex digits, got {0:?}")]
    Length(String),
    #[error("invalid hex digit in {0:?}")]
    Digit(String),
}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Accepts `#rrggbb`, `rrggbb` and the short `#rgb` form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::Digit(s.to_string()));
        }
        let channel = |digits: &str| {
            u8::from_str_radix(digits, 16).map_err(|_| ColorParseError::Digit(s.to_string()))
        };
        match hex.len() {
            6 => Ok(Color::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                let r = channel(&hex[0..1])?;
                let g = channel(&hex[1..2])?;
                let b = channel(&hex[2..3])?;
                Ok(Color::new(r * 0x11, g * 0x11, b * 0x11))
            }
            _ => Err(ColorParseError::Length(s.to_string())),
        }
    }
}

// ============================================================================
// CLOCK CONFIGURATION
// ============================================================================

/// Proportions and colors of the clock face.
///
/// Ratios marked "of min size" scale with `min(width, height)`; ratios marked
/// "of radius" scale with the distance from the center to the dial edge along
/// the direction being drawn. Values are taken as-is: out-of-range ratios give
/// distorted but well-defined output.
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct ClockConfig {
    // Dial
    /// Border ring width, of min size.
    #[builder(default = 0.02)]
    pub ratio_width_clock_stroke: f32,
    /// Inset of the tick dots from the dial edge, of radius.
    #[builder(default = 0.1)]
    pub ratio_padding_dot: f32,
    /// Radius of a minute dot, of min size.
    #[builder(default = 0.01)]
    pub ratio_radius_small_dot: f32,
    /// Radius of an hour dot, of min size.
    #[builder(default = 0.017)]
    pub ratio_radius_big_dot: f32,
    /// Numeral font size, of min size.
    #[builder(default = 0.1)]
    pub ratio_text_size: f32,
    /// Inset of the numerals from the dial edge, of radius.
    #[builder(default = 0.26)]
    pub ratio_padding_number: f32,

    // Hands
    #[builder(default = 0.01)]
    pub ratio_width_second_hand: f32,
    #[builder(default = 0.02)]
    pub ratio_width_minute_hand: f32,
    #[builder(default = 0.03)]
    pub ratio_width_hour_hand: f32,
    /// Length of the tail behind the pivot, of radius. Shared by all hands.
    #[builder(default = 0.2)]
    pub ratio_length_tail_hand: f32,
    #[builder(default = 0.85)]
    pub ratio_length_second_hand: f32,
    #[builder(default = 0.8)]
    pub ratio_length_minute_hand: f32,
    #[builder(default = 0.7)]
    pub ratio_length_hour_hand: f32,

    // Colors
    #[builder(default = Color::BLACK)]
    pub color_border: Color,
    #[builder(default = Color::WHITE)]
    pub color_background: Color,
    #[builder(default = Color::BLACK)]
    pub color_dot: Color,
    #[builder(default = Color::BLACK)]
    pub color_number: Color,
    #[builder(default = Color::BLACK)]
    pub color_second_hand: Color,
    #[builder(default = Color::BLACK)]
    pub color_minute_hand: Color,
    #[builder(default = Color::BLACK)]
    pub color_hour_hand: Color,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
