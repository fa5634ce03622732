//! RGB colors with additive saturating blending.

use std::fmt;
use std::str::FromStr;

use incgraph_error::{Error, Result};

/// An RGB color with 0-255 channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Blend two colors additively, saturating each channel at 255.
    ///
    /// Commutative and associative, so a set of blended colors yields the
    /// same result in any order.
    pub fn blend(self, other: Color) -> Color {
        Color {
            red: self.red.saturating_add(other.red),
            green: self.green.saturating_add(other.green),
            blue: self.blue.saturating_add(other.blue),
        }
    }

    /// Format as a lowercase `#rrggbb` string.
    pub fn name(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Parse a color from `#rrggbb`, `#rgb`, or a basic color name.
    pub fn parse(text: &str) -> Result<Color> {
        let text = text.trim();

        if let Some(hex) = text.strip_prefix('#') {
            return Self::parse_hex(hex)
                .ok_or_else(|| invalid_color(text).with_operation("color::parse"));
        }

        named_color(text).ok_or_else(|| invalid_color(text).with_operation("color::parse"))
    }

    fn parse_hex(hex: &str) -> Option<Color> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            6 => {
                let red = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let green = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let blue = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Color::new(red, green, blue))
            }
            3 => {
                // #rgb expands each nibble, e.g. #f80 -> #ff8800.
                let channel = |i: usize| {
                    u8::from_str_radix(&hex[i..i + 1], 16)
                        .ok()
                        .map(|v| v << 4 | v)
                };
                Some(Color::new(channel(0)?, channel(1)?, channel(2)?))
            }
            _ => None,
        }
    }
}

fn invalid_color(text: &str) -> Error {
    Error::config_invalid(format!("'{text}' is not a valid color")).with_context("color", text)
}

fn named_color(name: &str) -> Option<Color> {
    let color = match name.to_ascii_lowercase().as_str() {
        "black" => Color::new(0, 0, 0),
        "white" => Color::new(255, 255, 255),
        "red" => Color::new(255, 0, 0),
        "green" => Color::new(0, 255, 0),
        "blue" => Color::new(0, 0, 255),
        "yellow" => Color::new(255, 255, 0),
        "cyan" => Color::new(0, 255, 255),
        "magenta" => Color::new(255, 0, 255),
        "gray" | "grey" => Color::new(128, 128, 128),
        _ => return None,
    };
    Some(color)
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Color::parse(s)
    }
}
