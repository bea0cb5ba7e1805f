use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct HexColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HexColorError {
    Empty,
    InvalidLength { len: usize },
    InvalidDigit { ch: char, index: usize },
}

impl Display for HexColorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            HexColorError::Empty => f.write_str("hex color is empty"),
            HexColorError::InvalidLength { len } => {
                write!(f, "hex color must have 6 or 8 digits, found {len}")
            }
            HexColorError::InvalidDigit { ch, index } => {
                write!(f, "invalid hex digit {ch:?} at position {index}")
            }
        }
    }
}

impl std::error::Error for HexColorError {}

impl HexColor {
    /// Returned by [`HexColor::decode`] when the input is malformed.
    pub const FALLBACK: Self = Self::rgb(0, 0, 0);

    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, u8::MAX)
    }

    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Accepts `RRGGBB` or `RRGGBBAA`, with or without a leading `#`.
    pub fn parse(input: &str) -> Result<Self, HexColorError> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.is_empty() {
            return Err(HexColorError::Empty);
        }
        if let Some((index, ch)) = digits
            .char_indices()
            .find(|(_, ch)| !ch.is_ascii_hexdigit())
        {
            return Err(HexColorError::InvalidDigit { ch, index });
        }

        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| HexColorError::InvalidLength { len: digits.len() })?;
        match digits.len() {
            6 => Ok(Self::rgb(
                channel(value, 16),
                channel(value, 8),
                channel(value, 0),
            )),
            8 => Ok(Self::rgba(
                channel(value, 24),
                channel(value, 16),
                channel(value, 8),
                channel(value, 0),
            )),
            len => Err(HexColorError::InvalidLength { len }),
        }
    }

    pub fn decode(input: &str) -> Self {
        Self::parse(input).unwrap_or_else(|error| {
            tracing::warn!(input, %error, "malformed hex color, using fallback");
            Self::FALLBACK
        })
    }

    pub const fn is_opaque(&self) -> bool {
        self.alpha == u8::MAX
    }

    pub fn to_hex(&self) -> String {
        if self.is_opaque() {
            format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
        } else {
            format!(
                "#{:02X}{:02X}{:02X}{:02X}",
                self.red, self.green, self.blue, self.alpha
            )
        }
    }

    pub fn to_rgba(&self) -> gpui::Rgba {
        gpui::Rgba {
            r: normalize(self.red),
            g: normalize(self.green),
            b: normalize(self.blue),
            a: normalize(self.alpha),
        }
    }

    pub fn to_hsla(&self) -> gpui::Hsla {
        self.to_rgba().into()
    }
}

fn channel(value: u32, shift: u32) -> u8 {
    ((value >> shift) & 0xFF) as u8
}

fn normalize(channel: u8) -> f32 {
    f32::from(channel) / 255.0
}

pub fn decode_rgba(input: &str) -> gpui::Rgba {
    HexColor::decode(input).to_rgba()
}

impl FromStr for HexColor {
    type Err = HexColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for HexColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<HexColor> for gpui::Rgba {
    fn from(color: HexColor) -> Self {
        color.to_rgba()
    }
}

impl From<HexColor> for gpui::Hsla {
    fn from(color: HexColor) -> Self {
        color.to_hsla()
    }
}
