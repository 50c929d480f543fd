use std::str::FromStr;

use crate::error::ParseColorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);
    pub const GRAY: Self = Self::rgb(0xBE, 0xBE, 0xBE);
    pub const RED: Self = Self::rgb(0xFF, 0x00, 0x00);
    pub const GREEN: Self = Self::rgb(0x00, 0xFF, 0x00);
    pub const BLUE: Self = Self::rgb(0x00, 0x00, 0xFF);
    pub const YELLOW: Self = Self::rgb(0xFF, 0xFF, 0x00);
    pub const CYAN: Self = Self::rgb(0x00, 0xFF, 0xFF);
    pub const MAGENTA: Self = Self::rgb(0xFF, 0x00, 0xFF);
    pub const ORANGE: Self = Self::rgb(0xFF, 0xA5, 0x00);
    pub const PURPLE: Self = Self::rgb(0xA0, 0x20, 0xF0);

    const NAMED: [(&'static str, Color); 11] = [
        ("white", Self::WHITE),
        ("black", Self::BLACK),
        ("gray", Self::GRAY),
        ("red", Self::RED),
        ("green", Self::GREEN),
        ("blue", Self::BLUE),
        ("yellow", Self::YELLOW),
        ("cyan", Self::CYAN),
        ("magenta", Self::MAGENTA),
        ("orange", Self::ORANGE),
        ("purple", Self::PURPLE),
    ];

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    fn from_hex(hex: &str) -> Option<Self> {
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        match hex.len() {
            6 => Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Self {
                r: channel(0)?,
                g: channel(2)?,
                b: channel(4)?,
                a: channel(6)?,
            }),
            _ => None,
        }
    }
}

/// Accepts a color name (`"red"`, `"White"`, ...) or `#rrggbb` / `#rrggbbaa`.
impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parsed = match s.strip_prefix('#') {
            Some(hex) => Self::from_hex(hex),
            None => Self::NAMED
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(s))
                .map(|&(_, color)| color),
        };
        parsed.ok_or_else(|| ParseColorError(s.to_string()))
    }
}
