// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt;
use std::str::FromStr;

/// A raw surface pixel in B, G, R, A byte order
pub type Pixel8 = [u8; 4];

pub const BLUE_CHANNEL: usize = 0;
pub const GREEN_CHANNEL: usize = 1;
pub const RED_CHANNEL: usize = 2;
pub const ALPHA_CHANNEL: usize = 3;

pub const ZERO_PIXEL8: Pixel8 = [0; 4];

/// An 8 bit per channel color.
///
/// Colors are never implicitly premultiplied. Conversions from and to
/// surface pixels state which representation they expect.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba8(0, 0, 0, 0);

    /// Transparent white. Returned when there is nothing to sample.
    pub const BLANK: Self = Self::rgba8(255, 255, 255, 0);

    pub const BLACK: Self = Self::rgb8(0, 0, 0);
    pub const WHITE: Self = Self::rgb8(255, 255, 255);

    pub const fn rgb8(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    pub fn with_alpha(self, a: u8) -> Color {
        Color { a, ..self }
    }

    pub fn from_argb32(c: u32) -> Color {
        Color {
            r: ((c & 0x00_ff0000) >> 16) as u8,
            g: ((c & 0x00_00ff00) >> 8) as u8,
            b: (c & 0x00_0000ff) as u8,
            a: ((c & 0xff_000000) >> 24) as u8,
        }
    }

    pub fn as_argb32(&self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    // Interpret the pixel as is, without unpremultiplying
    pub fn from_unpremultiplied_pixel8(p: Pixel8) -> Color {
        Color {
            r: p[RED_CHANNEL],
            g: p[GREEN_CHANNEL],
            b: p[BLUE_CHANNEL],
            a: p[ALPHA_CHANNEL],
        }
    }

    pub fn from_pixel8(p: Pixel8) -> Color {
        Color::from_unpremultiplied_pixel8(unpremultiply_pixel8(p))
    }

    pub fn as_unpremultiplied_pixel8(&self) -> Pixel8 {
        [self.b, self.g, self.r, self.a]
    }

    // Get a premultiplied pixel value from this color
    pub fn as_pixel8(&self) -> Pixel8 {
        premultiply_pixel8(self.as_unpremultiplied_pixel8())
    }
}

pub fn clamp_channel(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a < 255 {
            write!(f, "#{:08x}", self.as_argb32())
        } else {
            write!(f, "#{:06x}", self.as_argb32() & 0x00_ffffff)
        }
    }
}

impl FromStr for Color {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err("empty color string");
        }
        if !s.starts_with('#') || (s.len() != 7 && s.len() != 9) {
            return Err("doesn't look like a color string");
        }

        let digits = &s[1..];
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err("not a valid color");
        }

        if let Ok(v) = u32::from_str_radix(digits, 16) {
            Ok(if s.len() == 7 {
                Color::from_argb32(v | 0xff_000000)
            } else {
                Color::from_argb32(v)
            })
        } else {
            Err("not a valid color")
        }
    }
}

pub fn unpremultiply_pixel8(p: Pixel8) -> Pixel8 {
    if p[ALPHA_CHANNEL] == 255 {
        return p;
    } else if p[ALPHA_CHANNEL] == 0 {
        return ZERO_PIXEL8;
    }

    let ia = 0xff00ff / p[ALPHA_CHANNEL] as i32;
    [
        ((p[0] as i32 * ia + 0x8000) >> 16).min(255) as u8,
        ((p[1] as i32 * ia + 0x8000) >> 16).min(255) as u8,
        ((p[2] as i32 * ia + 0x8000) >> 16).min(255) as u8,
        p[3],
    ]
}

/// Multiply two 8 bit fractions, rounding to nearest
pub fn mult8(a: u32, b: u32) -> u32 {
    let c = a * b + 0x80;
    ((c >> 8) + c) >> 8
}

pub fn premultiply_pixel8(p: Pixel8) -> Pixel8 {
    if p[ALPHA_CHANNEL] == 255 {
        return p;
    } else if p[ALPHA_CHANNEL] == 0 {
        return ZERO_PIXEL8;
    }
    let a = p[ALPHA_CHANNEL] as u32;
    [
        mult8(p[0] as u32, a) as u8,
        mult8(p[1] as u32, a) as u8,
        mult8(p[2] as u32, a) as u8,
        p[3],
    ]
}
