// SPDX-License-Identifier: GPL-3.0-or-later

use super::color::{premultiply_pixel8, unpremultiply_pixel8, Color, Pixel8, ZERO_PIXEL8};
use super::rectiter::{rect_rows, rect_rows_mut};
use super::{Point, Rectangle};

/// How the color channels of a surface relate to its alpha channel
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PixelFormat {
    /// Color channels are stored as is
    Argb32,

    /// Color channels are multiplied by alpha
    Argb32Premultiplied,
}

/// A flat raster canvas
#[derive(Clone, Debug)]
pub struct Surface {
    pixels: Vec<Pixel8>,
    width: usize,
    height: usize,
    format: PixelFormat,
}

impl Surface {
    /// Create a fully transparent surface
    pub fn new(width: usize, height: usize, format: PixelFormat) -> Surface {
        Surface {
            pixels: vec![ZERO_PIXEL8; width * height],
            width,
            height,
            format,
        }
    }

    pub fn filled(width: usize, height: usize, format: PixelFormat, color: Color) -> Surface {
        let mut s = Surface::new(width, height, format);
        s.fill(color);
        s
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_premultiplied(&self) -> bool {
        self.format == PixelFormat::Argb32Premultiplied
    }

    pub fn pixels(&self) -> &[Pixel8] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Pixel8] {
        &mut self.pixels
    }

    /// Get the raw pixel at the given position in this surface's format.
    /// Positions outside the surface read as transparent.
    pub fn pixel_at(&self, p: Point) -> Pixel8 {
        if p.x < 0 || p.y < 0 || p.x as usize >= self.width || p.y as usize >= self.height {
            ZERO_PIXEL8
        } else {
            self.pixels[p.y as usize * self.width + p.x as usize]
        }
    }

    /// Get the unpremultiplied color at the given position
    pub fn color_at(&self, p: Point) -> Color {
        let px = self.pixel_at(p);
        if self.is_premultiplied() {
            Color::from_pixel8(px)
        } else {
            Color::from_unpremultiplied_pixel8(px)
        }
    }

    /// Encode a color in this surface's pixel format
    pub fn encode(&self, c: Color) -> Pixel8 {
        match self.format {
            PixelFormat::Argb32 => c.as_unpremultiplied_pixel8(),
            PixelFormat::Argb32Premultiplied => c.as_pixel8(),
        }
    }

    pub fn fill(&mut self, c: Color) {
        let px = self.encode(c);
        self.pixels.fill(px);
    }

    /// Copy a region of this surface.
    ///
    /// The result has the same format and exactly the size of `rect`.
    /// Parts of the region outside this surface are transparent.
    pub fn copy_region(&self, rect: &Rectangle) -> Surface {
        let mut out = Surface::new(rect.w as usize, rect.h as usize, self.format);

        let src_rect = match rect.cropped(self.width, self.height) {
            Some(r) => r,
            None => return out,
        };
        let dest_rect = src_rect.offset(-rect.x, -rect.y);

        for (src, dest) in rect_rows(&self.pixels, self.width, &src_rect)
            .zip(rect_rows_mut(&mut out.pixels, out.width, &dest_rect))
        {
            dest.copy_from_slice(src);
        }

        out
    }

    /// Return a copy of this surface converted to the given format
    pub fn converted(&self, format: PixelFormat) -> Surface {
        let convert: fn(Pixel8) -> Pixel8 = match (self.format, format) {
            (PixelFormat::Argb32, PixelFormat::Argb32Premultiplied) => premultiply_pixel8,
            (PixelFormat::Argb32Premultiplied, PixelFormat::Argb32) => unpremultiply_pixel8,
            _ => |p| p,
        };
        Surface {
            pixels: self.pixels.iter().map(|&p| convert(p)).collect(),
            width: self.width,
            height: self.height,
            format,
        }
    }

    /// Get the content as unpremultiplied RGBA bytes, row by row
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let c = self.color_at(Point::new(x, y));
                out.extend_from_slice(&[c.r, c.g, c.b, c.a]);
            }
        }
        out
    }
}
