// SPDX-License-Identifier: GPL-3.0-or-later

use super::brushmask::AlphaMask;
use super::color::{mult8, premultiply_pixel8, unpremultiply_pixel8, Color, Pixel8, ALPHA_CHANNEL};
use super::image::Surface;
use super::rectiter::{rect_rows, rect_rows_mut};
use super::{Point, Rectangle};

/// A premultiplied brush stamp
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stencil {
    pub diameter: u32,
    pub pixels: Vec<Pixel8>,
    pub color: Color,
}

impl Stencil {
    /// Fill the shape of `mask` with a color.
    ///
    /// The stamp's alpha is the product of the mask value, the color's
    /// alpha and `opacity`.
    pub fn new(mask: &AlphaMask, color: Color, opacity: u8) -> Stencil {
        let coverage = mult8(color.a as u32, opacity as u32);
        let pixels = mask
            .mask
            .iter()
            .map(|&m| color.with_alpha(mult8(m as u32, coverage) as u8).as_pixel8())
            .collect();

        Stencil {
            diameter: mask.diameter,
            pixels,
            color,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.iter().all(|p| p[ALPHA_CHANNEL] == 0)
    }
}

/// Composite a premultiplied pixel over a surface pixel
fn blend_over(dest: Pixel8, src: Pixel8, premultiplied: bool) -> Pixel8 {
    let sa = src[ALPHA_CHANNEL] as u32;
    if sa == 0 {
        return dest;
    }

    let d = if premultiplied {
        dest
    } else {
        premultiply_pixel8(dest)
    };

    let ia = 255 - sa;
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = (src[i] as u32 + mult8(d[i] as u32, ia)).min(255) as u8;
    }

    if premultiplied {
        out
    } else {
        unpremultiply_pixel8(out)
    }
}

/// Stamp a stencil centered at the given point using source-over blending.
///
/// Returns the affected area, or None if the stencil fell outside the surface.
pub fn draw_stencil(surface: &mut Surface, center: Point, stencil: &Stencil) -> Option<Rectangle> {
    let rect = Rectangle::centered_square(center, stencil.diameter as i32)?;
    let dest_rect = rect.cropped(surface.width(), surface.height())?;
    let src_rect = dest_rect.offset(-rect.x, -rect.y);

    let premultiplied = surface.is_premultiplied();
    let stride = surface.width();
    for (dest, src) in rect_rows_mut(surface.pixels_mut(), stride, &dest_rect).zip(rect_rows(
        &stencil.pixels,
        stencil.diameter as usize,
        &src_rect,
    )) {
        for (d, s) in dest.iter_mut().zip(src.iter()) {
            *d = blend_over(*d, *s, premultiplied);
        }
    }

    Some(dest_rect)
}
