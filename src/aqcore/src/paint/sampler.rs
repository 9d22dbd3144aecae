// SPDX-License-Identifier: GPL-3.0-or-later

use super::brushmask::{AlphaMask, MaskCache, MAX_DIAMETER};
use super::color::{Color, ALPHA_CHANNEL, BLUE_CHANNEL, GREEN_CHANNEL, RED_CHANNEL};
use super::image::Surface;
use super::{Point, Rectangle};

use tracing::debug;

/// Picks up the average color under a circular area of a surface
#[derive(Default, Debug)]
pub struct ColorSampler {
    masks: MaskCache,
}

impl ColorSampler {
    pub fn new() -> ColorSampler {
        ColorSampler {
            masks: MaskCache::new(),
        }
    }

    /// Get the average color of the disk of diameter `width` centered at `center`.
    ///
    /// The disk's bounding square starts at `center - width/2`. Pixels outside
    /// the surface read as transparent, and transparent pixels count as white.
    /// If there is nothing to sample, or `width` is larger than
    /// [`MAX_DIAMETER`], [`Color::BLANK`] is returned.
    pub fn fetch_color(&mut self, surface: &Surface, center: Point, width: i32) -> Color {
        if width > MAX_DIAMETER as i32 {
            debug!("Sampling width {} is too large", width);
            return Color::BLANK;
        }

        let rect = match Rectangle::centered_square(center, width) {
            Some(r) => r,
            None => {
                debug!("Cannot sample color with width {}", width);
                return Color::BLANK;
            }
        };

        let square = surface.copy_region(&rect);
        average_color(&square, self.masks.circle(width as u32))
    }

    pub fn mask_cache(&self) -> &MaskCache {
        &self.masks
    }
}

/// Average the pixels of `square` that are covered by `mask`.
///
/// If the square and the mask differ in size, [`Color::BLANK`] is returned.
pub fn average_color(square: &Surface, mask: &AlphaMask) -> Color {
    let diameter = mask.diameter as usize;
    if square.width() != diameter || square.height() != diameter {
        debug!(
            "Cannot sample a {}x{} area with a {}x{} mask",
            square.width(),
            square.height(),
            diameter,
            diameter
        );
        return Color::BLANK;
    }

    let premultiplied = square.is_premultiplied();

    let mut r_sum = 0u64;
    let mut g_sum = 0u64;
    let mut b_sum = 0u64;
    let mut a_sum = 0u64;
    let mut weight_sum = 0u64;
    let mut colored = 0u64;

    for (px, &m) in square.pixels().iter().zip(mask.mask.iter()) {
        if m == 0 {
            continue;
        }

        let a = px[ALPHA_CHANNEL] as u64;
        let (r, g, b, weight) = if a == 0 {
            (255, 255, 255, 255)
        } else if premultiplied {
            (
                px[RED_CHANNEL] as u64,
                px[GREEN_CHANNEL] as u64,
                px[BLUE_CHANNEL] as u64,
                a,
            )
        } else {
            (
                px[RED_CHANNEL] as u64 * a / 255,
                px[GREEN_CHANNEL] as u64 * a / 255,
                px[BLUE_CHANNEL] as u64 * a / 255,
                a,
            )
        };

        colored += 1;
        r_sum += r;
        g_sum += g;
        b_sum += b;
        a_sum += a;
        weight_sum += weight;
    }

    if colored == 0 || weight_sum == 0 {
        debug!("Nothing to sample in a {0}x{0} area", mask.diameter);
        return Color::BLANK;
    }

    let channel = |sum: u64| (sum * 255 / weight_sum).min(255) as u8;

    Color {
        r: channel(r_sum),
        g: channel(g_sum),
        b: channel(b_sum),
        a: (a_sum / colored).min(255) as u8,
    }
}
