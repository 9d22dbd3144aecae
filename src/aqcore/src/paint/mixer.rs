// SPDX-License-Identifier: GPL-3.0-or-later

//! Pigment mixing math used by the water brush

use super::color::{clamp_channel, Color};

type Channel = (fn(&Color) -> u8, fn(&mut Color, u8));

/// Combine the color channels of `a` and `b` with `f`.
/// The result takes the given alpha value.
fn blend_rgb(a: &Color, b: &Color, alpha: u8, f: impl Fn(i32, i32) -> i32) -> Color {
    let channels: [Channel; 3] = [
        (|c| c.r, |c, v| c.r = v),
        (|c| c.g, |c, v| c.g = v),
        (|c| c.b, |c, v| c.b = v),
    ];

    let mut out = Color::TRANSPARENT.with_alpha(alpha);
    for (get, set) in channels {
        set(&mut out, clamp_channel(f(get(a) as i32, get(b) as i32)));
    }
    out
}

/// Mingle the color being painted with the brush's own color.
///
/// `remain` (0–255) is how much of `a` is left: at 255 the result is `a`,
/// at 0 it is `b`. The alpha value is always taken from `b`.
pub fn mingle(a: &Color, b: &Color, remain: i32) -> Color {
    let remain = remain.clamp(0, 255);
    blend_rgb(a, b, b.a, |a, b| (a * remain + b * (255 - remain)) / 255)
}

/// Mix pigment into a base color.
///
/// `mixin` is the percentage (0–100) of `pigment` in the result.
/// The alpha value is taken from `pigment`.
pub fn mix(base: &Color, pigment: &Color, mixin: i32) -> Color {
    let mixin = mixin.clamp(0, 100);
    blend_rgb(base, pigment, pigment.a, |base, pigment| {
        (pigment * mixin + base * (100 - mixin)) / 100
    })
}
