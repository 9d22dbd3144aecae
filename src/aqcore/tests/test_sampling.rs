// SPDX-License-Identifier: GPL-3.0-or-later

use aqcore::paint::*;

#[test]
fn test_uniform_color_roundtrip() {
    let colors = [
        Color::rgb8(200, 50, 50),
        Color::rgb8(0, 0, 0),
        Color::rgb8(1, 254, 128),
    ];
    let mut sampler = ColorSampler::new();
    for format in [PixelFormat::Argb32, PixelFormat::Argb32Premultiplied] {
        for c in colors {
            let surface = Surface::filled(64, 64, format, c);
            for width in 1..40 {
                assert_eq!(
                    sampler.fetch_color(&surface, Point::new(32, 32), width),
                    c,
                    "width {} {:?}",
                    width,
                    format
                );
            }
        }
    }
}

#[test]
fn test_half_transparent() {
    let c = Color::rgb8(0, 0, 255);
    let mut surface = Surface::new(20, 20, PixelFormat::Argb32);
    let px = surface.encode(c);
    for (i, p) in surface.pixels_mut().iter_mut().enumerate() {
        if i % 20 >= 10 {
            *p = px;
        }
    }

    let mut sampler = ColorSampler::new();
    let sampled = sampler.fetch_color(&surface, Point::new(10, 10), 10);

    assert!((127..=128).contains(&sampled.a), "alpha = {}", sampled.a);
    // Transparent pixels read as white
    assert_eq!(sampled.r, 127);
    assert_eq!(sampled.g, 127);
    assert_eq!(sampled.b, 255);
}

#[test]
fn test_sampling_at_the_edge() {
    let surface = Surface::filled(32, 32, PixelFormat::Argb32, Color::BLACK);
    let mut sampler = ColorSampler::new();

    // A quarter of the disk lies on the canvas, the rest reads as white
    let sampled = sampler.fetch_color(&surface, Point::new(0, 0), 16);
    assert!(sampled.a > 0 && sampled.a < 128, "alpha = {}", sampled.a);
    assert!(sampled.r > 128, "red = {}", sampled.r);

    let outside = sampler.fetch_color(&surface, Point::new(-100, -100), 16);
    assert_eq!(outside, Color::rgba8(255, 255, 255, 0));
}

#[test]
fn test_premultiplied_and_straight_agree() {
    let c = Color::rgba8(200, 100, 40, 170);
    let straight = Surface::filled(16, 16, PixelFormat::Argb32, c);
    let premultiplied = straight.converted(PixelFormat::Argb32Premultiplied);

    let mut sampler = ColorSampler::new();
    let a = sampler.fetch_color(&straight, Point::new(8, 8), 9);
    let b = sampler.fetch_color(&premultiplied, Point::new(8, 8), 9);

    assert_eq!(a.a, 170);
    assert_eq!(b.a, 170);
    for (x, y) in [(a.r, b.r), (a.g, b.g), (a.b, b.b)] {
        assert!((x as i32 - y as i32).abs() <= 1, "{} vs {}", a, b);
    }
}
