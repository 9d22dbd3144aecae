// SPDX-License-Identifier: GPL-3.0-or-later

use aqcore::brush::*;
use aqcore::paint::*;

fn white_canvas() -> Surface {
    Surface::filled(64, 128, PixelFormat::Argb32, Color::WHITE)
}

#[test]
fn test_stroke_on_white_canvas() {
    let mut canvas = white_canvas();
    let mut brush = WaterBrush::new();
    brush.set_color(Color::rgb8(200, 50, 50));
    brush.set_mixin(20);
    brush.set_extend(50);

    brush.draw_point(&mut canvas, Point::new(10, 10), 1.0);
    let start = *brush.stroke().unwrap();
    assert_eq!(start.color_remain, 255);

    brush.draw_line_to(&mut canvas, Point::new(10, 110), 1.0);
    let after = *brush.stroke().unwrap();

    // (100 / 2) * (100 - 50) / 100 = 25
    assert_eq!(after.color_remain, 230);
    assert_eq!(after.last_point, Point::new(10, 110));
    assert_eq!(after.last_color, start.last_color);

    let stencil_color = brush.stencil().unwrap().color;
    assert_ne!(stencil_color, after.last_color);
    assert_eq!(stencil_color, Color::rgb8(239, 197, 197));
    assert_eq!(after.mingled_color, stencil_color);

    // The segment was painted with the mingled color
    assert_eq!(canvas.color_at(Point::new(10, 60)), stencil_color);
    assert_eq!(canvas.color_at(Point::new(40, 60)), Color::WHITE);
}

#[test]
fn test_color_remain_stays_in_range() {
    let mut canvas = white_canvas();
    let mut seed = 12345u32;
    let mut next = move || {
        seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
        (seed >> 16) as i32
    };

    for extend in [0, 1, 50, 99, 100] {
        let mut brush = WaterBrush::new();
        brush.set_width(4);
        brush.set_extend(extend);
        brush.draw_point(&mut canvas, Point::new(32, 64), 1.0);

        let mut previous = 255;
        for _ in 0..50 {
            let p = Point::new(next() % 2000 - 1000, next() % 2000 - 1000);
            brush.draw_line_to(&mut canvas, p, 0.5);
            let remain = brush.stroke().unwrap().color_remain;
            assert!((0..=255).contains(&remain), "remain = {}", remain);
            assert!(remain <= previous, "color must never be replenished mid-stroke");
            previous = remain;
        }
        brush.end_stroke();
    }
}

#[test]
fn test_full_extend_never_depletes() {
    let mut canvas = white_canvas();
    let mut brush = WaterBrush::new();
    brush.set_extend(100);
    brush.draw_point(&mut canvas, Point::new(5, 5), 1.0);
    brush.draw_line_to(&mut canvas, Point::new(60, 120), 1.0);
    assert_eq!(brush.stroke().unwrap().color_remain, 255);
}

#[test]
fn test_color_runs_out() {
    let mut canvas = white_canvas();
    let mut brush = WaterBrush::new();
    let brush_color = Color::rgb8(10, 20, 30);
    brush.set_color(brush_color);
    brush.set_extend(0);
    brush.draw_point(&mut canvas, Point::new(5, 5), 1.0);

    // 600px uses up 300 units of color
    brush.draw_line_to(&mut canvas, Point::new(5, 605), 1.0);
    let stroke = brush.stroke().unwrap();
    assert_eq!(stroke.color_remain, 0);
    assert_eq!(stroke.mingled_color, brush_color);
}

#[test]
fn test_picks_up_painted_color() {
    let mut canvas = Surface::filled(64, 64, PixelFormat::Argb32Premultiplied, Color::WHITE);
    let green = Color::rgb8(0, 160, 0);

    let mut marker = BrushKind::Basic.create();
    marker.set_width(30);
    marker.set_color(green);
    marker.draw_point(&mut canvas, Point::new(32, 32), 1.0);
    marker.end_stroke();

    let mut brush = WaterBrush::new();
    brush.set_width(8);
    brush.set_color(Color::rgb8(0, 0, 200));
    brush.set_mixin(0);
    brush.draw_point(&mut canvas, Point::new(32, 32), 1.0);
    assert_eq!(brush.stroke().unwrap().last_color, Color::rgb8(0, 160, 0));

    brush.set_mixin(100);
    brush.draw_point(&mut canvas, Point::new(32, 32), 1.0);
    assert_eq!(brush.stroke().unwrap().last_color, Color::rgb8(0, 0, 200));
}

#[test]
fn test_strokes_through_factory() {
    for kind in BrushKind::ALL {
        let mut canvas = white_canvas();
        let mut brush = kind.create();
        let mut settings = brush.default_settings();
        settings.insert("color", "#0000ff");
        settings.insert("width", 6);
        brush.apply_settings(&settings);

        brush.draw_point(&mut canvas, Point::new(10, 20), 1.0);
        brush.draw_line_to(&mut canvas, Point::new(50, 20), 1.0);
        brush.end_stroke();
        assert!(!brush.in_stroke());

        let c = canvas.color_at(Point::new(30, 20));
        assert!(c.b > c.r, "{}: {} should be bluish", brush.name(), c);
    }
}
