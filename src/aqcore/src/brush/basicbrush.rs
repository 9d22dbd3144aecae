// SPDX-License-Identifier: GPL-3.0-or-later

use super::brushstate::Brush;
use super::features::{BrushFeature, FeatureSet};
use super::settings::BrushSettings;
use crate::paint::composite::draw_stencil;
use crate::paint::{Color, MaskCache, Point, Stencil, Surface};

use tracing::{trace, warn};

use std::str::FromStr;

/// A plain round brush.
///
/// Besides being usable on its own, this provides stencil construction
/// and segment painting for the brushes built on top of it.
pub struct BasicBrush {
    width: i32,
    color: Color,
    thickness: i32,
    masks: MaskCache,
    stencil: Option<Stencil>,
    in_progress: bool,
    last_point: Point,
    distance: i32,
}

impl BasicBrush {
    pub const DEFAULT_WIDTH: i32 = 10;
    pub const DEFAULT_THICKNESS: i32 = 100;

    pub fn new() -> BasicBrush {
        BasicBrush {
            width: Self::DEFAULT_WIDTH,
            color: Color::BLACK,
            thickness: Self::DEFAULT_THICKNESS,
            masks: MaskCache::new(),
            stencil: None,
            in_progress: false,
            last_point: Point::default(),
            distance: 0,
        }
    }

    /// Rebuild the stencil with the given color.
    ///
    /// The stencil is a disk of the brush's width whose opacity is scaled
    /// by the brush thickness.
    pub fn make_stencil(&mut self, color: Color) {
        let opacity = (self.thickness * 255 / 100) as u8;
        self.stencil = Some(Stencil::new(
            self.masks.circle(self.width as u32),
            color,
            opacity,
        ));
    }

    pub fn stencil(&self) -> Option<&Stencil> {
        self.stencil.as_ref()
    }

    /// Distance in pixels between two dabs along a line
    pub fn spacing(&self) -> i32 {
        (self.width / 4).max(1)
    }

    pub fn last_point(&self) -> Point {
        self.last_point
    }

    /// Start a stroke at this point without painting anything
    pub fn move_to(&mut self, p: Point) {
        self.in_progress = true;
        self.last_point = p;
        self.distance = 0;
    }

    fn dab(&mut self, surface: &mut Surface, p: Point) {
        if self.stencil.is_none() {
            self.make_stencil(self.color);
        }
        if let Some(stencil) = &self.stencil {
            draw_stencil(surface, p, stencil);
        }
    }

    /// Paint the current stencil along the line from the last point to `end`.
    ///
    /// A dab is placed every [`spacing`](Self::spacing) pixels. Leftover
    /// distance carries over to the next segment.
    pub fn stroke_to(&mut self, surface: &mut Surface, end: Point) {
        let mut x0 = self.last_point.x;
        let mut y0 = self.last_point.y;
        let x1 = end.x;
        let y1 = end.y;

        let dy = y1 - y0;
        let dx = x1 - x0;

        let (stepy, dy) = if dy < 0 { (-1, dy * -2) } else { (1, dy * 2) };
        let (stepx, dx) = if dx < 0 { (-1, dx * -2) } else { (1, dx * 2) };

        let spacing = self.spacing();
        let mut distance = self.distance;

        if dx > dy {
            let mut fraction = dy - (dx / 2);
            while x0 != x1 {
                if fraction >= 0 {
                    y0 += stepy;
                    fraction -= dx;
                }
                x0 += stepx;
                fraction += dy;
                distance += 1;
                if distance >= spacing {
                    self.dab(surface, Point::new(x0, y0));
                    distance = 0;
                }
            }
        } else {
            let mut fraction = dx - (dy / 2);
            while y0 != y1 {
                if fraction >= 0 {
                    x0 += stepx;
                    fraction -= dy;
                }
                y0 += stepy;
                fraction += dx;
                distance += 1;
                if distance >= spacing {
                    self.dab(surface, Point::new(x0, y0));
                    distance = 0;
                }
            }
        }

        trace!(
            "Stroked {:?} -> {:?}, {} px left over",
            self.last_point,
            end,
            distance
        );
        self.distance = distance;
        self.last_point = end;
    }
}

impl Brush for BasicBrush {
    fn name(&self) -> &'static str {
        "BasicBrush"
    }

    fn display_name(&self) -> &'static str {
        "Basic Brush"
    }

    fn shortcut_id(&self) -> &'static str {
        "basicbrush"
    }

    fn features(&self) -> FeatureSet {
        [
            BrushFeature::Width,
            BrushFeature::Color,
            BrushFeature::Thickness,
        ]
        .into_iter()
        .collect()
    }

    fn width(&self) -> i32 {
        self.width
    }

    fn set_width(&mut self, width: i32) {
        let width = BrushFeature::Width.bound(width);
        if width != self.width {
            self.width = width;
            self.stencil = None;
        }
    }

    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
        self.stencil = None;
    }

    fn thickness(&self) -> i32 {
        self.thickness
    }

    fn set_thickness(&mut self, thickness: i32) {
        self.thickness = BrushFeature::Thickness.bound(thickness);
        self.stencil = None;
    }

    fn draw_point(&mut self, surface: &mut Surface, p: Point, _pressure: f32) {
        self.move_to(p);
        self.dab(surface, p);
    }

    fn draw_line_to(&mut self, surface: &mut Surface, end: Point, pressure: f32) {
        if self.in_progress {
            self.stroke_to(surface, end);
        } else {
            self.draw_point(surface, end, pressure);
        }
    }

    fn end_stroke(&mut self) {
        self.in_progress = false;
        self.distance = 0;
    }

    fn in_stroke(&self) -> bool {
        self.in_progress
    }

    fn settings(&self) -> BrushSettings {
        let mut s = BrushSettings::new();
        s.insert(BrushFeature::Width.key(), self.width);
        s.insert(BrushFeature::Thickness.key(), self.thickness);
        s.insert(BrushFeature::Color.key(), self.color.to_string());
        s
    }

    fn default_settings(&self) -> BrushSettings {
        let mut s = BrushSettings::new();
        s.insert(BrushFeature::Width.key(), Self::DEFAULT_WIDTH);
        s.insert(BrushFeature::Thickness.key(), Self::DEFAULT_THICKNESS);
        s.insert(BrushFeature::Color.key(), Color::BLACK.to_string());
        s
    }

    fn apply_settings(&mut self, settings: &BrushSettings) {
        self.set_width(settings.int_value(BrushFeature::Width.key(), self.width));
        self.set_thickness(settings.int_value(BrushFeature::Thickness.key(), self.thickness));

        let color = settings.str_value(BrushFeature::Color.key(), &self.color.to_string());
        match Color::from_str(&color) {
            Ok(c) => self.set_color(c),
            Err(e) => warn!("Invalid brush color {:?}: {}", color, e),
        }
    }
}

impl Default for BasicBrush {
    fn default() -> Self {
        Self::new()
    }
}
