// SPDX-License-Identifier: GPL-3.0-or-later

use super::basicbrush::BasicBrush;
use super::brushstate::Brush;
use super::features::{BrushFeature, FeatureSet};
use super::settings::BrushSettings;
use crate::paint::{mixer, Color, ColorSampler, Point, Stencil, Surface};

use tracing::debug;

/// Color state of a water brush stroke
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrokeState {
    /// The color picked up and mixed at the start of the stroke
    pub last_color: Color,

    /// The color currently being painted. Each segment mingles into this.
    pub mingled_color: Color,

    pub last_point: Point,

    /// How much of the picked up color is left (0–255)
    pub color_remain: i32,
}

impl StrokeState {
    pub const FULL: i32 = 255;

    fn start(p: Point, color: Color) -> StrokeState {
        StrokeState {
            last_color: color,
            mingled_color: color,
            last_point: p,
            color_remain: Self::FULL,
        }
    }

    /// Use up color for a segment of the given length.
    ///
    /// The higher `extend` (0–100) is, the slower the color runs out.
    pub fn deplete(&mut self, length: i64, extend: i32) {
        let used = (length / 2) * (100 - extend as i64) / 100;
        self.color_remain = (self.color_remain as i64 - used).clamp(0, Self::FULL as i64) as i32;
    }

    /// Mingle the brush color into the current color and return the result
    pub fn mingle(&mut self, brush_color: &Color) -> Color {
        self.mingled_color = mixer::mingle(&self.mingled_color, brush_color, self.color_remain);
        self.mingled_color
    }
}

/// A watercolor brush.
///
/// At the start of a stroke, the color under the brush is picked up and
/// mixed with a bit of the brush color. As the stroke goes on, the picked up
/// color runs out and the brush color gradually takes over.
pub struct WaterBrush {
    base: BasicBrush,
    water: i32,
    extend: i32,
    mixin: i32,
    sampler: ColorSampler,
    stroke: Option<StrokeState>,
}

impl WaterBrush {
    pub const DEFAULT_WATER: i32 = 50;
    pub const DEFAULT_EXTEND: i32 = 50;
    pub const DEFAULT_MIXIN: i32 = 20;

    pub fn new() -> WaterBrush {
        WaterBrush {
            base: BasicBrush::new(),
            water: Self::DEFAULT_WATER,
            extend: Self::DEFAULT_EXTEND,
            mixin: Self::DEFAULT_MIXIN,
            sampler: ColorSampler::new(),
            stroke: None,
        }
    }

    pub fn water(&self) -> i32 {
        self.water
    }

    pub fn set_water(&mut self, water: i32) {
        self.water = BrushFeature::Water.bound(water);
    }

    pub fn extend(&self) -> i32 {
        self.extend
    }

    pub fn set_extend(&mut self, extend: i32) {
        self.extend = BrushFeature::Extend.bound(extend);
    }

    pub fn mixin(&self) -> i32 {
        self.mixin
    }

    pub fn set_mixin(&mut self, mixin: i32) {
        self.mixin = BrushFeature::Mixin.bound(mixin);
    }

    /// State of the stroke in progress
    pub fn stroke(&self) -> Option<&StrokeState> {
        self.stroke.as_ref()
    }

    /// The stencil most recently prepared for painting
    pub fn stencil(&self) -> Option<&Stencil> {
        self.base.stencil()
    }

    /// Average color under a brush sized disk at the given point
    pub fn fetch_color(&mut self, surface: &Surface, center: Point) -> Color {
        self.sampler.fetch_color(surface, center, self.base.width())
    }
}

impl Brush for WaterBrush {
    fn name(&self) -> &'static str {
        "WaterBrush"
    }

    fn display_name(&self) -> &'static str {
        "Water Brush"
    }

    fn shortcut_id(&self) -> &'static str {
        "waterbrush"
    }

    fn features(&self) -> FeatureSet {
        BrushFeature::ALL.into_iter().collect()
    }

    fn width(&self) -> i32 {
        self.base.width()
    }

    fn set_width(&mut self, width: i32) {
        self.base.set_width(width);
    }

    fn color(&self) -> Color {
        self.base.color()
    }

    fn set_color(&mut self, color: Color) {
        self.base.set_color(color);
    }

    fn thickness(&self) -> i32 {
        self.base.thickness()
    }

    fn set_thickness(&mut self, thickness: i32) {
        self.base.set_thickness(thickness);
    }

    fn draw_point(&mut self, surface: &mut Surface, p: Point, _pressure: f32) {
        let sampled = self.fetch_color(surface, p);
        let color = mixer::mix(&sampled, &self.base.color(), self.mixin);
        debug!(
            "Water stroke starts at {:?}: picked up {}, painting {}",
            p, sampled, color
        );

        self.stroke = Some(StrokeState::start(p, color));
        self.base.move_to(p);
        self.base.make_stencil(color);
    }

    fn draw_line_to(&mut self, surface: &mut Surface, end: Point, pressure: f32) {
        let brush_color = self.base.color();
        let extend = self.extend;

        let Some(stroke) = self.stroke.as_mut() else {
            self.draw_point(surface, end, pressure);
            return;
        };

        let length = stroke.last_point.distance(end).round() as i64;
        stroke.deplete(length, extend);
        stroke.last_point = end;
        let color = stroke.mingle(&brush_color);

        self.base.make_stencil(color);
        self.base.stroke_to(surface, end);
    }

    fn end_stroke(&mut self) {
        if let Some(stroke) = self.stroke.take() {
            debug!(
                "Water stroke ended at {:?} with {} color left",
                stroke.last_point, stroke.color_remain
            );
        }
        self.base.end_stroke();
    }

    fn in_stroke(&self) -> bool {
        self.stroke.is_some()
    }

    fn settings(&self) -> BrushSettings {
        let mut s = self.base.settings();
        s.insert(BrushFeature::Water.key(), self.water);
        s.insert(BrushFeature::Extend.key(), self.extend);
        s.insert(BrushFeature::Mixin.key(), self.mixin);
        s
    }

    fn default_settings(&self) -> BrushSettings {
        let mut s = self.base.default_settings();
        s.insert(BrushFeature::Water.key(), Self::DEFAULT_WATER);
        s.insert(BrushFeature::Extend.key(), Self::DEFAULT_EXTEND);
        s.insert(BrushFeature::Mixin.key(), Self::DEFAULT_MIXIN);
        s
    }

    fn apply_settings(&mut self, settings: &BrushSettings) {
        self.set_water(settings.int_value(BrushFeature::Water.key(), self.water));
        self.set_extend(settings.int_value(BrushFeature::Extend.key(), self.extend));
        self.set_mixin(settings.int_value(BrushFeature::Mixin.key(), self.mixin));
        self.base.apply_settings(settings);
    }
}

impl Default for WaterBrush {
    fn default() -> Self {
        Self::new()
    }
}
