// SPDX-License-Identifier: GPL-3.0-or-later

use super::features::FeatureSet;
use super::settings::BrushSettings;
use crate::paint::{Color, Point, Surface};

/// The interface shared by all brush types
pub trait Brush {
    /// Stable identifier of this brush type
    fn name(&self) -> &'static str;

    /// Human readable name
    fn display_name(&self) -> &'static str;

    /// Key of this brush's entry in the shortcut configuration
    fn shortcut_id(&self) -> &'static str;

    /// The features this brush can be configured with
    fn features(&self) -> FeatureSet;

    fn width(&self) -> i32;
    fn set_width(&mut self, width: i32);

    fn color(&self) -> Color;
    fn set_color(&mut self, color: Color);

    fn thickness(&self) -> i32;
    fn set_thickness(&mut self, thickness: i32);

    /// Start a new stroke at this point.
    ///
    /// A stroke that consists of only this call is an isolated dab.
    fn draw_point(&mut self, surface: &mut Surface, p: Point, pressure: f32);

    /// Continue the current stroke to this point.
    ///
    /// If there is no active stroke, this becomes the starting point.
    fn draw_line_to(&mut self, surface: &mut Surface, end: Point, pressure: f32);

    /// End the current stroke (if any)
    fn end_stroke(&mut self);

    /// Is there a stroke in progress
    fn in_stroke(&self) -> bool;

    /// The current configuration of this brush
    fn settings(&self) -> BrushSettings;

    /// The configuration of a freshly created brush of this type
    fn default_settings(&self) -> BrushSettings;

    /// Configure the brush. Keys that are absent leave the current value as is.
    fn apply_settings(&mut self, settings: &BrushSettings);
}
