// SPDX-License-Identifier: GPL-3.0-or-later

pub mod basicbrush;
pub mod brushstate;
pub mod features;
pub mod registry;
pub mod settings;
pub mod waterbrush;

pub use basicbrush::BasicBrush;
pub use brushstate::Brush;
pub use features::{BrushFeature, FeatureSet};
pub use registry::BrushKind;
pub use settings::BrushSettings;
pub use waterbrush::{StrokeState, WaterBrush};
