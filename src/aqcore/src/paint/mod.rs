// SPDX-License-Identifier: GPL-3.0-or-later

pub mod brushmask;
pub mod color;
pub mod composite;
pub mod mixer;
pub mod rectiter;
pub mod sampler;

mod image;
mod rect;

// Re-export types most commonly used from the outside
pub use self::image::{PixelFormat, Surface};
pub use brushmask::{AlphaMask, MaskCache};
pub use color::{Color, Pixel8};
pub use composite::Stencil;
pub use rect::{Point, Rectangle};
pub use sampler::ColorSampler;
