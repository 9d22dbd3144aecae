// SPDX-License-Identifier: GPL-3.0-or-later

use crate::paint::brushmask::MAX_DIAMETER;

use bitvec::prelude::*;
use num_enum::{IntoPrimitive, TryFromPrimitive};

use std::fmt;

pub const WIDTH_MIN: i32 = 1;
pub const WIDTH_MAX: i32 = MAX_DIAMETER as i32;
pub const THICKNESS_MIN: i32 = 0;
pub const THICKNESS_MAX: i32 = 100;
pub const WATER_MIN: i32 = 0;
pub const WATER_MAX: i32 = 100;
pub const EXTEND_MIN: i32 = 0;
pub const EXTEND_MAX: i32 = 100;
pub const MIXIN_MIN: i32 = 0;
pub const MIXIN_MAX: i32 = 100;

/// A tunable aspect of a brush
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum BrushFeature {
    Width = 0,
    Color,
    Thickness,
    Water,
    Extend,
    Mixin,
}

impl BrushFeature {
    pub const ALL: [BrushFeature; 6] = [
        BrushFeature::Width,
        BrushFeature::Color,
        BrushFeature::Thickness,
        BrushFeature::Water,
        BrushFeature::Extend,
        BrushFeature::Mixin,
    ];

    /// The settings key of this feature
    pub fn key(self) -> &'static str {
        match self {
            BrushFeature::Width => "width",
            BrushFeature::Color => "color",
            BrushFeature::Thickness => "thickness",
            BrushFeature::Water => "water",
            BrushFeature::Extend => "extend",
            BrushFeature::Mixin => "mixin",
        }
    }

    /// Inclusive value range of a numeric feature
    pub fn limits(self) -> Option<(i32, i32)> {
        match self {
            BrushFeature::Width => Some((WIDTH_MIN, WIDTH_MAX)),
            BrushFeature::Color => None,
            BrushFeature::Thickness => Some((THICKNESS_MIN, THICKNESS_MAX)),
            BrushFeature::Water => Some((WATER_MIN, WATER_MAX)),
            BrushFeature::Extend => Some((EXTEND_MIN, EXTEND_MAX)),
            BrushFeature::Mixin => Some((MIXIN_MIN, MIXIN_MAX)),
        }
    }

    /// Clamp a value into this feature's range
    pub fn bound(self, value: i32) -> i32 {
        match self.limits() {
            Some((min, max)) => value.clamp(min, max),
            None => value,
        }
    }
}

/// The set of features a brush supports
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct FeatureSet(BitArray<[u8; 1], Lsb0>);

impl FeatureSet {
    pub fn empty() -> FeatureSet {
        FeatureSet(BitArray::new([0u8; 1]))
    }

    pub fn with(mut self, feature: BrushFeature) -> FeatureSet {
        self.0.set(u8::from(feature) as usize, true);
        self
    }

    pub fn contains(&self, feature: BrushFeature) -> bool {
        self.0[u8::from(feature) as usize]
    }

    pub fn len(&self) -> usize {
        self.0.count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.0.not_any()
    }

    pub fn iter(&self) -> impl Iterator<Item = BrushFeature> + '_ {
        self.0
            .iter_ones()
            .filter_map(|i| BrushFeature::try_from(i as u8).ok())
    }
}

impl FromIterator<BrushFeature> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = BrushFeature>>(iter: I) -> Self {
        iter.into_iter().fold(FeatureSet::empty(), FeatureSet::with)
    }
}

impl fmt::Debug for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
