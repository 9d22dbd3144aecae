// SPDX-License-Identifier: GPL-3.0-or-later

use super::basicbrush::BasicBrush;
use super::brushstate::Brush;
use super::waterbrush::WaterBrush;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use std::str::FromStr;

/// The available brush types
#[derive(Copy, Clone, Debug, Eq, PartialEq, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum BrushKind {
    Basic = 0,
    Water,
}

impl BrushKind {
    pub const ALL: [BrushKind; 2] = [BrushKind::Basic, BrushKind::Water];

    /// Create a new brush of this type with default settings
    pub fn create(self) -> Box<dyn Brush> {
        match self {
            BrushKind::Basic => Box::new(BasicBrush::new()),
            BrushKind::Water => Box::new(WaterBrush::new()),
        }
    }

    /// The stable identifier of this brush type
    pub fn name(self) -> &'static str {
        match self {
            BrushKind::Basic => "BasicBrush",
            BrushKind::Water => "WaterBrush",
        }
    }

    pub fn from_name(name: &str) -> Option<BrushKind> {
        BrushKind::ALL.into_iter().find(|k| k.name() == name)
    }
}

impl FromStr for BrushKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(BrushKind::Basic),
            "water" => Ok(BrushKind::Water),
            _ => BrushKind::from_name(s).ok_or_else(|| {
                format!("invalid brush '{s}', should be one of 'basic' or 'water'")
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brush::features::BrushFeature;

    #[test]
    fn test_factory() {
        for kind in BrushKind::ALL {
            let brush = kind.create();
            assert_eq!(brush.name(), kind.name());
            assert_eq!(BrushKind::from_name(brush.name()), Some(kind));
            assert!(!brush.in_stroke());
            assert_eq!(brush.settings(), brush.default_settings());
        }
    }

    #[test]
    fn test_capabilities() {
        let water = BrushKind::Water.create();
        for f in BrushFeature::ALL {
            assert!(water.features().contains(f), "{:?}", f);
        }
        assert_eq!(water.shortcut_id(), "waterbrush");

        let basic = BrushKind::Basic.create();
        assert!(basic.features().contains(BrushFeature::Thickness));
        assert!(!basic.features().contains(BrushFeature::Water));
    }

    #[test]
    fn test_parse() {
        assert_eq!("water".parse::<BrushKind>(), Ok(BrushKind::Water));
        assert_eq!("BasicBrush".parse::<BrushKind>(), Ok(BrushKind::Basic));
        assert!("oil".parse::<BrushKind>().is_err());

        assert_eq!(u8::from(BrushKind::Water), 1);
        assert_eq!(BrushKind::try_from(0u8).ok(), Some(BrushKind::Basic));
        assert!(BrushKind::try_from(9u8).is_err());
    }
}
