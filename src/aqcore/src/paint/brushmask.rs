// SPDX-License-Identifier: GPL-3.0-or-later

/// Largest supported mask side length
pub const MAX_DIAMETER: u32 = 255;

/// A square 8 bit alpha mask
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlphaMask {
    /// Mask side length
    pub diameter: u32,

    /// Mask values (length is diameter^2)
    pub mask: Vec<u8>,
}

fn square(v: f32) -> f32 {
    v * v
}

impl AlphaMask {
    /// A filled disk inscribed in a `diameter × diameter` square.
    ///
    /// A pixel is inside when its centre lies strictly inside the circle.
    pub fn new_circle(diameter: u32) -> AlphaMask {
        let radius = diameter as f32 / 2.0;
        let rr = square(radius);
        let offset = 0.5_f32;

        let mut mask = vec![0u8; diameter as usize * diameter as usize];
        let mut i = 0;

        for y in 0..diameter {
            let yy = square(y as f32 - radius + offset);
            for x in 0..diameter {
                let xx = square(x as f32 - radius + offset);
                if (yy + xx) < rr {
                    mask[i] = 255;
                }
                i += 1;
            }
        }
        AlphaMask { diameter, mask }
    }

    pub fn is_inside(&self, x: u32, y: u32) -> bool {
        x < self.diameter && y < self.diameter && self.mask[y as usize * self.diameter as usize + x as usize] > 0
    }

    pub fn covered_pixels(&self) -> usize {
        self.mask.iter().filter(|&&m| m > 0).count()
    }
}

/// Holds the most recently generated circular mask.
///
/// A new mask is generated only when a different diameter is requested.
#[derive(Default, Debug)]
pub struct MaskCache {
    cached: Option<AlphaMask>,
}

impl MaskCache {
    pub fn new() -> MaskCache {
        MaskCache { cached: None }
    }

    /// Get a circular mask of the given diameter
    pub fn circle(&mut self, diameter: u32) -> &AlphaMask {
        if self.cached.as_ref().map(|m| m.diameter) != Some(diameter) {
            self.cached = Some(AlphaMask::new_circle(diameter));
        }
        self.cached.as_ref().unwrap()
    }

    /// Diameter of the currently cached mask
    pub fn cached_diameter(&self) -> Option<u32> {
        self.cached.as_ref().map(|m| m.diameter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_mask() {
        let mask = AlphaMask::new_circle(5);
        #[rustfmt::skip]
        let expected: [u8; 25] = [
            0,   255, 255, 255, 0,
            255, 255, 255, 255, 255,
            255, 255, 255, 255, 255,
            255, 255, 255, 255, 255,
            0,   255, 255, 255, 0,
        ];
        assert_eq!(mask.mask, expected);
        assert_eq!(mask.covered_pixels(), 21);
        assert!(mask.is_inside(2, 2));
        assert!(!mask.is_inside(0, 0));
        assert!(!mask.is_inside(5, 2));
    }

    #[test]
    fn test_tiny_masks() {
        assert_eq!(AlphaMask::new_circle(1).mask, vec![255]);
        assert_eq!(AlphaMask::new_circle(2).mask, vec![255; 4]);
        assert!(AlphaMask::new_circle(0).mask.is_empty());
    }

    #[test]
    fn test_cache_regenerates_on_size_change() {
        let mut cache = MaskCache::new();
        assert_eq!(cache.cached_diameter(), None);

        assert_eq!(cache.circle(8).diameter, 8);
        assert_eq!(cache.cached_diameter(), Some(8));

        let m = cache.circle(3);
        assert_eq!(m.diameter, 3);
        assert_eq!(m.mask.len(), 9);
        assert_eq!(cache.cached_diameter(), Some(3));
    }

    #[test]
    fn test_cache_keeps_mask_for_same_size() {
        let mut cache = MaskCache::new();
        let first = cache.circle(6).mask.as_ptr();
        assert_eq!(cache.circle(6).mask.as_ptr(), first);
        assert_eq!(cache.circle(6).mask, AlphaMask::new_circle(6).mask);

        let other = cache.circle(7).mask.as_ptr();
        assert_ne!(other, first);
        assert_eq!(cache.circle(7).mask.as_ptr(), other);
    }
}
