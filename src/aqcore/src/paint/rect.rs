// SPDX-License-Identifier: GPL-3.0-or-later

use core::cmp::{max, min};

/// An integer canvas coordinate
#[derive(Eq, PartialEq, Debug, Clone, Copy, Default, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        let dx = (other.x - self.x) as f64;
        let dy = (other.y - self.y) as f64;
        dx.hypot(dy)
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rectangle {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Rectangle {
        assert!(w > 0 && h > 0);
        Rectangle { x, y, w, h }
    }

    /// The `width × width` square whose top-left corner is
    /// `center - (width/2, width/2)`.
    ///
    /// Returns None if the width is not positive.
    pub fn centered_square(center: Point, width: i32) -> Option<Rectangle> {
        if width <= 0 {
            return None;
        }
        let half = width / 2;
        Some(Rectangle::new(center.x - half, center.y - half, width, width))
    }

    pub fn intersected(&self, other: &Rectangle) -> Option<Rectangle> {
        let leftx = max(self.x, other.x);
        let rightx = min(self.x + self.w, other.x + other.w);
        let topy = max(self.y, other.y);
        let btmy = min(self.y + self.h, other.y + other.h);

        if leftx < rightx && topy < btmy {
            Some(Rectangle::new(leftx, topy, rightx - leftx, btmy - topy))
        } else {
            None
        }
    }

    /// Crop this rectangle to the bounds of a `w × h` image
    pub fn cropped(&self, w: usize, h: usize) -> Option<Rectangle> {
        if w == 0 || h == 0 {
            return None;
        }
        self.intersected(&Rectangle::new(0, 0, w as i32, h as i32))
    }

    pub fn offset(&self, x: i32, y: i32) -> Rectangle {
        Rectangle {
            x: self.x + x,
            y: self.y + y,
            w: self.w,
            h: self.h,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersection() {
        let r1 = Rectangle::new(0, 0, 100, 100);
        let r2 = Rectangle::new(-10, -10, 20, 20);
        let edge = Rectangle::new(99, 0, 10, 10);

        assert_eq!(r1.intersected(&r2), Some(Rectangle::new(0, 0, 10, 10)));
        assert_eq!(r1.intersected(&edge), Some(Rectangle::new(99, 0, 1, 10)));

        let touching = Rectangle::new(100, 100, 20, 20);
        assert_eq!(r1.intersected(&touching), None);
    }

    #[test]
    fn test_centered_square() {
        assert_eq!(
            Rectangle::centered_square(Point::new(10, 10), 5),
            Some(Rectangle::new(8, 8, 5, 5))
        );
        assert_eq!(
            Rectangle::centered_square(Point::new(10, 10), 4),
            Some(Rectangle::new(8, 8, 4, 4))
        );
        assert_eq!(Rectangle::centered_square(Point::new(0, 0), 0), None);
    }

    #[test]
    fn test_distance() {
        assert_eq!(Point::new(10, 10).distance(Point::new(10, 110)), 100.0);
        assert_eq!(Point::new(0, 0).distance(Point::new(3, 4)), 5.0);
    }
}
