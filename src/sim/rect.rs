//! Axis-aligned rectangle in screen space
//!
//! Screen coordinates: origin at the top-left, y grows downward, so `top < bottom`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle (position is the top-left corner)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Move so the left edge sits at `left` (size unchanged)
    #[inline]
    pub fn set_left(&mut self, left: f32) {
        self.x = left;
    }

    /// Move so the right edge sits at `right` (size unchanged)
    #[inline]
    pub fn set_right(&mut self, right: f32) {
        self.x = right - self.width;
    }

    /// Move so the bottom edge sits at `bottom` (size unchanged)
    #[inline]
    pub fn set_bottom(&mut self, bottom: f32) {
        self.y = bottom - self.height;
    }

    /// Top-left corner
    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.right(), self.bottom())
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.center_x(), self.center_y())
    }

    /// Overlap test. Rectangles that only share an edge do not intersect, so an
    /// actor resting exactly on a platform top is not "inside" it.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 60.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 80.0);
        assert_eq!(r.center(), Vec2::new(25.0, 50.0));
    }

    #[test]
    fn test_edge_setters_keep_size() {
        let mut r = Rect::new(0.0, 0.0, 30.0, 60.0);
        r.set_bottom(600.0);
        assert_eq!(r.y, 540.0);
        r.set_right(800.0);
        assert_eq!(r.x, 770.0);
        assert_eq!((r.width, r.height), (30.0, 60.0));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let floor = Rect::new(0.0, 560.0, 800.0, 40.0);
        let standing = Rect::new(100.0, 500.0, 30.0, 60.0);
        assert!(!standing.intersects(&floor));

        let sunk = Rect::new(100.0, 500.5, 30.0, 60.0);
        assert!(sunk.intersects(&floor));
        assert!(floor.intersects(&sunk));
    }

    #[test]
    fn test_disjoint() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
    }
}
