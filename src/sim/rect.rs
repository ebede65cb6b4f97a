//! Axis-aligned rectangle geometry
//!
//! Every entity is a box: `pos` is the top-left corner, `size` the full
//! width/height. Screen convention, so +y points down the play field.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Full width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Build from a centre point and half-extents
    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            pos: center - half_extents,
            size: half_extents * 2.0,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }
}

/// True iff the two boxes' projections intersect on both axes.
///
/// Separation is strict: touching edges count as overlapping.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    !(a.right() < b.left() || a.left() > b.right() || a.bottom() < b.top() || a.top() > b.bottom())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_basic() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(overlaps(&a, &b));
        assert!(overlaps(&b, &a));
    }

    #[test]
    fn test_touching_edges_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(overlaps(&a, &right));
        assert!(overlaps(&a, &below));
    }

    #[test]
    fn test_separated_on_one_axis() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Same rows, columns apart
        assert!(!overlaps(&a, &Rect::new(10.5, 0.0, 10.0, 10.0)));
        // Same columns, rows apart
        assert!(!overlaps(&a, &Rect::new(0.0, -20.0, 10.0, 10.0)));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 5.0, 5.0);
        assert!(overlaps(&outer, &inner));
        assert!(overlaps(&inner, &outer));
    }

    #[test]
    fn test_from_center() {
        let r = Rect::from_center(Vec2::new(400.0, 520.0), Vec2::new(50.0, 50.0));
        assert_eq!(r.left(), 350.0);
        assert_eq!(r.right(), 450.0);
        assert_eq!(r.top(), 470.0);
        assert_eq!(r.bottom(), 570.0);
        assert_eq!(r.center(), Vec2::new(400.0, 520.0));
    }
}
