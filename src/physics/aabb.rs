//! Axis-aligned rectangles in screen space.

use bevy::prelude::*;

/// Rectangle in screen coordinates, `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self::new(
            center.x - size.x / 2.0,
            center.y - size.y / 2.0,
            size.x,
            size.y,
        )
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.center_x(), self.center_y())
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn set_top(&mut self, top: f32) {
        self.y = top;
    }

    pub fn set_bottom(&mut self, bottom: f32) {
        self.y = bottom - self.height;
    }

    /// Move so the top-left corner sits at `position`.
    pub fn move_to(&mut self, position: Vec2) {
        self.x = position.x;
        self.y = position.y;
    }

    /// Strict overlap test. Rectangles that only touch along an edge do not
    /// overlap, so a body resting exactly on a platform is not colliding.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Keep the rectangle inside `[min_x, max_x]` horizontally.
    pub fn clamp_x(&mut self, min_x: f32, max_x: f32) {
        self.x = self.x.min(max_x - self.width).max(min_x);
    }

    /// Bounding box of a `size` rectangle rotated by `degrees` about `center`.
    pub fn rotated_bounds(center: Vec2, size: Vec2, degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let width = (size.x * cos).abs() + (size.y * sin).abs();
        let height = (size.x * sin).abs() + (size.y * cos).abs();
        Self::from_center(center, Vec2::new(width, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(10.0, 0.0, 10.0, 10.0);
        let c = Aabb::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        assert!(!a.overlaps(&c));
        assert!(a.overlaps(&Aabb::new(9.5, 9.5, 1.0, 1.0)));
    }

    #[test]
    fn clamp_keeps_rectangle_inside_bounds() {
        let mut rect = Aabb::new(-30.0, 0.0, 50.0, 50.0);
        rect.clamp_x(0.0, 1280.0);
        assert_eq!(rect.x, 0.0);

        rect.x = 1270.0;
        rect.clamp_x(0.0, 1280.0);
        assert_eq!(rect.x, 1230.0);
    }

    #[test]
    fn rotated_bounds_swap_axes_at_quarter_turn() {
        let center = Vec2::new(100.0, 100.0);
        let flat = Aabb::rotated_bounds(center, Vec2::new(195.0, 38.0), 0.0);
        assert!((flat.width - 195.0).abs() < 1e-3);
        assert!((flat.height - 38.0).abs() < 1e-3);

        let upright = Aabb::rotated_bounds(center, Vec2::new(195.0, 38.0), 90.0);
        assert!((upright.width - 38.0).abs() < 1e-3);
        assert!((upright.height - 195.0).abs() < 1e-3);
        assert!((upright.center() - center).length() < 1e-3);
    }
}
