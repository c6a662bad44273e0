//! An axis-aligned bounding box collider.
use crate::*;

/// An axis-aligned box specified by its center and half extents.
///
/// Half extents are never negative: setting a negative one shifts the center by it and stores its magnitude.  Edges
/// are closed, so boxes which only touch still overlap.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct AabbCollider {
    center: Coordinate2D,
    half_width: f64,
    half_height: f64,
}

impl AabbCollider {
    /// Build a collider centered on `(x, y)`.  Negative sizes are normalized, never rejected.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> AabbCollider {
        let mut ret = AabbCollider {
            center: Coordinate2D::new(x, y),
            half_width: 0.0,
            half_height: 0.0,
        };
        ret.set_width(width);
        ret.set_height(height);
        ret
    }

    pub fn get_x(&self) -> f64 {
        self.center.x
    }

    pub fn get_y(&self) -> f64 {
        self.center.y
    }

    pub fn get_center(&self) -> Coordinate2D {
        self.center
    }

    pub fn get_width(&self) -> f64 {
        self.half_width * 2.0
    }

    pub fn get_height(&self) -> f64 {
        self.half_height * 2.0
    }

    pub fn get_half_width(&self) -> f64 {
        self.half_width
    }

    pub fn get_half_height(&self) -> f64 {
        self.half_height
    }

    pub fn get_left(&self) -> f64 {
        self.center.x - self.half_width
    }

    pub fn get_right(&self) -> f64 {
        self.center.x + self.half_width
    }

    pub fn get_top(&self) -> f64 {
        self.center.y + self.half_height
    }

    pub fn get_bottom(&self) -> f64 {
        self.center.y - self.half_height
    }

    pub fn set_x(&mut self, x: f64) {
        self.center.x = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.center.y = y;
    }

    pub fn set_center(&mut self, center: Coordinate2D) {
        self.center = center;
    }

    pub fn set_width(&mut self, width: f64) {
        self.set_half_width(width / 2.0);
    }

    pub fn set_height(&mut self, height: f64) {
        self.set_half_height(height / 2.0);
    }

    pub fn set_half_width(&mut self, half_width: f64) {
        if half_width >= 0.0 {
            self.half_width = half_width;
            return;
        }
        self.center.translate_horizontally(half_width);
        self.half_width = -half_width;
    }

    pub fn set_half_height(&mut self, half_height: f64) {
        if half_height >= 0.0 {
            self.half_height = half_height;
            return;
        }
        self.center.translate_vertically(half_height);
        self.half_height = -half_height;
    }

    pub fn translate_horizontally(&mut self, amount: f64) {
        self.center.translate_horizontally(amount);
    }

    pub fn translate_vertically(&mut self, amount: f64) {
        self.center.translate_vertically(amount);
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.center.translate(dx, dy);
    }

    /// Is the point inside or on the edge of this box?
    pub fn contains_point(&self, point: &Coordinate2D) -> bool {
        point.x >= self.get_left()
            && point.x <= self.get_right()
            && point.y >= self.get_bottom()
            && point.y <= self.get_top()
    }

    /// Test if this box overlaps another, counting shared edges as overlap.
    pub fn overlaps(&self, other: &AabbCollider) -> bool {
        crate::collision_tests::aabb_aabb_test(self, other)
    }

    /// Push the boxes apart along the axis of least penetration.
    ///
    /// If `check_first` is set and the boxes don't overlap, nothing moves and this returns false.  Otherwise the
    /// resolution is applied per `mode` and this returns true.
    pub fn resolve_penetration(
        &mut self,
        other: &mut AabbCollider,
        mode: ResolveMode,
        check_first: bool,
    ) -> bool {
        if check_first && !self.overlaps(other) {
            return false;
        }

        let mtv = crate::resolver::minimum_translation(self, other);
        crate::resolver::apply_translation(self, other, &mtv, mode);
        true
    }
}

impl std::fmt::Display for AabbCollider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{Origin: {}, Width: {}, Height: {}}}",
            self.center,
            self.get_width(),
            self.get_height()
        )
    }
}
