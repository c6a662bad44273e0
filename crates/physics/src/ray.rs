use crate::*;

/// A ray with an origin, a heading and a range.
///
/// The direction's angle is the heading and its magnitude the maximum range.  With infinite range set, the magnitude
/// is ignored when deciding whether a hit is reachable.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hitscanner {
    origin: Coordinate2D,
    direction: Vector2D,
    infinite_range: bool,
}

impl Default for Hitscanner {
    fn default() -> Self {
        Hitscanner {
            origin: Coordinate2D::ORIGIN,
            direction: Vector2D::default(),
            infinite_range: false,
        }
    }
}

impl Hitscanner {
    pub fn new(x: f64, y: f64, angle: f64, range: f64, infinite_range: bool) -> Hitscanner {
        let mut ret = Hitscanner {
            origin: Coordinate2D::new(x, y),
            infinite_range,
            ..Default::default()
        };
        ret.set_angle(angle);
        ret.set_range(range);
        ret
    }

    pub fn get_x(&self) -> f64 {
        self.origin.x
    }

    pub fn get_y(&self) -> f64 {
        self.origin.y
    }

    pub fn get_origin(&self) -> Coordinate2D {
        self.origin
    }

    /// Heading in radians, on `[0, 2π)`.
    pub fn get_angle(&self) -> f64 {
        self.direction.angle()
    }

    pub fn get_range(&self) -> f64 {
        self.direction.magnitude()
    }

    pub fn get_direction(&self) -> Vector2D {
        self.direction
    }

    pub fn has_infinite_range(&self) -> bool {
        self.infinite_range
    }

    pub fn set_x(&mut self, x: f64) {
        self.origin.x = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.origin.y = y;
    }

    pub fn set_origin(&mut self, origin: Coordinate2D) {
        self.origin = origin;
    }

    pub fn set_angle(&mut self, angle: f64) {
        self.direction.set_angle(angle);
    }

    pub fn adjust_angle(&mut self, amount: f64) {
        self.direction.adjust_angle(amount);
    }

    /// Set the range.  Only the magnitude of `range` is kept.
    pub fn set_range(&mut self, range: f64) {
        self.direction.set_magnitude(range.abs());
    }

    /// Take the heading and range from a vector.
    pub fn set_direction(&mut self, direction: &Vector2D) {
        self.set_angle(direction.angle());
        self.set_range(direction.magnitude());
    }

    pub fn set_infinite_range(&mut self, infinite_range: bool) {
        self.infinite_range = infinite_range;
    }

    pub fn toggle_infinite_range(&mut self) {
        self.infinite_range = !self.infinite_range;
    }

    /// The first point where this ray meets `collider`, if it does so within range.
    pub fn cast_single(&self, collider: &AabbCollider) -> Option<Coordinate2D> {
        crate::raycasting::ray_aabb_test(self, collider)
    }

    /// The hit nearest the origin among all `colliders`.  Equally near hits go to the earliest collider.
    pub fn cast_many(&self, colliders: &[AabbCollider]) -> Option<Coordinate2D> {
        crate::raycasting::nearest_hit(self, colliders)
    }
}
