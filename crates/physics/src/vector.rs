//! A 2-dimensional vector kept in both cartesian and polar form.
use std::f64::consts::PI;

use crate::angle::normalize_angle;

/// Whether a [Vector2D] recomputes its other representation when one is set.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub enum UpdateMode {
    #[default]
    Immediate,
    /// Setters only touch the representation they set.  Call [Vector2D::resume_updates] then
    /// [Vector2D::sync_polar] or [Vector2D::sync_cartesian] to bring the other one back in line.
    Suppressed,
}

/// A direction and magnitude.
///
/// After any setter returns, `magnitude == hypot(x, y)` and `angle == atan2(y, x)` normalized onto `[0, 2π)`, unless
/// updates are suppressed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vector2D {
    x: f64,
    y: f64,
    magnitude: f64,
    /// Radians, `[0, 2π)`.
    angle: f64,
    mode: UpdateMode,
}

impl Default for Vector2D {
    fn default() -> Self {
        Vector2D::new(1.0, 0.0)
    }
}

impl Vector2D {
    pub fn new(x: f64, y: f64) -> Vector2D {
        let mut v = Vector2D {
            x,
            y,
            magnitude: 0.0,
            angle: 0.0,
            mode: UpdateMode::Immediate,
        };
        v.sync_polar();
        v
    }

    /// Build a vector from polar form.  A negative magnitude points the other way.
    pub fn from_polar(magnitude: f64, angle: f64) -> Vector2D {
        let mut v = Vector2D {
            x: 0.0,
            y: 0.0,
            magnitude: 0.0,
            angle: normalize_angle(angle),
            mode: UpdateMode::Immediate,
        };
        v.set_magnitude(magnitude);
        v
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Radians, on `[0, 2π)`.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn angle_degrees(&self) -> f64 {
        self.angle.to_degrees()
    }

    pub fn update_mode(&self) -> UpdateMode {
        self.mode
    }

    pub fn suppress_updates(&mut self) {
        self.mode = UpdateMode::Suppressed;
    }

    pub fn resume_updates(&mut self) {
        self.mode = UpdateMode::Immediate;
    }

    /// Recompute magnitude and angle from the components.
    pub fn sync_polar(&mut self) {
        if self.mode == UpdateMode::Suppressed {
            return;
        }
        self.magnitude = self.x.hypot(self.y);
        self.angle = normalize_angle(self.y.atan2(self.x));
    }

    /// Recompute the components from magnitude and angle.
    pub fn sync_cartesian(&mut self) {
        if self.mode == UpdateMode::Suppressed {
            return;
        }
        let (sin, cos) = self.angle.sin_cos();
        self.x = self.magnitude * cos;
        self.y = self.magnitude * sin;
    }

    pub fn set_x(&mut self, x: f64) {
        self.x = x;
        self.sync_polar();
    }

    pub fn set_y(&mut self, y: f64) {
        self.y = y;
        self.sync_polar();
    }

    pub fn set_components(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
        self.sync_polar();
    }

    pub fn adjust_x(&mut self, amount: f64) {
        self.set_x(self.x + amount);
    }

    pub fn adjust_y(&mut self, amount: f64) {
        self.set_y(self.y + amount);
    }

    /// Set the length.  A negative length is stored as its magnitude with the heading turned by π.
    pub fn set_magnitude(&mut self, magnitude: f64) {
        if magnitude < 0.0 {
            self.magnitude = -magnitude;
            self.angle = normalize_angle(self.angle + PI);
        } else {
            self.magnitude = magnitude;
        }
        self.sync_cartesian();
    }

    pub fn set_angle(&mut self, angle: f64) {
        self.angle = normalize_angle(angle);
        self.sync_cartesian();
    }

    pub fn adjust_magnitude(&mut self, amount: f64) {
        self.set_magnitude(self.magnitude + amount);
    }

    pub fn adjust_angle(&mut self, amount: f64) {
        self.set_angle(self.angle + amount);
    }

    pub fn swap_components(&mut self) {
        std::mem::swap(&mut self.x, &mut self.y);
        self.sync_polar();
    }

    pub fn invert_x(&mut self) {
        self.x = -self.x;
        self.sync_polar();
    }

    pub fn invert_y(&mut self) {
        self.y = -self.y;
        self.sync_polar();
    }

    /// Point the other way.  The magnitude is kept; only the heading turns by π.
    pub fn rotate_180(&mut self) {
        self.x = -self.x;
        self.y = -self.y;
        // Not through set_angle: the components are already right.
        self.angle = normalize_angle(self.angle + PI);
    }

    /// A vector of magnitude 1 with the same heading.
    #[must_use = "This function doesn't modify the vector in place"]
    pub fn to_unit(&self) -> Vector2D {
        Vector2D::from_polar(1.0, self.angle)
    }

    pub fn dot(&self, other: &Vector2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// The z component of the 3d cross product.
    pub fn cross(&self, other: &Vector2D) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Render as `(magnitude, angle)`.
    pub fn to_polar_string(&self) -> String {
        format!("({}, {})", self.magnitude, self.angle)
    }
}

impl std::fmt::Display for Vector2D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl std::ops::Add for Vector2D {
    type Output = Vector2D;

    fn add(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::AddAssign for Vector2D {
    fn add_assign(&mut self, rhs: Self) {
        self.set_components(self.x + rhs.x, self.y + rhs.y);
    }
}

impl std::ops::Sub for Vector2D {
    type Output = Vector2D;

    fn sub(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::SubAssign for Vector2D {
    fn sub_assign(&mut self, rhs: Self) {
        self.set_components(self.x - rhs.x, self.y - rhs.y);
    }
}

impl std::ops::Neg for Vector2D {
    type Output = Vector2D;

    fn neg(self) -> Vector2D {
        Vector2D::new(-self.x, -self.y)
    }
}

impl std::ops::Mul<f64> for Vector2D {
    type Output = Vector2D;

    fn mul(self, rhs: f64) -> Vector2D {
        Vector2D::new(self.x * rhs, self.y * rhs)
    }
}

impl std::ops::MulAssign<f64> for Vector2D {
    fn mul_assign(&mut self, rhs: f64) {
        self.set_components(self.x * rhs, self.y * rhs);
    }
}

impl std::ops::Div<f64> for Vector2D {
    type Output = Vector2D;

    fn div(self, rhs: f64) -> Vector2D {
        Vector2D::new(self.x / rhs, self.y / rhs)
    }
}

impl std::ops::DivAssign<f64> for Vector2D {
    fn div_assign(&mut self, rhs: f64) {
        self.set_components(self.x / rhs, self.y / rhs);
    }
}

impl std::ops::Rem<f64> for Vector2D {
    type Output = Vector2D;

    fn rem(self, rhs: f64) -> Vector2D {
        Vector2D::new(self.x % rhs, self.y % rhs)
    }
}

impl std::ops::RemAssign<f64> for Vector2D {
    fn rem_assign(&mut self, rhs: f64) {
        self.set_components(self.x % rhs, self.y % rhs);
    }
}

/// How a [VectorComparator] relates two vectors.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub enum VectorMetric {
    /// Equality compares both components; ordering falls back to [VectorMetric::Magnitude].
    #[default]
    Components,
    Magnitude,
    Angle,
    XComponent,
    YComponent,
}

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct VectorComparator {
    pub metric: VectorMetric,
}

impl VectorComparator {
    pub fn new(metric: VectorMetric) -> Self {
        VectorComparator { metric }
    }

    pub fn is_equal(&self, a: &Vector2D, b: &Vector2D) -> bool {
        use VectorMetric::*;

        match self.metric {
            Components => a.x == b.x && a.y == b.y,
            Magnitude => a.magnitude == b.magnitude,
            Angle => a.angle == b.angle,
            XComponent => a.x == b.x,
            YComponent => a.y == b.y,
        }
    }

    pub fn is_less(&self, a: &Vector2D, b: &Vector2D) -> bool {
        use VectorMetric::*;

        match self.metric {
            Components | Magnitude => a.magnitude < b.magnitude,
            Angle => a.angle < b.angle,
            XComponent => a.x < b.x,
            YComponent => a.y < b.y,
        }
    }

    pub fn is_greater(&self, a: &Vector2D, b: &Vector2D) -> bool {
        self.is_less(b, a)
    }

    pub fn is_less_or_equal(&self, a: &Vector2D, b: &Vector2D) -> bool {
        !self.is_greater(a, b)
    }

    pub fn is_greater_or_equal(&self, a: &Vector2D, b: &Vector2D) -> bool {
        !self.is_less(a, b)
    }
}
