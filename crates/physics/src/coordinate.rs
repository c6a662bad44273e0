//! A 2-dimensional point.
use derive_more::{
    Add, AddAssign, Display, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

/// A point in the plane.
///
/// Scalar `*`, `/` and `%` apply per component; `%` has the semantics of `fmod`.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Display,
    Add,
    Sub,
    Neg,
    Mul,
    Div,
    Rem,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    RemAssign,
)]
#[display(fmt = "({}, {})", x, y)]
pub struct Coordinate2D {
    pub x: f64,
    pub y: f64,
}

impl Coordinate2D {
    pub const ORIGIN: Coordinate2D = Coordinate2D { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Coordinate2D { x, y }
    }

    pub fn translate_horizontally(&mut self, amount: f64) {
        self.x += amount;
    }

    pub fn translate_vertically(&mut self, amount: f64) {
        self.y += amount;
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.translate_horizontally(dx);
        self.translate_vertically(dy);
    }

    pub fn swap_xy(&mut self) {
        std::mem::swap(&mut self.x, &mut self.y);
    }

    pub fn reflect_over_x_axis(&mut self) {
        self.y = -self.y;
    }

    pub fn reflect_over_y_axis(&mut self) {
        self.x = -self.x;
    }

    /// Reflect over the line `y = y_intercept`.
    pub fn reflect_over_horizontal_line(&mut self, y_intercept: f64) {
        self.y = 2.0 * y_intercept - self.y;
    }

    /// Reflect over the line `x = x_intercept`.
    pub fn reflect_over_vertical_line(&mut self, x_intercept: f64) {
        self.x = 2.0 * x_intercept - self.x;
    }

    /// Reflect over `y = slope * x + y_intercept`.
    ///
    /// A zero slope reflects over the horizontal line through the intercept. A NaN slope has no intercept to build a
    /// vertical line from, so the point is left alone; use [Self::reflect_over_line_through] for vertical lines.
    pub fn reflect_over_line(&mut self, slope: f64, y_intercept: f64) {
        if slope == 0.0 {
            return self.reflect_over_horizontal_line(y_intercept);
        }
        if slope.is_nan() {
            return;
        }

        // Foot of the perpendicular from this point to the line, then step the same distance past it.
        let foot_x = (self.x + slope * (self.y - y_intercept)) / (1.0 + slope * slope);
        let foot_y = slope * foot_x + y_intercept;
        self.x = 2.0 * foot_x - self.x;
        self.y = 2.0 * foot_y - self.y;
    }

    /// Reflect over the line through `point` with the given slope. A NaN slope means the vertical line through `point`.
    pub fn reflect_over_line_point_slope(&mut self, point: &Coordinate2D, slope: f64) {
        if slope.is_nan() {
            return self.reflect_over_vertical_line(point.x);
        }
        self.reflect_over_line(slope, point.y - slope * point.x);
    }

    /// Reflect over the line passing through both points.
    pub fn reflect_over_line_through(&mut self, p1: &Coordinate2D, p2: &Coordinate2D) {
        let run = p2.x - p1.x;
        if run == 0.0 {
            return self.reflect_over_vertical_line(p1.x);
        }
        self.reflect_over_line_point_slope(p1, (p2.y - p1.y) / run);
    }

    pub fn stretch_horizontally(&mut self, scalar: f64) {
        self.x *= scalar;
    }

    pub fn stretch_vertically(&mut self, scalar: f64) {
        self.y *= scalar;
    }

    /// Rotate counterclockwise (in a y-up frame) by `angle` radians about `pivot`.
    pub fn rotate_about_pivot(&mut self, pivot: &Coordinate2D, angle: f64) {
        let (sin, cos) = angle.sin_cos();
        let dx = self.x - pivot.x;
        let dy = self.y - pivot.y;
        self.x = dx * cos - dy * sin + pivot.x;
        self.y = dx * sin + dy * cos + pivot.y;
    }

    pub fn rotate_about_origin(&mut self, angle: f64) {
        self.rotate_about_pivot(&Coordinate2D::ORIGIN, angle);
    }

    /// Rotate every point in the slice about the same pivot.
    pub fn rotate_points_about_pivot(points: &mut [Coordinate2D], pivot: &Coordinate2D, angle: f64) {
        for p in points.iter_mut() {
            p.rotate_about_pivot(pivot, angle);
        }
    }

    pub fn euclidean_distance_to(&self, other: &Coordinate2D) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Distance from the origin.
    pub fn euclidean_distance(&self) -> f64 {
        self.euclidean_distance_to(&Coordinate2D::ORIGIN)
    }

    pub fn taxicab_distance_to(&self, other: &Coordinate2D) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    pub fn taxicab_distance(&self) -> f64 {
        self.taxicab_distance_to(&Coordinate2D::ORIGIN)
    }

    pub fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl From<(f64, f64)> for Coordinate2D {
    fn from((x, y): (f64, f64)) -> Self {
        Coordinate2D::new(x, y)
    }
}

/// How a [CoordinateComparator] relates two points.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CoordinateMetric {
    /// Equality compares both components; ordering falls back to [CoordinateMetric::Euclidean].
    #[default]
    Components,
    /// Euclidean distance from the comparator's reference point.
    Euclidean,
    /// Taxicab distance from the comparator's reference point.
    Taxicab,
    XComponent,
    YComponent,
}

/// Compares points under a metric, measuring distances from a reference point.
///
/// Comparators are plain values: each simulation holds its own.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct CoordinateComparator {
    pub metric: CoordinateMetric,
    pub reference: Coordinate2D,
}

impl CoordinateComparator {
    pub fn new(metric: CoordinateMetric, reference: Coordinate2D) -> Self {
        CoordinateComparator { metric, reference }
    }

    pub fn is_equal(&self, a: &Coordinate2D, b: &Coordinate2D) -> bool {
        use CoordinateMetric::*;

        match self.metric {
            Components => a.x == b.x && a.y == b.y,
            Euclidean => {
                a.euclidean_distance_to(&self.reference) == b.euclidean_distance_to(&self.reference)
            }
            Taxicab => {
                a.taxicab_distance_to(&self.reference) == b.taxicab_distance_to(&self.reference)
            }
            XComponent => a.x == b.x,
            YComponent => a.y == b.y,
        }
    }

    pub fn is_less(&self, a: &Coordinate2D, b: &Coordinate2D) -> bool {
        use CoordinateMetric::*;

        match self.metric {
            Components | Euclidean => {
                a.euclidean_distance_to(&self.reference) < b.euclidean_distance_to(&self.reference)
            }
            Taxicab => {
                a.taxicab_distance_to(&self.reference) < b.taxicab_distance_to(&self.reference)
            }
            XComponent => a.x < b.x,
            YComponent => a.y < b.y,
        }
    }

    pub fn is_greater(&self, a: &Coordinate2D, b: &Coordinate2D) -> bool {
        self.is_less(b, a)
    }

    pub fn is_less_or_equal(&self, a: &Coordinate2D, b: &Coordinate2D) -> bool {
        !self.is_greater(a, b)
    }

    pub fn is_greater_or_equal(&self, a: &Coordinate2D, b: &Coordinate2D) -> bool {
        !self.is_less(a, b)
    }

    /// Distance of `point` from the reference point, Euclidean unless the metric is taxicab.
    pub fn distance(&self, point: &Coordinate2D) -> f64 {
        match self.metric {
            CoordinateMetric::Taxicab => point.taxicab_distance_to(&self.reference),
            _ => point.euclidean_distance_to(&self.reference),
        }
    }

    pub fn rotate_about_reference(&self, point: &mut Coordinate2D, angle: f64) {
        point.rotate_about_pivot(&self.reference, angle);
    }
}
