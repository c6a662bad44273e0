use std::f64::consts::{FRAC_PI_2, PI};

use crate::angle::FRAC_3PI_2;
use crate::*;

/// Find where a hitscanner first meets a collider's boundary.
///
/// Colliders are solid: an origin inside or on the edge of the box hits immediately at the origin, whatever the
/// range.  Otherwise the ray is culled by the half-plane its heading points into, then intersected analytically
/// against the near vertical edge and, failing that, the near horizontal edge.
pub(crate) fn ray_aabb_test(ray: &Hitscanner, aabb: &AabbCollider) -> Option<Coordinate2D> {
    let origin = ray.get_origin();
    let (x, y) = (origin.x, origin.y);

    if aabb.contains_point(&origin) {
        return Some(origin);
    }

    let direction = ray.get_direction();
    if direction.magnitude() == 0.0 && !ray.has_infinite_range() {
        return None;
    }

    let angle = direction.angle();
    let (left, right, top, bottom) = (aabb.get_left(), aabb.get_right(), aabb.get_top(), aabb.get_bottom());

    // Cull rays heading away from the box.  The first four checks miss a ray with a heading of exactly 0 starting
    // below the box, hence the fifth.
    let heading_up = angle <= PI;
    let heading_down = angle >= PI;
    let heading_right = angle <= FRAC_PI_2 || angle >= FRAC_3PI_2;
    let heading_left = (FRAC_PI_2..=FRAC_3PI_2).contains(&angle);
    if (heading_up && y > top)
        || (heading_down && y < bottom)
        || (heading_right && x > right)
        || (heading_left && x < left)
        || (angle == 0.0 && y < bottom)
    {
        return None;
    }

    // A zero-length ray with infinite range still has a heading, but no components to read it from.
    let (dx, dy) = if direction.magnitude() == 0.0 {
        let (sin, cos) = angle.sin_cos();
        (cos, sin)
    } else {
        (direction.x(), direction.y())
    };

    let strictly_up = angle < PI;
    let strictly_right = angle < FRAC_PI_2 || angle > FRAC_3PI_2;

    // Vertical and horizontal rays have no usable slope; they always land on the facing edge at a fixed coordinate.
    if dx == 0.0 {
        let edge_y = if strictly_up { bottom } else { top };
        return range_check(ray, Coordinate2D::new(x, edge_y));
    }
    if dy == 0.0 {
        let edge_x = if strictly_right { left } else { right };
        return range_check(ray, Coordinate2D::new(edge_x, y));
    }

    let slope = dy / dx;
    let x_difference = if strictly_right { left - x } else { right - x };
    let y_difference = if strictly_up { bottom - y } else { top - y };

    let guess_y = y + slope * x_difference;
    if guess_y >= bottom && guess_y <= top {
        return range_check(ray, Coordinate2D::new(x + x_difference, guess_y));
    }

    let guess_x = x + y_difference / slope;
    if guess_x >= left && guess_x <= right {
        return range_check(ray, Coordinate2D::new(guess_x, y + y_difference));
    }

    // Grazed past a corner.
    None
}

fn range_check(ray: &Hitscanner, point: Coordinate2D) -> Option<Coordinate2D> {
    if ray.has_infinite_range()
        || ray.get_origin().euclidean_distance_to(&point) <= ray.get_direction().magnitude().abs()
    {
        Some(point)
    } else {
        None
    }
}
