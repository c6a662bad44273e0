//! Casting one ray per screen column across the field of view.
use caster_physics::{AabbCollider, Coordinate2D, Hitscanner};

/// Where a ray stopped.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RayHit {
    pub point: Coordinate2D,

    /// Straight-line distance from the ray's origin.
    pub distance: f64,

    /// Distance along the view axis.  Drawing with this rather than `distance` keeps flat walls flat at the edges of
    /// the view.
    pub projected_distance: f64,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RaySample {
    /// Angle from the center of the view.
    pub offset: f64,

    /// Absolute heading of this ray.
    pub angle: f64,

    pub hit: Option<RayHit>,
}

/// Angles relative to the view's heading at which to sample, spread evenly over `[-fov/2, fov/2]` from left to right
/// of the angle range.
///
/// Both ends are included.  A single sample looks straight ahead.
pub fn sample_offsets(fov: f64, samples: usize) -> impl Iterator<Item = f64> {
    let step = if samples > 1 {
        fov / (samples - 1) as f64
    } else {
        0.0
    };
    let start = if samples > 1 { -fov / 2.0 } else { 0.0 };
    (0..samples).map(move |i| start + i as f64 * step)
}

/// Cast `samples` rays from `hitscanner` across `fov`, centered on its heading.
///
/// The hitscanner's origin, range and range mode are used for every ray; only the heading changes.
pub fn sweep(
    hitscanner: &Hitscanner,
    colliders: &[AabbCollider],
    fov: f64,
    samples: usize,
) -> Vec<RaySample> {
    let heading = hitscanner.get_angle();
    let origin = hitscanner.get_origin();
    let mut ray = *hitscanner;

    sample_offsets(fov, samples)
        .map(|offset| {
            ray.set_angle(heading + offset);
            let hit = ray.cast_many(colliders).map(|point| {
                let distance = origin.euclidean_distance_to(&point);
                RayHit {
                    point,
                    distance,
                    projected_distance: distance * offset.cos(),
                }
            });
            RaySample {
                offset,
                angle: ray.get_angle(),
                hit,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    use approx::assert_relative_eq;
    use caster_tilemap::{merge_colliders, OccupancyGrid};
    use proptest::prelude::*;

    #[test]
    fn offsets() {
        assert_eq!(sample_offsets(FRAC_PI_2, 0).count(), 0);
        assert_eq!(sample_offsets(FRAC_PI_2, 1).collect::<Vec<_>>(), vec![0.0]);

        let offsets: Vec<f64> = sample_offsets(FRAC_PI_2, 3).collect();
        assert_eq!(offsets.len(), 3);
        assert_relative_eq!(offsets[0], -FRAC_PI_4);
        assert_relative_eq!(offsets[1], 0.0);
        assert_relative_eq!(offsets[2], FRAC_PI_4);
    }

    #[test]
    fn flat_wall_has_flat_projection() {
        // A long wall at x = 10, looked at head on from x = 5.
        let wall = [AabbCollider::new(10.5, 0.0, 1.0, 100.0)];
        let ray = Hitscanner::new(5.0, 0.0, 0.0, 50.0, false);
        let samples = sweep(&ray, &wall, FRAC_PI_2, 9);
        assert_eq!(samples.len(), 9);
        for s in samples.iter() {
            let hit = s.hit.unwrap();
            assert_relative_eq!(hit.point.x, 10.0, epsilon = 1e-9);
            assert_relative_eq!(hit.projected_distance, 5.0, epsilon = 1e-9);
            assert!(hit.distance >= hit.projected_distance - 1e-9);
        }
        assert_relative_eq!(samples[0].hit.unwrap().distance, 5.0 * 2.0f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn misses_are_reported() {
        let wall = [AabbCollider::new(10.5, 0.0, 1.0, 1.0)];
        let ray = Hitscanner::new(5.0, 0.0, 0.0, 50.0, false);
        let samples = sweep(&ray, &wall, FRAC_PI_2, 3);
        assert!(samples[0].hit.is_none());
        assert!(samples[1].hit.is_some());
        assert!(samples[2].hit.is_none());
    }

    #[test]
    fn leaves_the_hitscanner_alone() {
        let ray = Hitscanner::new(8.0, 8.0, 1.0, 5.0, false);
        let before = ray;
        let samples = sweep(&ray, &[], 1.0, 4);
        assert_eq!(ray, before);
        assert!(samples.iter().all(|s| s.hit.is_none()));
        assert_relative_eq!(samples[0].angle, 0.5);
        assert_relative_eq!(samples[3].angle, 1.5);
    }

    proptest! {
        // Standing anywhere inside the default arena, every ray with enough range hits a wall.
        #[test]
        fn enclosed_rooms_always_hit(
            x in 1.3..14.7f64,
            y in 1.3..14.7f64,
            heading in 0.0..std::f64::consts::TAU,
            samples in 1..64usize,
        ) {
            let colliders = merge_colliders(&OccupancyGrid::default_arena());
            let ray = Hitscanner::new(x, y, heading, 30.0, false);
            for s in sweep(&ray, &colliders, FRAC_PI_2, samples) {
                let hit = s.hit;
                prop_assert!(hit.is_some(), "{:?}", s);
                if let Some(hit) = hit {
                    prop_assert!(hit.projected_distance > 0.0);
                    prop_assert!(hit.distance < 30.0);
                }
            }
        }
    }
}
