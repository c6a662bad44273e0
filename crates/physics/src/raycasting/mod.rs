use crate::*;

pub(crate) mod ray_aabb;

pub(crate) use ray_aabb::*;

/// Cast against every collider and keep the hit closest to the ray's origin.
///
/// This is a linear scan.  Ties go to the earliest collider.
pub(crate) fn nearest_hit<'a>(
    ray: &Hitscanner,
    colliders: impl IntoIterator<Item = &'a AabbCollider>,
) -> Option<Coordinate2D> {
    let origin = ray.get_origin();
    let mut best: Option<(f64, Coordinate2D)> = None;

    for hit in colliders.into_iter().filter_map(|c| ray_aabb_test(ray, c)) {
        let distance = hit.euclidean_distance_to(&origin);
        match best {
            Some((best_distance, _)) if distance >= best_distance => {}
            _ => best = Some((distance, hit)),
        }
    }

    best.map(|(_, hit)| hit)
}
