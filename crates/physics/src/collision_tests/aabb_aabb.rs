//! The AABB-AABB overlap test.
use crate::*;

/// Closed-interval separating axis test: boxes are only apart if there is a strict gap on some axis.
pub(crate) fn aabb_aabb_test(box1: &AabbCollider, box2: &AabbCollider) -> bool {
    !(box1.get_right() < box2.get_left()
        || box1.get_left() > box2.get_right()
        || box1.get_top() < box2.get_bottom()
        || box1.get_bottom() > box2.get_top())
}
