//! Resolution of the penetration between a pair of colliders.
//!
//! Overlap is resolved by a minimum translation vector: of the four ways to push the first box out of the second
//! (left, down, right, up), take the shortest and move along that single axis.  Exact ties go to whichever
//! candidate is checked first, in the order just given.
use crate::*;

/// Which collider(s) move when a penetration is resolved.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ResolveMode {
    /// Move only the collider the resolution was called on.
    MoveSelf,
    /// Move only the other collider, in the opposite direction.
    MoveOther,
    /// Each collider moves half the distance.
    MoveBoth,
}

/// The displacement that moves the first collider out of the second.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct Translation {
    pub(crate) dx: f64,
    pub(crate) dy: f64,
}

/// Compute the translation which separates `this` from `other` if applied to `this`.
///
/// Candidates are compared by magnitude.  For overlapping boxes they are all non-negative; boxes which were never
/// checked for overlap can produce negative ones, which still move `this` by their signed value.
pub(crate) fn minimum_translation(this: &AabbCollider, other: &AabbCollider) -> Translation {
    let push_left = this.get_right() - other.get_left();
    let push_down = this.get_top() - other.get_bottom();
    let push_right = other.get_right() - this.get_left();
    let push_up = other.get_top() - this.get_bottom();

    let mut smallest = push_left.abs();
    let mut ret = Translation {
        dx: -push_left,
        dy: 0.0,
    };

    if push_down.abs() < smallest {
        smallest = push_down.abs();
        ret = Translation {
            dx: 0.0,
            dy: -push_down,
        };
    }
    if push_right.abs() < smallest {
        smallest = push_right.abs();
        ret = Translation {
            dx: push_right,
            dy: 0.0,
        };
    }
    if push_up.abs() < smallest {
        ret = Translation {
            dx: 0.0,
            dy: push_up,
        };
    }

    ret
}

pub(crate) fn apply_translation(
    this: &mut AabbCollider,
    other: &mut AabbCollider,
    translation: &Translation,
    mode: ResolveMode,
) {
    let Translation { dx, dy } = *translation;
    match mode {
        ResolveMode::MoveSelf => this.translate(dx, dy),
        ResolveMode::MoveOther => other.translate(-dx, -dy),
        ResolveMode::MoveBoth => {
            this.translate(dx / 2.0, dy / 2.0);
            other.translate(-dx / 2.0, -dy / 2.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn move_self_pushes_left() {
        let mut a = AabbCollider::new(0.0, 0.0, 2.0, 2.0);
        let mut b = AabbCollider::new(1.0, 0.0, 2.0, 2.0);
        assert!(a.resolve_penetration(&mut b, ResolveMode::MoveSelf, true));
        assert_eq!(a.get_center(), Coordinate2D::new(-1.0, 0.0));
        assert_eq!(b.get_center(), Coordinate2D::new(1.0, 0.0));
    }

    #[test]
    fn move_other_and_both() {
        let mut a = AabbCollider::new(0.0, 0.0, 2.0, 2.0);
        let mut b = AabbCollider::new(0.0, 1.5, 2.0, 2.0);
        assert!(a.resolve_penetration(&mut b, ResolveMode::MoveOther, true));
        // b sits above a with 0.5 of overlap; pushing a down is shortest, so b goes up.
        assert_eq!(a.get_center(), Coordinate2D::new(0.0, 0.0));
        assert_eq!(b.get_center(), Coordinate2D::new(0.0, 2.0));

        let mut c = AabbCollider::new(0.0, 0.0, 2.0, 2.0);
        let mut d = AabbCollider::new(-1.5, 0.0, 2.0, 2.0);
        assert!(c.resolve_penetration(&mut d, ResolveMode::MoveBoth, true));
        assert_eq!(c.get_center(), Coordinate2D::new(0.25, 0.0));
        assert_eq!(d.get_center(), Coordinate2D::new(-1.75, 0.0));
    }

    #[test]
    fn push_up_when_below_is_shortest() {
        let mut a = AabbCollider::new(0.0, 0.0, 4.0, 2.0);
        let mut b = AabbCollider::new(0.0, -1.5, 4.0, 2.0);
        assert!(a.resolve_penetration(&mut b, ResolveMode::MoveSelf, true));
        assert_relative_eq!(a.get_y(), 0.5);
        assert_relative_eq!(a.get_x(), 0.0);
    }

    #[test]
    fn ties_favor_push_left() {
        // Identical boxes: every candidate is 2.0.
        let a = AabbCollider::new(0.0, 0.0, 2.0, 2.0);
        let b = a;
        assert_eq!(
            minimum_translation(&a, &b),
            Translation { dx: -2.0, dy: 0.0 }
        );

        // push_down and push_right tie; push_down is checked first.
        let c = AabbCollider::new(0.0, 0.0, 2.0, 2.0);
        let d = AabbCollider::new(-1.0, 1.0, 2.0, 2.0);
        assert_eq!(
            minimum_translation(&c, &d),
            Translation { dx: 0.0, dy: -1.0 }
        );
    }

    #[test]
    fn check_first_skips_separated_boxes() {
        let mut a = AabbCollider::new(0.0, 0.0, 2.0, 2.0);
        let mut b = AabbCollider::new(5.0, 0.0, 2.0, 2.0);
        assert!(!a.resolve_penetration(&mut b, ResolveMode::MoveBoth, true));
        assert_eq!(a.get_center(), Coordinate2D::new(0.0, 0.0));
        assert_eq!(b.get_center(), Coordinate2D::new(5.0, 0.0));

        // Without the check, resolution always runs.  The candidates are -3 (left), 2 (down), 7 (right) and 2 (up):
        // by magnitude, down is shortest and wins the tie with up.
        assert!(a.resolve_penetration(&mut b, ResolveMode::MoveSelf, false));
        assert_eq!(a.get_center(), Coordinate2D::new(0.0, -2.0));
        assert_eq!(b.get_center(), Coordinate2D::new(5.0, 0.0));
    }

    fn arb_box() -> impl Strategy<Value = AabbCollider> {
        (
            -100.0..100.0f64,
            -100.0..100.0f64,
            0.1..50.0f64,
            0.1..50.0f64,
        )
            .prop_map(|(x, y, w, h)| AabbCollider::new(x, y, w, h))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10000))]

        #[test]
        fn move_self_separates(mut a in arb_box(), mut b in arb_box()) {
            let b_before = b;
            if a.resolve_penetration(&mut b, ResolveMode::MoveSelf, true) {
                prop_assert_eq!(b, b_before);
                // After resolution the boxes may only share an edge.
                let x_gap = (a.get_right().min(b.get_right()) - a.get_left().max(b.get_left())).max(0.0);
                let y_gap = (a.get_top().min(b.get_top()) - a.get_bottom().max(b.get_bottom())).max(0.0);
                prop_assert!(x_gap.min(y_gap) < 1e-9, "{:?} {:?}", a, b);
            }
        }

        #[test]
        fn move_both_conserves_separation(mut a in arb_box(), mut b in arb_box()) {
            if !a.overlaps(&b) {
                return Ok(());
            }
            let mtv = minimum_translation(&a, &b);
            let depth = mtv.dx.abs() + mtv.dy.abs();
            let (a0, b0) = (a.get_center(), b.get_center());

            prop_assert!(a.resolve_penetration(&mut b, ResolveMode::MoveBoth, true));
            let moved = a.get_center().taxicab_distance_to(&a0) + b.get_center().taxicab_distance_to(&b0);
            prop_assert!((moved - depth).abs() < 1e-9);
        }

        #[test]
        fn modes_agree_on_relative_offset(a in arb_box(), b in arb_box()) {
            if !a.overlaps(&b) {
                return Ok(());
            }
            let offset = |x: &AabbCollider, y: &AabbCollider| y.get_center() - x.get_center();

            let mut results = vec![];
            for mode in [ResolveMode::MoveSelf, ResolveMode::MoveOther, ResolveMode::MoveBoth] {
                let (mut a1, mut b1) = (a, b);
                a1.resolve_penetration(&mut b1, mode, true);
                results.push(offset(&a1, &b1));
            }
            for r in &results[1..] {
                prop_assert!(r.euclidean_distance_to(&results[0]) < 1e-9);
            }
        }
    }
}
