use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use caster_physics::angle::FRAC_3PI_2;

/// Which movement keys are held.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct MoveIntent {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveIntent {
    /// The direction of travel relative to the view, with forward at π/2 and right at 0.
    ///
    /// Opposing keys cancel.  Returns `None` when nothing is left to move along.
    pub fn relative_angle(&self) -> Option<f64> {
        let forward = self.forward && !self.backward;
        let backward = self.backward && !self.forward;
        let left = self.left && !self.right;
        let right = self.right && !self.left;

        let angle = match (forward, backward, left, right) {
            (true, _, true, _) => 3.0 * FRAC_PI_4,
            (true, _, _, true) => FRAC_PI_4,
            (true, _, _, _) => FRAC_PI_2,
            (_, true, true, _) => 5.0 * FRAC_PI_4,
            (_, true, _, true) => 7.0 * FRAC_PI_4,
            (_, true, _, _) => FRAC_3PI_2,
            (_, _, true, _) => PI,
            (_, _, _, true) => 0.0,
            _ => return None,
        };
        Some(angle)
    }
}

/// Everything held down during one tick.
///
/// Each opposing pair is resolved in favour of the first: looking left wins over right, zooming in over out, and
/// shrinking the field of view over growing it.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct TickInput {
    pub movement: MoveIntent,
    pub look_left: bool,
    pub look_right: bool,
    pub zoom_in: bool,
    pub zoom_out: bool,
    pub shrink_fov: bool,
    pub grow_fov: bool,
}

impl TickInput {
    pub fn is_idle(&self) -> bool {
        *self == TickInput::default()
    }
}
