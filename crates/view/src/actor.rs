use std::f64::consts::PI;

use caster_physics::angle::normalize_angle;
use caster_physics::{AabbCollider, Coordinate2D, ResolveMode};

use crate::ViewConfig;

/// Smallest size a collider may shrink to.
const MIN_EXTENT: f64 = f64::MIN_POSITIVE;

/// The largest field of view below π.
fn max_fov() -> f64 {
    f64::from_bits(PI.to_bits() - 1)
}

/// Someone standing in the world and looking at it.
///
/// The actor occupies a square collider.  `rotation` is the heading of the view in radians on `[0, 2π)`.  All setters
/// clamp: speeds and view distance are never negative, and the field of view stays strictly between 0 and π.
#[derive(Clone, Debug, PartialEq)]
pub struct Actor {
    collider: AabbCollider,
    rotation: f64,
    move_speed: f64,
    fov: f64,
    view_distance: f64,
    look_speed: f64,
    zoom_speed: f64,
}

impl Default for Actor {
    fn default() -> Self {
        Actor::from_config(Coordinate2D::ORIGIN, 0.0, &ViewConfig::default())
    }
}

impl Actor {
    pub fn new(x: f64, y: f64, rotation: f64) -> Actor {
        let mut ret = Actor::default();
        ret.set_position(Coordinate2D::new(x, y));
        ret.set_rotation(rotation);
        ret
    }

    pub fn from_config(position: Coordinate2D, rotation: f64, config: &ViewConfig) -> Actor {
        let mut ret = Actor {
            collider: AabbCollider::new(position.x, position.y, 0.0, 0.0),
            rotation: 0.0,
            move_speed: 0.0,
            fov: 0.0,
            view_distance: 0.0,
            look_speed: 0.0,
            zoom_speed: 0.0,
        };
        ret.set_rotation(rotation);
        ret.apply_config(config);
        ret
    }

    /// Take speeds, view and size from `config`, clamping as the individual setters do.
    pub fn apply_config(&mut self, config: &ViewConfig) {
        self.set_diameter(config.actor_size);
        self.set_move_speed(config.move_speed);
        self.set_fov(config.fov);
        self.set_view_distance(config.view_distance);
        self.set_look_speed(config.look_speed);
        self.set_zoom_speed(config.zoom_speed);
    }

    pub fn x(&self) -> f64 {
        self.collider.get_x()
    }

    pub fn y(&self) -> f64 {
        self.collider.get_y()
    }

    pub fn position(&self) -> Coordinate2D {
        self.collider.get_center()
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn move_speed(&self) -> f64 {
        self.move_speed
    }

    pub fn fov(&self) -> f64 {
        self.fov
    }

    pub fn view_distance(&self) -> f64 {
        self.view_distance
    }

    pub fn look_speed(&self) -> f64 {
        self.look_speed
    }

    pub fn zoom_speed(&self) -> f64 {
        self.zoom_speed
    }

    pub fn radius(&self) -> f64 {
        self.collider.get_half_width()
    }

    pub fn diameter(&self) -> f64 {
        self.collider.get_width()
    }

    pub fn collider(&self) -> &AabbCollider {
        &self.collider
    }

    pub fn set_x(&mut self, x: f64) {
        self.collider.set_x(x);
    }

    pub fn set_y(&mut self, y: f64) {
        self.collider.set_y(y);
    }

    pub fn set_position(&mut self, position: Coordinate2D) {
        self.collider.set_center(position);
    }

    pub fn set_rotation(&mut self, rotation: f64) {
        self.rotation = normalize_angle(rotation);
    }

    pub fn set_move_speed(&mut self, move_speed: f64) {
        self.move_speed = move_speed.max(0.0);
    }

    pub fn set_fov(&mut self, fov: f64) {
        self.fov = if fov <= 0.0 {
            MIN_EXTENT
        } else if fov >= PI {
            max_fov()
        } else {
            fov
        };
    }

    pub fn set_view_distance(&mut self, view_distance: f64) {
        self.view_distance = view_distance.max(0.0);
    }

    pub fn set_look_speed(&mut self, look_speed: f64) {
        self.look_speed = look_speed.max(0.0);
    }

    pub fn set_zoom_speed(&mut self, zoom_speed: f64) {
        self.zoom_speed = zoom_speed.max(0.0);
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.set_diameter(radius * 2.0);
    }

    pub fn set_diameter(&mut self, diameter: f64) {
        let diameter = if diameter <= 0.0 { MIN_EXTENT } else { diameter };
        self.collider.set_width(diameter);
        self.collider.set_height(diameter);
    }

    pub fn move_by(&mut self, dx: f64, dy: f64) {
        self.collider.translate(dx, dy);
    }

    /// Turn clockwise, which decreases the rotation.
    pub fn look_cw(&mut self, amount: f64) {
        self.set_rotation(self.rotation - amount);
    }

    pub fn look_ccw(&mut self, amount: f64) {
        self.set_rotation(self.rotation + amount);
    }

    pub fn overlaps(&self, other: &AabbCollider) -> bool {
        self.collider.overlaps(other)
    }

    pub fn resolve_penetration(
        &mut self,
        other: &mut AabbCollider,
        mode: ResolveMode,
        check_first: bool,
    ) -> bool {
        self.collider.resolve_penetration(other, mode, check_first)
    }
}
