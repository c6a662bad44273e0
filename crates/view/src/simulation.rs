use std::f64::consts::FRAC_PI_2;

use caster_physics::{AabbCollider, Hitscanner, ResolveMode};
use caster_tilemap::{merge_colliders, OccupancyGrid};
use log::*;

use crate::*;

/// One rendered view.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub samples: Vec<RaySample>,
    /// One per sample, left to right.
    pub columns: Vec<Column>,
    pub surface_height: u32,
}

/// An actor in a world of colliders.
///
/// Each step is split in two: [Simulation::tick] moves the actor and pushes it out of walls, then [Simulation::frame]
/// reads the settled state and draws it.  The hitscanner follows the actor's position, heading and view distance, and
/// is refreshed whenever the actor changes.
#[derive(Clone, Debug)]
pub struct Simulation {
    config: ViewConfig,
    actor: Actor,
    hitscanner: Hitscanner,
    colliders: Vec<AabbCollider>,
}

impl Simulation {
    /// Build the colliders for `grid` and put an actor in the middle of it, facing along positive x.
    pub fn new(grid: &OccupancyGrid, config: ViewConfig) -> Simulation {
        let actor = Actor::from_config(grid.spawn_point(), 0.0, &config);
        Simulation::with_colliders(merge_colliders(grid), actor, config)
    }

    pub fn with_colliders(
        colliders: Vec<AabbCollider>,
        actor: Actor,
        config: ViewConfig,
    ) -> Simulation {
        let mut ret = Simulation {
            config,
            actor,
            hitscanner: Hitscanner::default(),
            colliders,
        };
        ret.sync_hitscanner();
        ret
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn hitscanner(&self) -> &Hitscanner {
        &self.hitscanner
    }

    pub fn colliders(&self) -> &[AabbCollider] {
        &self.colliders[..]
    }

    fn sync_hitscanner(&mut self) {
        self.hitscanner.set_origin(self.actor.position());
        self.hitscanner.set_angle(self.actor.rotation());
        self.hitscanner.set_range(self.actor.view_distance());
        self.hitscanner.set_infinite_range(false);
    }

    /// Advance by `dt` seconds under `input`.
    ///
    /// Returns whether anything that would change the next frame happened.
    pub fn tick(&mut self, input: &TickInput, dt: f64) -> bool {
        let mut changed = false;

        if let Some(relative) = input.movement.relative_angle() {
            let heading = self.actor.rotation() + FRAC_PI_2 - relative;
            let step = self.actor.move_speed() * dt;
            self.actor.move_by(step * heading.cos(), step * heading.sin());
            changed = true;
        }

        let look = self.actor.look_speed() * dt;
        if input.look_left {
            self.actor.look_cw(look);
            changed = true;
        } else if input.look_right {
            self.actor.look_ccw(look);
            changed = true;
        }

        let zoom = self.actor.zoom_speed() * dt;
        if input.zoom_in {
            let target = self.actor.view_distance() - zoom;
            self.actor
                .set_view_distance(target.max(self.config.min_view_distance));
            changed = true;
        } else if input.zoom_out {
            self.actor
                .set_view_distance(self.actor.view_distance() + zoom);
            changed = true;
        }

        if input.shrink_fov {
            self.actor.set_fov(self.actor.fov() - zoom);
            changed = true;
        } else if input.grow_fov {
            self.actor.set_fov(self.actor.fov() + zoom);
            changed = true;
        }

        self.sync_hitscanner();

        for collider in self.colliders.iter_mut() {
            if self
                .actor
                .resolve_penetration(collider, ResolveMode::MoveSelf, true)
            {
                debug!(
                    "Pushed actor out of {}; now at {}",
                    collider,
                    self.actor.position()
                );
                self.hitscanner.set_origin(self.actor.position());
                changed = true;
            }
        }

        changed
    }

    /// Sweep the field of view with one ray per column and project the hits onto a surface `surface_height` rows
    /// tall.
    pub fn frame(&self, columns: usize, surface_height: u32) -> Frame {
        let samples = sweep(
            &self.hitscanner,
            &self.colliders,
            self.actor.fov(),
            columns,
        );
        let view_distance = self.actor.view_distance();
        let columns: Vec<Column> = samples
            .iter()
            .map(|s| Column::from_sample(s, view_distance, surface_height))
            .collect();
        trace!(
            "Frame from {}: {} of {} rays hit",
            self.hitscanner.get_origin(),
            samples.iter().filter(|s| s.hit.is_some()).count(),
            samples.len()
        );

        Frame {
            samples,
            columns,
            surface_height,
        }
    }
}
