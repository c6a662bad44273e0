//! Geometry and collision primitives for the raycaster.
//!
//! Everything here works in a y-up world with angles in radians, counter-clockwise from the positive x axis.
pub mod angle;
mod aabb;
mod collision_tests;
mod coordinate;
mod ray;
mod raycasting;
mod resolver;
mod vector;

pub use aabb::*;
pub use coordinate::*;
pub use ray::*;
pub use resolver::ResolveMode;
pub use vector::*;
