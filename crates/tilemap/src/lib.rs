//! Occupancy grids, and turning them into the colliders the raycaster works against.
mod errors;
mod grid;
mod merge;


pub use errors::*;
pub use grid::*;
pub use merge::*;
