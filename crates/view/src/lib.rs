//! The first-person view: an actor moving through colliders, and the column sweep that draws what it sees.
mod actor;
mod config;
mod input;
mod projection;
mod simulation;
mod sweep;

pub use actor::*;
pub use config::*;
pub use input::*;
pub use projection::*;
pub use simulation::*;
pub use sweep::*;
