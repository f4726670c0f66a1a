//! Stateless systems run by the controller and engine.
//!
//! Systems are plain functions over explicit borrows. They do not own
//! state; everything lives in the controller, projectile slot and terrain.

pub mod arc_prediction;
pub mod blast;
pub mod movement;
pub mod snapshot;
