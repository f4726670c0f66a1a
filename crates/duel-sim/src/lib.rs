//! Simulation kernel for the artillery duel.
//!
//! Owns one match: the combat controller, the single projectile slot, the
//! destructible terrain, and the tick scheduler. Completely headless, so a
//! match can be driven tick by tick and inspected deterministically.

pub mod combatant;
pub mod controller;
pub mod engine;
pub mod projectile;
pub mod scheduler;
pub mod systems;

pub use duel_core as core;
pub use duel_terrain as terrain;
pub use engine::MatchEngine;
