//! Destructible terrain for the artillery duel.
//!
//! A bit-packed solidity mask, profile generation, and the segment trace
//! used to find where a projectile first touches ground or leaves the map.

pub use duel_core as core;

pub mod mask;
pub mod profile;
pub mod trace;

use duel_core::types::DVec2;

// Re-export key types for convenience.
pub use mask::{Crater, SolidityMask};
pub use profile::build_mask;
pub use trace::{first_contact, Contact};

/// A destructible 2D ground surface.
///
/// Cleared ground never becomes solid again: `carve_crater` is the only
/// mutation and it only removes solidity.
pub trait Terrain {
    /// Whether `point` lies within solid ground, accounting for all craters.
    fn is_solid_at(&self, point: DVec2) -> bool;

    /// Clear every point within `radius` of `center`. Idempotent.
    fn carve_crater(&mut self, center: DVec2, radius: f64);
}
