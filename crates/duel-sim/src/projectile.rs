//! ProjectileSimulator: the single shared projectile slot.
//!
//! Integrates the shot under gravity each tick and reports exactly one
//! impact per flight, when the shot reaches solid ground or leaves the map.

use duel_core::enums::ImpactCause;
use duel_core::state::ProjectileView;
use duel_core::types::{Bounds, DVec2};
use duel_terrain::{first_contact, Terrain};

/// The projectile slot. Inactive between shots.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Projectile {
    pub position: DVec2,
    pub velocity: DVec2,
    pub active: bool,
    /// Seconds since launch.
    pub flight_time: f64,
}

/// End of a flight, handed to the combat controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impact {
    pub point: DVec2,
    pub blast_radius: f64,
    pub cause: ImpactCause,
}

/// One semi-implicit Euler step: velocity first, then position.
pub fn integrate(position: DVec2, velocity: DVec2, gravity: f64, dt: f64) -> (DVec2, DVec2) {
    let velocity = DVec2::new(velocity.x, velocity.y + gravity * dt);
    (position + velocity * dt, velocity)
}

#[derive(Debug, Clone)]
pub struct ProjectileSimulator {
    slot: Projectile,
    gravity: f64,
    blast_radius: f64,
    bounds: Bounds,
}

impl ProjectileSimulator {
    pub fn new(gravity: f64, blast_radius: f64, bounds: Bounds) -> Self {
        Self {
            slot: Projectile::default(),
            gravity,
            blast_radius,
            bounds,
        }
    }

    pub fn is_active(&self) -> bool {
        self.slot.active
    }

    pub fn projectile(&self) -> &Projectile {
        &self.slot
    }

    pub fn view(&self) -> Option<ProjectileView> {
        self.slot.active.then_some(ProjectileView {
            position: self.slot.position,
            velocity: self.slot.velocity,
            flight_time: self.slot.flight_time,
        })
    }

    /// Put a shot in the air. Returns `false` (and changes nothing) while a
    /// shot is already flying.
    pub fn launch(&mut self, position: DVec2, velocity: DVec2) -> bool {
        if self.slot.active {
            return false;
        }
        self.slot = Projectile {
            position,
            velocity,
            active: true,
            flight_time: 0.0,
        };
        true
    }

    /// End the current flight, if any.
    pub fn deactivate(&mut self) {
        self.slot.active = false;
    }

    /// Advance the shot by `dt` seconds.
    ///
    /// Returns the impact if the step crossed into solid ground or out of the
    /// world; the slot is already inactive when this returns `Some`. A no-op
    /// while inactive.
    pub fn tick<T: Terrain + ?Sized>(&mut self, dt: f64, terrain: &T) -> Option<Impact> {
        if !self.slot.active {
            return None;
        }

        let from = self.slot.position;
        let (position, velocity) = integrate(from, self.slot.velocity, self.gravity, dt);
        self.slot.position = position;
        self.slot.velocity = velocity;
        self.slot.flight_time += dt;
        tracing::trace!(x = position.x, y = position.y, t = self.slot.flight_time, "projectile");

        let contact = first_contact(terrain, &self.bounds, from, position)?;
        self.slot.position = contact.point;
        self.slot.active = false;
        tracing::debug!(
            x = contact.point.x,
            y = contact.point.y,
            cause = ?contact.cause,
            flight_time = self.slot.flight_time,
            "impact"
        );
        Some(Impact {
            point: contact.point,
            blast_radius: self.blast_radius,
            cause: contact.cause,
        })
    }
}
