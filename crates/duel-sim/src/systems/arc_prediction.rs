//! Aim preview: the path a shot would take with the current angle and power.
//!
//! Replays the same integrator and contact trace the projectile slot uses,
//! without touching any match state, so the preview and the real shot agree.

use serde::{Deserialize, Serialize};

use duel_core::enums::ImpactCause;
use duel_core::types::{launch_velocity, Bounds, DVec2};
use duel_terrain::{first_contact, Terrain};

use crate::projectile::integrate;

/// Parameters of a predicted shot.
#[derive(Debug, Clone, Copy)]
pub struct ShotParams {
    pub origin: DVec2,
    /// Degrees.
    pub angle: f64,
    pub power: f64,
    pub gravity: f64,
    pub dt: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArcPrediction {
    /// Position after each tick, starting with the muzzle.
    pub points: Vec<DVec2>,
    /// Where the shot would land, if it lands within the step budget.
    pub impact: Option<DVec2>,
    pub cause: Option<ImpactCause>,
    pub flight_time: f64,
}

/// Predict a shot for up to `max_steps` ticks.
pub fn predict_arc<T: Terrain + ?Sized>(
    params: &ShotParams,
    terrain: &T,
    bounds: &Bounds,
    max_steps: usize,
) -> ArcPrediction {
    let mut position = params.origin;
    let mut velocity = launch_velocity(params.angle, params.power);
    let mut points = Vec::with_capacity(max_steps.min(1024) + 1);
    points.push(position);
    let mut flight_time = 0.0;

    for _ in 0..max_steps {
        let from = position;
        (position, velocity) = integrate(from, velocity, params.gravity, params.dt);
        flight_time += params.dt;

        if let Some(contact) = first_contact(terrain, bounds, from, position) {
            points.push(contact.point);
            return ArcPrediction {
                points,
                impact: Some(contact.point),
                cause: Some(contact.cause),
                flight_time,
            };
        }
        points.push(position);
    }

    ArcPrediction {
        points,
        impact: None,
        cause: None,
        flight_time,
    }
}
