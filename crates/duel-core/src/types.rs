//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

pub use glam::DVec2;

/// Axis-aligned playable region anchored at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            width: crate::constants::WORLD_WIDTH,
            height: crate::constants::WORLD_HEIGHT,
        }
    }
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether `point` lies inside the region (left/top edges inclusive).
    pub fn contains(&self, point: DVec2) -> bool {
        point.x >= 0.0 && point.y >= 0.0 && point.x < self.width && point.y < self.height
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// Launch velocity for a shot at `angle_deg` with `power`.
///
/// 0° fires to the right, 90° straight up, 180° to the left. Screen y grows
/// downward, so an upward shot has negative `y`.
pub fn launch_velocity(angle_deg: f64, power: f64) -> DVec2 {
    let rad = angle_deg.to_radians();
    DVec2::new(rad.cos() * power, -rad.sin() * power)
}
