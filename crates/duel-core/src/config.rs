//! Match configuration.
//!
//! Every field defaults to the matching value in [`crate::constants`], so a
//! config file only needs to name what it changes.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::{Bounds, DVec2};

/// Errors raised while loading or validating a [`MatchConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse match config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

/// Shape of the ground at match start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum TerrainProfile {
    /// Solid from `surface_y` down to the bottom edge.
    Flat { surface_y: f64 },
    /// Solid between `top` and `bottom`, open below.
    Slab { top: f64, bottom: f64 },
    /// Seeded rolling hills around `base_y`.
    Rolling {
        seed: u64,
        base_y: f64,
        amplitude: f64,
        wavelength: f64,
    },
}

impl Default for TerrainProfile {
    fn default() -> Self {
        TerrainProfile::Flat {
            surface_y: GROUND_Y,
        }
    }
}

/// Configuration for starting a new match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub tick_rate: u32,
    pub bounds: Bounds,
    pub gravity: f64,
    pub blast_radius: f64,
    pub knockback_margin: f64,
    pub knockback_lift: f64,
    pub elimination_y: f64,
    pub muzzle_offset: f64,
    pub angle_min: f64,
    pub angle_max: f64,
    pub angle_default: f64,
    pub power_min: f64,
    pub power_max: f64,
    pub power_default: f64,
    pub walk_speed: f64,
    pub walk_min_x: f64,
    pub walk_max_x: f64,
    pub turn_delay_ms: u64,
    pub spawn_points: Vec<DVec2>,
    pub terrain: TerrainProfile,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            tick_rate: TICK_RATE,
            bounds: Bounds::default(),
            gravity: GRAVITY,
            blast_radius: BLAST_RADIUS,
            knockback_margin: KNOCKBACK_MARGIN,
            knockback_lift: KNOCKBACK_LIFT,
            elimination_y: ELIMINATION_Y,
            muzzle_offset: MUZZLE_OFFSET,
            angle_min: ANGLE_MIN,
            angle_max: ANGLE_MAX,
            angle_default: ANGLE_DEFAULT,
            power_min: POWER_MIN,
            power_max: POWER_MAX,
            power_default: POWER_DEFAULT,
            walk_speed: WALK_SPEED,
            walk_min_x: WALK_MIN_X,
            walk_max_x: WALK_MAX_X,
            turn_delay_ms: TURN_DELAY_MS,
            spawn_points: SPAWN_POINTS
                .iter()
                .map(|&(x, y)| DVec2::new(x, y))
                .collect(),
            terrain: TerrainProfile::default(),
        }
    }
}

impl MatchConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: MatchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Seconds per tick.
    pub fn dt(&self) -> f64 {
        1.0 / self.tick_rate as f64
    }

    /// Post-impact delay converted to whole ticks, never less than one.
    pub fn turn_delay_ticks(&self) -> u64 {
        let ticks = self
            .turn_delay_ms
            .saturating_mul(self.tick_rate as u64)
            .div_ceil(1000);
        ticks.max(1)
    }

    /// Number of combatants in the roster.
    pub fn player_count(&self) -> usize {
        self.spawn_points.len()
    }

    /// Check every field against its allowed range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate == 0 {
            return Err(invalid("tick_rate", "must be positive"));
        }
        if !(self.bounds.width > 0.0 && self.bounds.height > 0.0) {
            return Err(invalid("bounds", "width and height must be positive"));
        }
        if !(self.gravity >= 0.0) {
            return Err(invalid("gravity", "must not be negative"));
        }
        if !(self.blast_radius > 0.0) {
            return Err(invalid("blast_radius", "must be positive"));
        }
        if !(self.knockback_margin >= 0.0) {
            return Err(invalid("knockback_margin", "must not be negative"));
        }
        if !(0.0 <= self.angle_min && self.angle_min <= self.angle_max && self.angle_max <= 360.0)
        {
            return Err(invalid(
                "angle_min/angle_max",
                format!("[{}, {}] is not a range within [0, 360]", self.angle_min, self.angle_max),
            ));
        }
        if !(self.angle_min..=self.angle_max).contains(&self.angle_default) {
            return Err(invalid("angle_default", "outside [angle_min, angle_max]"));
        }
        if !(0.0 < self.power_min && self.power_min <= self.power_max) {
            return Err(invalid(
                "power_min/power_max",
                format!("[{}, {}] is not a positive range", self.power_min, self.power_max),
            ));
        }
        if !(self.power_min..=self.power_max).contains(&self.power_default) {
            return Err(invalid("power_default", "outside [power_min, power_max]"));
        }
        if self.turn_delay_ms > MAX_TURN_DELAY_MS {
            return Err(invalid(
                "turn_delay_ms",
                format!("{} exceeds {MAX_TURN_DELAY_MS}", self.turn_delay_ms),
            ));
        }
        if !(self.walk_speed >= 0.0) {
            return Err(invalid("walk_speed", "must not be negative"));
        }
        if !(0.0 <= self.walk_min_x
            && self.walk_min_x <= self.walk_max_x
            && self.walk_max_x <= self.bounds.width)
        {
            return Err(invalid(
                "walk_min_x/walk_max_x",
                "must be an ordered range inside the world width",
            ));
        }
        if self.spawn_points.len() < 2 {
            return Err(invalid("spawn_points", "at least two combatants are required"));
        }
        if self.spawn_points.len() > u8::MAX as usize {
            return Err(invalid("spawn_points", "too many combatants"));
        }
        if let Some(p) = self.spawn_points.iter().find(|p| !self.bounds.contains(**p)) {
            return Err(invalid(
                "spawn_points",
                format!("({}, {}) is outside the world", p.x, p.y),
            ));
        }
        self.validate_terrain()
    }

    fn validate_terrain(&self) -> Result<(), ConfigError> {
        let h = self.bounds.height;
        match self.terrain {
            TerrainProfile::Flat { surface_y } => {
                if !(0.0..=h).contains(&surface_y) {
                    return Err(invalid("terrain.surface_y", "outside the world height"));
                }
            }
            TerrainProfile::Slab { top, bottom } => {
                if !(0.0 <= top && top <= bottom && bottom <= h) {
                    return Err(invalid(
                        "terrain.top/terrain.bottom",
                        "must be an ordered range inside the world height",
                    ));
                }
            }
            TerrainProfile::Rolling {
                base_y,
                amplitude,
                wavelength,
                ..
            } => {
                if !(0.0..=h).contains(&base_y) {
                    return Err(invalid("terrain.base_y", "outside the world height"));
                }
                if !(amplitude >= 0.0) {
                    return Err(invalid("terrain.amplitude", "must not be negative"));
                }
                if !(wavelength > 0.0) {
                    return Err(invalid("terrain.wavelength", "must be positive"));
                }
            }
        }
        Ok(())
    }
}
