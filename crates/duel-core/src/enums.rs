//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Horizontal walking direction held by the active player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveDirection {
    Left,
    Right,
    #[default]
    None,
}

impl MoveDirection {
    /// Signed unit factor along x.
    pub fn sign(self) -> f64 {
        match self {
            MoveDirection::Left => -1.0,
            MoveDirection::Right => 1.0,
            MoveDirection::None => 0.0,
        }
    }
}

/// Phase of the current turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Active player may walk, aim and fire.
    #[default]
    Aiming,
    /// A shot is in the air.
    ProjectileInFlight,
    /// Shot has landed; waiting for the turn to pass.
    PostImpactDelay,
}

/// Why a projectile's flight ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactCause {
    /// Reached solid ground.
    Terrain,
    /// Left the playable region.
    OutOfBounds,
}

/// Result of the match so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state")]
pub enum MatchOutcome {
    #[default]
    InProgress,
    /// Exactly one combatant is left standing.
    Won { winner: u8 },
    /// Nobody is left standing.
    Draw,
}

impl MatchOutcome {
    pub fn is_over(self) -> bool {
        !matches!(self, MatchOutcome::InProgress)
    }
}
