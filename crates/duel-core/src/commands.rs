//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and applied at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::MoveDirection;

/// All possible player actions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Rotate the barrel by `delta` degrees (clamped).
    AdjustAngle { delta: f64 },
    /// Change shot power by `delta` (clamped).
    AdjustPower { delta: f64 },
    /// Fire the active combatant's weapon.
    Fire,
    /// Hold a walking direction until the next `Move`.
    Move { direction: MoveDirection },
    /// Reset everything and start over from player 0.
    NewMatch,
}
