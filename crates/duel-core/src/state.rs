//! Match state snapshot: the complete visible state handed to the renderer each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{MatchOutcome, TurnPhase};
use crate::events::MatchEvent;
use crate::types::{DVec2, SimTime};

/// Complete match state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub time: SimTime,
    pub outcome: MatchOutcome,
    pub turn_phase: TurnPhase,
    pub current_player: u8,
    /// Barrel angle in degrees.
    pub angle: f64,
    pub power: f64,
    pub can_fire: bool,
    pub projectile: Option<ProjectileView>,
    pub combatants: Vec<CombatantView>,
    /// Number of craters carved so far.
    pub craters: usize,
    pub events: Vec<MatchEvent>,
}

impl MatchSnapshot {
    /// HUD turn label, numbering players from 1.
    pub fn turn_label(&self) -> String {
        format!("Player {}", self.current_player as u32 + 1)
    }
}

/// The projectile in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: DVec2,
    pub velocity: DVec2,
    /// Seconds since launch.
    pub flight_time: f64,
}

/// A combatant's sprite state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CombatantView {
    pub id: u8,
    pub position: DVec2,
    pub alive: bool,
    /// Whether it is this combatant's turn.
    pub active: bool,
}
