//! Events emitted by the simulation for the renderer.
//!
//! Events are transient: each snapshot carries only the events produced
//! during that tick.

use serde::{Deserialize, Serialize};

use crate::enums::{ImpactCause, MatchOutcome};
use crate::types::DVec2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MatchEvent {
    /// A fresh match has been set up.
    MatchStarted,
    /// A projectile left the muzzle.
    ShotFired {
        player: u8,
        origin: DVec2,
        velocity: DVec2,
    },
    /// The projectile's flight ended.
    Impact {
        point: DVec2,
        blast_radius: f64,
        cause: ImpactCause,
    },
    /// Terrain was cleared around `center`. Renderers cut the same hole
    /// out of the ground texture.
    CraterCarved { center: DVec2, radius: f64 },
    /// Cosmetic flash; has no effect on state.
    Explosion {
        point: DVec2,
        start_radius: f64,
        end_radius: f64,
        duration_ms: u64,
    },
    /// A combatant was knocked to a new position.
    CombatantDisplaced { id: u8, position: DVec2 },
    /// A combatant was knocked off the map.
    CombatantEliminated { id: u8, position: DVec2 },
    /// It is now `player`'s turn.
    TurnChanged { player: u8 },
    /// The match has ended.
    MatchOver { outcome: MatchOutcome },
}
