//! Blast resolution: knockback and elimination of combatants near an impact.
//!
//! The damage model is a fixed lift: anything within reach is pushed up by
//! `lift`, and anything that ends up above the elimination line is out.

use duel_core::events::MatchEvent;
use duel_core::types::DVec2;

use crate::combatant::Combatant;

/// Knockback and elimination parameters.
#[derive(Debug, Clone, Copy)]
pub struct BlastRules {
    /// Reach beyond the blast radius.
    pub margin: f64,
    /// Upward displacement.
    pub lift: f64,
    /// A combatant with `y` strictly above this line after lift is eliminated.
    pub elimination_y: f64,
}

/// Apply a blast at `point` to every living combatant in reach.
/// Returns the ids eliminated by this blast.
pub fn resolve(
    roster: &mut [Combatant],
    point: DVec2,
    blast_radius: f64,
    rules: &BlastRules,
    events: &mut Vec<MatchEvent>,
) -> Vec<u8> {
    let reach = blast_radius + rules.margin;
    let mut eliminated = Vec::new();

    for combatant in roster.iter_mut().filter(|c| c.alive) {
        // Also rejects a NaN point.
        if !(combatant.position.distance(point) < reach) {
            continue;
        }

        combatant.position.y -= rules.lift;
        events.push(MatchEvent::CombatantDisplaced {
            id: combatant.id,
            position: combatant.position,
        });

        if combatant.position.y < rules.elimination_y {
            combatant.eliminate();
            eliminated.push(combatant.id);
            events.push(MatchEvent::CombatantEliminated {
                id: combatant.id,
                position: combatant.position,
            });
            tracing::info!(id = combatant.id, "combatant eliminated");
        }
    }

    eliminated
}
