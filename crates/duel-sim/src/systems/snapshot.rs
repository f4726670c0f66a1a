//! Snapshot system: reads the controller and projectile slot and builds a
//! complete MatchSnapshot. Read-only.

use duel_core::events::MatchEvent;
use duel_core::state::{CombatantView, MatchSnapshot};
use duel_core::types::SimTime;

use crate::controller::CombatController;
use crate::projectile::ProjectileSimulator;

pub fn build_snapshot(
    time: &SimTime,
    controller: &CombatController,
    projectile: &ProjectileSimulator,
    craters: usize,
    events: Vec<MatchEvent>,
) -> MatchSnapshot {
    let aim = controller.aim();
    let state = controller.state();

    MatchSnapshot {
        time: *time,
        outcome: state.outcome,
        turn_phase: state.turn_phase,
        current_player: state.current_player,
        angle: aim.angle,
        power: aim.power,
        can_fire: state.can_fire,
        projectile: projectile.view(),
        combatants: build_combatants(controller),
        craters,
        events,
    }
}

fn build_combatants(controller: &CombatController) -> Vec<CombatantView> {
    let current = controller.state().current_player;
    controller
        .roster()
        .iter()
        .map(|c| c.view(c.id == current))
        .collect()
}
