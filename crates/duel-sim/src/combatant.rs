//! Combatant: a player-controlled entity with a position and alive status.

use duel_core::state::CombatantView;
use duel_core::types::DVec2;

#[derive(Debug, Clone, PartialEq)]
pub struct Combatant {
    pub id: u8,
    pub position: DVec2,
    pub alive: bool,
}

impl Combatant {
    pub fn new(id: u8, position: DVec2) -> Self {
        Self {
            id,
            position,
            alive: true,
        }
    }

    /// Mark the combatant out of the match. There is no way back.
    pub fn eliminate(&mut self) {
        self.alive = false;
    }

    pub fn view(&self, active: bool) -> CombatantView {
        CombatantView {
            id: self.id,
            position: self.position,
            alive: self.alive,
            active,
        }
    }
}
