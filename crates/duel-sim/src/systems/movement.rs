//! Movement system: horizontal walking of the active combatant.

use duel_core::enums::MoveDirection;

use crate::combatant::Combatant;

/// Walk `combatant` one tick in `direction`, stopping at `min_x` / `max_x`.
/// A combatant already past a bound cannot walk further out, and is never
/// pulled back in. Returns whether the position changed.
pub fn walk(
    combatant: &mut Combatant,
    direction: MoveDirection,
    speed: f64,
    dt: f64,
    min_x: f64,
    max_x: f64,
) -> bool {
    if !combatant.alive || direction == MoveDirection::None {
        return false;
    }
    let current = combatant.position.x;
    let step = speed * dt;
    let x = match direction {
        MoveDirection::Left if current > min_x => (current - step).max(min_x),
        MoveDirection::Right if current < max_x => (current + step).min(max_x),
        _ => current,
    };
    let moved = x != combatant.position.x;
    combatant.position.x = x;
    moved
}
