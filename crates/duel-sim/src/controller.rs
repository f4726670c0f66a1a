//! CombatController: owns the match state and turns input into shots.
//!
//! Aim and turn state live here as plain fields on one owned struct. The
//! projectile slot, terrain and scheduler are handed in by the caller for
//! each operation that needs them.

use duel_core::config::MatchConfig;
use duel_core::constants::{EXPLOSION_DURATION_MS, EXPLOSION_END_RADIUS, EXPLOSION_START_RADIUS};
use duel_core::enums::{MatchOutcome, MoveDirection, TurnPhase};
use duel_core::events::MatchEvent;
use duel_core::types::{launch_velocity, DVec2};
use duel_terrain::Terrain;

use crate::combatant::Combatant;
use crate::projectile::{Impact, ProjectileSimulator};
use crate::scheduler::{ScheduledTask, TaskHandle, TickScheduler};
use crate::systems::blast::{self, BlastRules};
use crate::systems::movement;

/// Barrel angle (degrees) and shot power.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimState {
    pub angle: f64,
    pub power: f64,
}

/// Whose turn it is and whether they may shoot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchState {
    pub current_player: u8,
    /// False exactly while a shot is flying or the post-impact delay runs.
    pub can_fire: bool,
    pub turn_phase: TurnPhase,
    pub outcome: MatchOutcome,
}

impl Default for MatchState {
    fn default() -> Self {
        Self {
            current_player: 0,
            can_fire: true,
            turn_phase: TurnPhase::Aiming,
            outcome: MatchOutcome::InProgress,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CombatController {
    config: MatchConfig,
    aim: AimState,
    state: MatchState,
    roster: Vec<Combatant>,
    pending_turn: Option<TaskHandle>,
}

impl CombatController {
    /// Fresh match: default aim, player 0 to move, everyone at their spawn.
    pub fn new(config: &MatchConfig) -> Self {
        debug_assert!(
            !config.spawn_points.is_empty(),
            "a match needs at least one combatant"
        );
        let roster = config
            .spawn_points
            .iter()
            .enumerate()
            .map(|(id, &pos)| Combatant::new(id as u8, pos))
            .collect();
        Self {
            aim: AimState {
                angle: config.angle_default,
                power: config.power_default,
            },
            state: MatchState::default(),
            roster,
            pending_turn: None,
            config: config.clone(),
        }
    }

    pub fn aim(&self) -> AimState {
        self.aim
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn outcome(&self) -> MatchOutcome {
        self.state.outcome
    }

    pub fn roster(&self) -> &[Combatant] {
        &self.roster
    }

    pub fn active_combatant(&self) -> &Combatant {
        &self.roster[self.state.current_player as usize]
    }

    /// The turn advance waiting on the scheduler, if any.
    pub fn pending_turn(&self) -> Option<TaskHandle> {
        self.pending_turn
    }

    /// Where the next shot leaves the barrel.
    pub fn muzzle(&self) -> DVec2 {
        self.active_combatant().position - DVec2::new(0.0, self.config.muzzle_offset)
    }

    /// Turn the barrel by `delta` degrees. Non-finite deltas are ignored.
    pub fn adjust_angle(&mut self, delta: f64) {
        if !delta.is_finite() {
            tracing::trace!(delta, "angle adjustment ignored");
            return;
        }
        self.aim.angle = (self.aim.angle + delta)
            .clamp(self.config.angle_min, self.config.angle_max);
    }

    /// Change shot power by `delta`. Non-finite deltas are ignored.
    pub fn adjust_power(&mut self, delta: f64) {
        if !delta.is_finite() {
            tracing::trace!(delta, "power adjustment ignored");
            return;
        }
        self.aim.power = (self.aim.power + delta)
            .clamp(self.config.power_min, self.config.power_max);
    }

    /// Launch a shot from the active combatant. Returns `false` without
    /// side effects if firing is not allowed or a shot is already flying.
    pub fn fire(
        &mut self,
        projectile: &mut ProjectileSimulator,
        events: &mut Vec<MatchEvent>,
    ) -> bool {
        if !self.state.can_fire || projectile.is_active() {
            tracing::trace!(can_fire = self.state.can_fire, "fire ignored");
            return false;
        }

        let origin = self.muzzle();
        let velocity = launch_velocity(self.aim.angle, self.aim.power);
        if !projectile.launch(origin, velocity) {
            return false;
        }

        self.state.can_fire = false;
        self.state.turn_phase = TurnPhase::ProjectileInFlight;
        events.push(MatchEvent::ShotFired {
            player: self.state.current_player,
            origin,
            velocity,
        });
        tracing::debug!(
            player = self.state.current_player,
            angle = self.aim.angle,
            power = self.aim.power,
            "shot fired"
        );
        true
    }

    /// Walk the active combatant one tick. Only allowed while aiming.
    pub fn move_active_combatant(
        &mut self,
        direction: MoveDirection,
        dt: f64,
        projectile: &ProjectileSimulator,
    ) -> bool {
        if projectile.is_active() || !self.state.can_fire {
            tracing::trace!(?direction, "move ignored");
            return false;
        }
        let idx = self.state.current_player as usize;
        movement::walk(
            &mut self.roster[idx],
            direction,
            self.config.walk_speed,
            dt,
            self.config.walk_min_x,
            self.config.walk_max_x,
        )
    }

    /// Resolve a landed shot: carve the crater, knock back combatants in
    /// reach, and either end the match or schedule the next turn for
    /// `now + turn_delay_ticks`.
    pub fn on_projectile_impact<T: Terrain + ?Sized>(
        &mut self,
        impact: &Impact,
        projectile: &mut ProjectileSimulator,
        terrain: &mut T,
        scheduler: &mut TickScheduler,
        now: u64,
        events: &mut Vec<MatchEvent>,
    ) {
        projectile.deactivate();
        if self.state.outcome.is_over() {
            return;
        }

        events.push(MatchEvent::Impact {
            point: impact.point,
            blast_radius: impact.blast_radius,
            cause: impact.cause,
        });

        terrain.carve_crater(impact.point, impact.blast_radius);
        events.push(MatchEvent::CraterCarved {
            center: impact.point,
            radius: impact.blast_radius,
        });
        events.push(MatchEvent::Explosion {
            point: impact.point,
            start_radius: EXPLOSION_START_RADIUS,
            end_radius: EXPLOSION_END_RADIUS,
            duration_ms: EXPLOSION_DURATION_MS,
        });

        let rules = BlastRules {
            margin: self.config.knockback_margin,
            lift: self.config.knockback_lift,
            elimination_y: self.config.elimination_y,
        };
        blast::resolve(&mut self.roster, impact.point, impact.blast_radius, &rules, events);

        self.state.can_fire = false;
        self.state.turn_phase = TurnPhase::PostImpactDelay;

        if let Some(outcome) = self.check_outcome() {
            self.state.outcome = outcome;
            if let Some(handle) = self.pending_turn.take() {
                scheduler.cancel(handle);
            }
            events.push(MatchEvent::MatchOver { outcome });
            tracing::info!(?outcome, "match over");
            return;
        }

        if let Some(stale) = self.pending_turn.take() {
            scheduler.cancel(stale);
        }
        let due = now.saturating_add(self.config.turn_delay_ticks());
        self.pending_turn = Some(scheduler.schedule_at(due, ScheduledTask::AdvanceTurn));
    }

    /// Pass the turn to the next living combatant and allow firing again.
    pub fn next_turn(&mut self, events: &mut Vec<MatchEvent>) {
        self.pending_turn = None;
        if self.state.outcome.is_over() {
            return;
        }

        let count = self.roster.len();
        let current = self.state.current_player as usize;
        let next = (1..=count)
            .map(|step| (current + step) % count)
            .find(|&i| self.roster[i].alive)
            .unwrap_or(current);

        self.state.current_player = next as u8;
        self.state.can_fire = true;
        self.state.turn_phase = TurnPhase::Aiming;
        events.push(MatchEvent::TurnChanged {
            player: self.state.current_player,
        });
        tracing::debug!(player = self.state.current_player, "turn advanced");
    }

    fn check_outcome(&self) -> Option<MatchOutcome> {
        let mut alive = self.roster.iter().filter(|c| c.alive);
        match (alive.next(), alive.next()) {
            (None, _) => Some(MatchOutcome::Draw),
            (Some(winner), None) => Some(MatchOutcome::Won { winner: winner.id }),
            _ => None,
        }
    }
}
