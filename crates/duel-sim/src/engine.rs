//! Match engine: one match, advanced one tick at a time.
//!
//! `MatchEngine` owns the combat controller, projectile slot, terrain and
//! scheduler, applies queued player commands, and produces a
//! `MatchSnapshot` per tick. Completely headless, enabling deterministic
//! testing.

use std::collections::VecDeque;

use duel_core::commands::PlayerCommand;
use duel_core::config::{ConfigError, MatchConfig};
use duel_core::enums::MoveDirection;
use duel_core::events::MatchEvent;
use duel_core::state::MatchSnapshot;
use duel_core::types::SimTime;
use duel_terrain::{build_mask, SolidityMask};

use crate::controller::CombatController;
use crate::projectile::ProjectileSimulator;
use crate::scheduler::{ScheduledTask, TickScheduler};
use crate::systems;
use crate::systems::arc_prediction::{ArcPrediction, ShotParams};

pub struct MatchEngine {
    config: MatchConfig,
    time: SimTime,
    controller: CombatController,
    projectile: ProjectileSimulator,
    terrain: SolidityMask,
    scheduler: TickScheduler,
    command_queue: VecDeque<PlayerCommand>,
    held_move: MoveDirection,
    events: Vec<MatchEvent>,
}

impl MatchEngine {
    /// Create an engine for an already-validated config. Use
    /// [`MatchEngine::from_config`] for configs from outside.
    pub fn new(config: MatchConfig) -> Self {
        debug_assert!(
            config.validate().is_ok(),
            "MatchEngine::new needs a valid config"
        );
        let engine = Self {
            time: SimTime::default(),
            controller: CombatController::new(&config),
            projectile: ProjectileSimulator::new(
                config.gravity,
                config.blast_radius,
                config.bounds,
            ),
            terrain: build_mask(config.bounds, &config.terrain),
            scheduler: TickScheduler::new(),
            command_queue: VecDeque::new(),
            held_move: MoveDirection::None,
            events: vec![MatchEvent::MatchStarted],
            config,
        };
        engine.log_start();
        engine
    }

    /// Validate `config`, then create an engine for it.
    pub fn from_config(config: MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Queue a player command for the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the match by one tick and return the resulting snapshot.
    ///
    /// Order within a tick: due scheduled tasks, queued input, walking,
    /// projectile step, impact resolution.
    pub fn tick(&mut self) -> MatchSnapshot {
        let now = self.time.tick;
        let dt = self.config.dt();

        self.run_due_tasks(now);
        self.process_commands();

        if !self.controller.outcome().is_over() {
            self.controller
                .move_active_combatant(self.held_move, dt, &self.projectile);
        }

        if let Some(impact) = self.projectile.tick(dt, &self.terrain) {
            self.controller.on_projectile_impact(
                &impact,
                &mut self.projectile,
                &mut self.terrain,
                &mut self.scheduler,
                now,
                &mut self.events,
            );
        }

        self.time.advance(dt);

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.time,
            &self.controller,
            &self.projectile,
            self.terrain.craters().len(),
            events,
        )
    }

    /// Predict the active combatant's shot with the current aim.
    pub fn preview_shot(&self, max_steps: usize) -> ArcPrediction {
        let aim = self.controller.aim();
        let params = ShotParams {
            origin: self.controller.muzzle(),
            angle: aim.angle,
            power: aim.power,
            gravity: self.config.gravity,
            dt: self.config.dt(),
        };
        systems::arc_prediction::predict_arc(&params, &self.terrain, &self.config.bounds, max_steps)
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn controller(&self) -> &CombatController {
        &self.controller
    }

    pub fn projectile(&self) -> &ProjectileSimulator {
        &self.projectile
    }

    pub fn terrain(&self) -> &SolidityMask {
        &self.terrain
    }

    pub fn scheduler(&self) -> &TickScheduler {
        &self.scheduler
    }

    pub fn held_move(&self) -> MoveDirection {
        self.held_move
    }

    /// Fire every scheduled task due at `now`.
    fn run_due_tasks(&mut self, now: u64) {
        for (handle, task) in self.scheduler.take_due(now) {
            match task {
                ScheduledTask::AdvanceTurn => {
                    if self.controller.pending_turn() == Some(handle) {
                        self.controller.next_turn(&mut self.events);
                    }
                }
            }
        }
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        if self.controller.outcome().is_over() && !matches!(command, PlayerCommand::NewMatch) {
            tracing::trace!(?command, "match over, command ignored");
            return;
        }

        match command {
            PlayerCommand::AdjustAngle { delta } => self.controller.adjust_angle(delta),
            PlayerCommand::AdjustPower { delta } => self.controller.adjust_power(delta),
            PlayerCommand::Fire => {
                self.controller.fire(&mut self.projectile, &mut self.events);
            }
            PlayerCommand::Move { direction } => self.held_move = direction,
            PlayerCommand::NewMatch => self.reset(),
        }
    }

    /// Start over with the same config. Pending turn advances are cancelled.
    fn reset(&mut self) {
        self.scheduler.cancel_all();
        self.controller = CombatController::new(&self.config);
        self.projectile = ProjectileSimulator::new(
            self.config.gravity,
            self.config.blast_radius,
            self.config.bounds,
        );
        self.terrain = build_mask(self.config.bounds, &self.config.terrain);
        self.held_move = MoveDirection::None;
        self.time = SimTime::default();
        self.events.clear();
        self.events.push(MatchEvent::MatchStarted);
        self.log_start();
    }

    fn log_start(&self) {
        tracing::info!(
            players = self.config.player_count(),
            terrain = ?self.config.terrain,
            "match started"
        );
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}
