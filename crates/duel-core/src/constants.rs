//! Simulation constants and tuning parameters.
//!
//! These are the defaults behind every `MatchConfig` field. Coordinates are
//! logical screen units: x grows to the right, y grows downward.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick at the default tick rate.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- World bounds ---

/// Playable region width.
pub const WORLD_WIDTH: f64 = 800.0;

/// Playable region height.
pub const WORLD_HEIGHT: f64 = 600.0;

// --- Ballistics ---

/// Downward acceleration applied to the projectile (units/s²).
pub const GRAVITY: f64 = 300.0;

/// Crater radius and damage radius of every shot.
pub const BLAST_RADIUS: f64 = 30.0;

/// Extra reach beyond the blast radius within which combatants are knocked back.
pub const KNOCKBACK_MARGIN: f64 = 20.0;

/// Upward displacement applied to a combatant caught in a blast.
pub const KNOCKBACK_LIFT: f64 = 50.0;

/// A combatant whose y ends up above this line after knockback is eliminated.
pub const ELIMINATION_Y: f64 = 300.0;

/// Projectile spawns this far above the firing combatant.
pub const MUZZLE_OFFSET: f64 = 10.0;

/// Distance between samples when tracing a projectile step for contacts.
pub const TRACE_SAMPLE_INTERVAL: f64 = 1.0;

/// Bisection rounds used to refine a contact point.
pub const TRACE_REFINE_ITERATIONS: u32 = 16;

// --- Aim ---

pub const ANGLE_MIN: f64 = 0.0;
pub const ANGLE_MAX: f64 = 180.0;
pub const ANGLE_DEFAULT: f64 = 45.0;
/// Angle change per key press (degrees).
pub const ANGLE_STEP: f64 = 5.0;

pub const POWER_MIN: f64 = 10.0;
pub const POWER_MAX: f64 = 100.0;
pub const POWER_DEFAULT: f64 = 50.0;
/// Power change per key press.
pub const POWER_STEP: f64 = 5.0;

// --- Movement ---

/// Horizontal walking speed of the active combatant (units/s).
pub const WALK_SPEED: f64 = 50.0;

/// Leftmost x a combatant may walk to.
pub const WALK_MIN_X: f64 = 50.0;

/// Rightmost x a combatant may walk to.
pub const WALK_MAX_X: f64 = 750.0;

// --- Turns ---

/// Delay between an impact and the next turn (milliseconds).
pub const TURN_DELAY_MS: u64 = 1000;
/// Longest post-impact delay a config may ask for.
pub const MAX_TURN_DELAY_MS: u64 = 60_000;

/// Starting positions, one per combatant.
pub const SPAWN_POINTS: [(f64, f64); 2] = [(150.0, 300.0), (650.0, 300.0)];

// --- Terrain ---

/// Surface line of the default flat terrain.
pub const GROUND_Y: f64 = 400.0;

/// Default seed for procedurally generated terrain.
pub const DEFAULT_SEED: u64 = 42;

// --- Display ---

/// Explosion flash starting radius.
pub const EXPLOSION_START_RADIUS: f64 = 10.0;

/// Explosion flash final radius.
pub const EXPLOSION_END_RADIUS: f64 = 40.0;

/// Explosion flash fade duration (milliseconds).
pub const EXPLOSION_DURATION_MS: u64 = 500;
