//! Slice Storm - swipe-slicing arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (objects, spawn sequencing, hit-testing, game state)
//! - `swipe`: Bounded swipe polyline tracking
//! - `rng`: Seeded bounded-integer RNG for spawn decisions
//! - `events`: Outbound notifications for presentation/audio collaborators
//! - `highscores`: Bounded leaderboard with a pluggable score store

pub mod events;
pub mod highscores;
pub mod rng;
pub mod sim;
pub mod swipe;

pub use events::{GameEvent, SoundEffect};
pub use highscores::{HighScores, ScoreStore};
pub use sim::{Game, GamePhase, ObjectKind, ObjectSimulation, SpawnedObject};
pub use swipe::{SwipePoint, SwipeTracker};

/// Game configuration constants
pub mod consts {
    /// Play field dimensions (scene units)
    pub const FIELD_WIDTH: f32 = 1024.0;
    pub const FIELD_HEIGHT: f32 = 768.0;

    /// Horizontal spawn band (inset from the field edges)
    pub const SPAWN_X_MIN: i32 = 64;
    pub const SPAWN_X_MAX: i32 = 960;
    /// Objects launch from below the visible field
    pub const SPAWN_Y: f32 = -128.0;
    /// Objects falling below this line are gone for good
    pub const OFF_SCREEN_Y: f32 = -140.0;

    /// Downward acceleration applied to every in-flight object (units/s²)
    pub const GRAVITY: f32 = 900.0;
    /// Launch velocities are rolled in small integers and scaled up
    pub const VELOCITY_SCALE: f32 = 40.0;

    /// Radius of the circular hit region around every object
    pub const HIT_RADIUS: f32 = 64.0;

    /// Most-recent swipe points retained per stroke
    pub const MAX_SWIPE_POINTS: usize = 12;

    /// Delay before the next wave once the field is clear (seconds)
    pub const INITIAL_POPUP_TIME: f32 = 0.9;
    /// Base delay between chain sub-spawns (seconds)
    pub const INITIAL_CHAIN_DELAY: f32 = 3.0;
    /// Simulation speed multiplier at game start
    pub const INITIAL_SPEED: f32 = 0.85;

    /// Per-wave pacing decay: waves arrive sooner...
    pub const POPUP_TIME_DECAY: f32 = 0.991;
    /// ...chains fire tighter...
    pub const CHAIN_DELAY_DECAY: f32 = 0.99;
    /// ...and everything moves faster.
    pub const SPEED_GROWTH: f32 = 1.02;

    /// Chain sub-spawn delay divisors
    pub const CHAIN_DIVISOR: f32 = 2.0;
    pub const FAST_CHAIN_DIVISOR: f32 = 10.0;
    /// Sub-spawns fired after a chain's leading object
    pub const CHAIN_FOLLOWERS: u32 = 4;

    /// Delay before the very first wave after start (seconds)
    pub const FIRST_WAVE_DELAY: f32 = 2.0;
    /// Delay between game over and the high-score prompt (seconds)
    pub const NAME_PROMPT_DELAY: f32 = 1.0;

    /// Randomly generated waves appended after the authored prefix
    pub const RANDOM_PLAN_LEN: usize = 1000;

    /// Lives at the start of a run
    pub const STARTING_LIVES: u8 = 3;
}
