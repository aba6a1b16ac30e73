//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Driven only by `Game::tick` and explicit input calls
//! - Seeded RNG only
//! - No rendering, audio, or platform dependencies (those consume events)

pub mod game;
pub mod hit;
pub mod object;
pub mod sequencer;

pub use game::{Game, GamePhase};
pub use hit::{segment_hits_circle, sweep_polyline};
pub use object::{ObjectKind, ObjectSimulation, SpawnedObject};
pub use sequencer::{ForceBomb, Pacing, SequencePlan, WaveKind};
