//! Outbound notifications for the presentation and audio collaborators
//!
//! The simulation never talks to a renderer or a mixer directly: every
//! mutation that the outside world should react to is pushed into an event
//! outbox and drained by the host once per frame. Sounds are fire-and-forget
//! except the bomb fuse, which is a controllable handle started and stopped
//! by dedicated events.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::highscores::HighScoreEntry;
use crate::sim::ObjectKind;

/// Fire-and-forget sound cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Regular object launched
    Launch,
    /// Swipe swoosh, three interchangeable variants
    Swoosh1,
    Swoosh2,
    Swoosh3,
    /// Regular object sliced
    Whack,
    /// Life lost to an object falling off-screen
    Wrong,
    /// Bomb sliced
    Explosion,
    /// Run ended
    GameOver,
}

/// Events emitted by the simulation for the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new object entered the field; show its visual.
    ObjectSpawned {
        id: u32,
        kind: ObjectKind,
        pos: Vec2,
    },
    /// An object was sliced; play its removal effect at `pos`.
    ObjectSliced {
        id: u32,
        kind: ObjectKind,
        pos: Vec2,
    },
    /// An object fell off-screen; remove its visual silently.
    ObjectMissed { id: u32 },
    /// All remaining object visuals should be cleared (restart).
    ObjectsCleared,
    /// Play a one-shot sound.
    Sound(SoundEffect),
    /// Start the looping bomb-fuse sound, replacing any already playing.
    FuseStarted { id: u32 },
    /// Stop the bomb-fuse sound.
    FuseStopped,
    /// Score label should be updated.
    ScoreChanged { score: u32 },
    /// Life indicators should be updated, leftmost lost first.
    LivesChanged { lives: u8 },
    /// The swipe trail should fade out.
    TrailFadeRequested,
    /// The run ended; show the game-over / play-again prompt.
    GameEnded { by_bomb: bool },
    /// The final score qualifies; ask the player for a name.
    NameEntryRequested { score: u32 },
    /// Show the current leaderboard.
    HighScoresShown { entries: Vec<HighScoreEntry> },
}
