//! Game lifecycle and per-tick orchestration
//!
//! Single-threaded cooperative model: the host calls `tick` at its frame
//! cadence and feeds stroke events as they arrive. Deferred work (the next
//! scheduled wave, chain sub-spawns, the post-game-over score prompt) lives
//! in owned timer slots on `Game`, so ending the game cancels all of it at
//! once and nothing can spawn into a finished run.

use glam::Vec2;

use crate::consts::*;
use crate::events::{GameEvent, SoundEffect};
use crate::highscores::{HighScores, ScoreStore};
use crate::rng::SpawnRng;
use crate::swipe::SwipeTracker;

use super::hit;
use super::object::{ObjectKind, ObjectSimulation};
use super::sequencer::{ForceBomb, Pacing, SequencePlan};

/// Overall lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Constructed, not yet started
    Ready,
    /// Run in progress
    Playing,
    /// Run over; waiting for name entry / restart
    Ended,
}

/// A chain sub-spawn scheduled for a later moment on the game clock.
#[derive(Debug, Clone, Copy)]
struct PendingSpawn {
    due: f32,
    force: ForceBomb,
}

/// The whole game: state machine, object simulation, sequencer, swipe
/// tracking, and the event outbox for the host.
#[derive(Debug)]
pub struct Game {
    phase: GamePhase,
    score: u32,
    lives: u8,
    /// Seconds since the run started
    clock: f32,
    tick_count: u64,
    pacing: Pacing,
    plan: SequencePlan,
    rng: SpawnRng,
    sim: ObjectSimulation,
    swipe: SwipeTracker,
    scores: HighScores,
    /// Deferred chain sub-spawns, cleared when the run ends
    pending_spawns: Vec<PendingSpawn>,
    /// When the next wave fires; None means no wave is queued
    next_wave_at: Option<f32>,
    /// When to surface the high-score prompt after game over
    name_prompt_at: Option<f32>,
    swoosh_active: bool,
    events: Vec<GameEvent>,
}

impl Game {
    /// Create a game in the Ready phase. `scores` is the leaderboard loaded
    /// from the persistence collaborator.
    pub fn new(seed: u64, scores: HighScores) -> Self {
        let mut rng = SpawnRng::new(seed);
        let plan = SequencePlan::build(&mut rng);
        Self {
            phase: GamePhase::Ready,
            score: 0,
            lives: STARTING_LIVES,
            clock: 0.0,
            tick_count: 0,
            pacing: Pacing::default(),
            plan,
            rng,
            sim: ObjectSimulation::new(),
            swipe: SwipeTracker::new(),
            scores,
            pending_spawns: Vec::new(),
            next_wave_at: None,
            name_prompt_at: None,
            swoosh_active: false,
            events: Vec::new(),
        }
    }

    /// Begin the run: zero the score, restore lives, schedule the first wave.
    pub fn start(&mut self) {
        match self.phase {
            GamePhase::Playing => {
                log::warn!("start() while already playing, ignored");
            }
            // Starting over after a finished run is a restart
            GamePhase::Ended => self.restart(),
            GamePhase::Ready => {
                log::info!("run starting (seed {})", self.rng.seed());
                self.begin_run();
            }
        }
    }

    /// Play again: clear residual objects and overlays, rebuild the wave
    /// plan, reset pacing, and re-enter Playing. Persisted scores are
    /// untouched.
    pub fn restart(&mut self) {
        if self.sim.bomb_count() > 0 {
            self.events.push(GameEvent::FuseStopped);
        }
        if !self.sim.is_empty() {
            self.sim.clear();
            self.events.push(GameEvent::ObjectsCleared);
        }
        self.plan = SequencePlan::build(&mut self.rng);
        log::info!("run restarting");
        self.begin_run();
    }

    fn begin_run(&mut self) {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.clock = 0.0;
        self.tick_count = 0;
        self.pacing = Pacing::default();
        self.swipe = SwipeTracker::new();
        self.pending_spawns.clear();
        self.next_wave_at = Some(FIRST_WAVE_DELAY);
        self.name_prompt_at = None;
        self.swoosh_active = false;
        self.events.push(GameEvent::ScoreChanged { score: 0 });
        self.events.push(GameEvent::LivesChanged {
            lives: STARTING_LIVES,
        });
    }

    /// Advance the game by one frame.
    pub fn tick(&mut self, dt: f32) {
        match self.phase {
            GamePhase::Ready => return,
            GamePhase::Ended => {
                self.clock += dt;
                self.maybe_prompt_scores();
                return;
            }
            GamePhase::Playing => {}
        }

        self.clock += dt;
        self.tick_count += 1;

        // Chain sub-spawns that have come due
        let mut due = Vec::new();
        let clock = self.clock;
        self.pending_spawns.retain(|p| {
            if p.due <= clock {
                due.push(p.force);
                false
            } else {
                true
            }
        });
        for force in due {
            self.launch_object(force);
        }

        // Queued wave
        if self.next_wave_at.is_some_and(|at| self.clock >= at) {
            self.next_wave_at = None;
            self.toss_next_wave();
        }

        // Physics under the global speed multiplier
        self.sim.advance(dt * self.pacing.speed);

        // Off-screen outcomes: a regular object slipping past costs a life,
        // a bomb falls away silently.
        let bombs_before = self.sim.bomb_count();
        for (id, kind) in self.sim.sweep_off_screen() {
            self.events.push(GameEvent::ObjectMissed { id });
            if kind == ObjectKind::Regular {
                self.subtract_life();
            }
        }
        if self.phase == GamePhase::Ended {
            return;
        }
        if bombs_before > 0 && self.sim.bomb_count() == 0 {
            self.events.push(GameEvent::FuseStopped);
        }

        // Swipe hit-testing
        if self.swipe.has_segments() {
            let segments: Vec<(Vec2, Vec2)> = self.swipe.segments().collect();
            let hits = hit::sweep_polyline(&segments, self.sim.active(), HIT_RADIUS);
            for id in hits {
                if self.phase == GamePhase::Ended {
                    break;
                }
                self.resolve_hit(id);
            }
        }
        if self.phase == GamePhase::Ended {
            return;
        }

        // Wave scheduling: only when the field is clear, nothing is queued,
        // and no chain is still unwinding.
        if self.sim.is_empty() && self.pending_spawns.is_empty() && self.next_wave_at.is_none() {
            if self.plan.exhausted() {
                log::info!("wave plan exhausted");
                self.end_game(false);
            } else {
                self.next_wave_at = Some(self.clock + self.pacing.popup_time);
            }
        }
    }

    /// Launch the wave at the plan cursor and tighten the pacing.
    fn toss_next_wave(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.pacing.decay();
        let Some(kind) = self.plan.next() else {
            return;
        };
        log::debug!(
            "wave {}/{}: {:?} (popup {:.3}s speed {:.2}x)",
            self.plan.cursor(),
            self.plan.len(),
            kind,
            self.pacing.popup_time,
            self.pacing.speed
        );
        for &force in kind.launches() {
            self.launch_object(force);
        }
        if let Some(divisor) = kind.chain_divisor() {
            for i in 1..=CHAIN_FOLLOWERS {
                self.pending_spawns.push(PendingSpawn {
                    due: self.clock + self.pacing.chain_delay / divisor * i as f32,
                    force: ForceBomb::Random,
                });
            }
        }
    }

    /// Roll and launch a single object from below the field.
    fn launch_object(&mut self, force: ForceBomb) {
        if self.phase != GamePhase::Playing {
            return;
        }
        let kind = match force {
            ForceBomb::Never => ObjectKind::Regular,
            ForceBomb::Always => ObjectKind::Bomb,
            ForceBomb::Random => {
                if self.rng.int_in(0, 6) == 0 {
                    ObjectKind::Bomb
                } else {
                    ObjectKind::Regular
                }
            }
        };

        let x = self.rng.int_in(SPAWN_X_MIN, SPAWN_X_MAX) as f32;
        let pos = Vec2::new(x, SPAWN_Y);
        let angular_vel = self.rng.int_in(-6, 6) as f32 / 2.0;

        // Horizontal speed pushes edge spawns hard toward the centre and
        // centre spawns gently outward-crossing
        let x_speed = if x < 256.0 {
            self.rng.int_in(8, 15)
        } else if x < 512.0 {
            self.rng.int_in(3, 5)
        } else if x < 768.0 {
            -self.rng.int_in(3, 5)
        } else {
            -self.rng.int_in(8, 15)
        };
        let y_speed = self.rng.int_in(24, 32);
        let vel = Vec2::new(x_speed as f32, y_speed as f32) * VELOCITY_SCALE;

        let id = self.sim.spawn(kind, pos, vel, angular_vel, self.tick_count);
        self.events.push(GameEvent::ObjectSpawned { id, kind, pos });
        match kind {
            ObjectKind::Regular => self.events.push(GameEvent::Sound(SoundEffect::Launch)),
            // Fuse replaces any fuse already playing: one at a time
            ObjectKind::Bomb => self.events.push(GameEvent::FuseStarted { id }),
        }
    }

    /// Apply a swipe hit to one object.
    fn resolve_hit(&mut self, id: u32) {
        if !self.sim.mark_sliced(id) {
            return;
        }
        let Some(obj) = self.sim.remove(id) else {
            return;
        };
        self.events.push(GameEvent::ObjectSliced {
            id,
            kind: obj.kind,
            pos: obj.pos,
        });
        match obj.kind {
            ObjectKind::Regular => {
                self.score += 1;
                self.events.push(GameEvent::Sound(SoundEffect::Whack));
                self.events
                    .push(GameEvent::ScoreChanged { score: self.score });
            }
            ObjectKind::Bomb => {
                self.events.push(GameEvent::Sound(SoundEffect::Explosion));
                self.end_game(true);
            }
        }
    }

    fn subtract_life(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.lives = self.lives.saturating_sub(1);
        log::info!("life lost, {} remaining", self.lives);
        self.events.push(GameEvent::Sound(SoundEffect::Wrong));
        self.events.push(GameEvent::LivesChanged { lives: self.lives });
        if self.lives == 0 {
            self.end_game(false);
        }
    }

    /// End the run. Idempotent; `by_bomb` marks the bomb failure mode where
    /// every life indicator is shown lost regardless of the count.
    fn end_game(&mut self, by_bomb: bool) {
        if self.phase == GamePhase::Ended {
            return;
        }
        self.phase = GamePhase::Ended;
        self.pacing.halt();
        self.pending_spawns.clear();
        self.next_wave_at = None;
        self.events.push(GameEvent::FuseStopped);
        if by_bomb {
            self.lives = 0;
            self.events.push(GameEvent::LivesChanged { lives: 0 });
        }
        self.events.push(GameEvent::Sound(SoundEffect::GameOver));
        self.events.push(GameEvent::GameEnded { by_bomb });
        self.name_prompt_at = Some(self.clock + NAME_PROMPT_DELAY);
        log::info!(
            "game over (by_bomb={by_bomb}) score {} after {} waves",
            self.score,
            self.plan.cursor()
        );
    }

    fn maybe_prompt_scores(&mut self) {
        let Some(at) = self.name_prompt_at else {
            return;
        };
        if self.clock < at {
            return;
        }
        self.name_prompt_at = None;
        if self.scores.qualifies(self.score) {
            self.events
                .push(GameEvent::NameEntryRequested { score: self.score });
        } else {
            self.events.push(GameEvent::HighScoresShown {
                entries: self.scores.entries.clone(),
            });
        }
    }

    /// Record the entered name against the final score and persist the
    /// leaderboard through the store.
    pub fn submit_name(&mut self, name: &str, store: &mut dyn ScoreStore) {
        if self.phase != GamePhase::Ended {
            log::warn!("submit_name outside game over, ignored");
            return;
        }
        if let Some(rank) = self.scores.add_score(name, self.score) {
            log::info!("high score rank {rank}: {name} with {}", self.score);
            self.scores.save(store);
        }
        self.events.push(GameEvent::HighScoresShown {
            entries: self.scores.entries.clone(),
        });
    }

    // === Stroke input (from the input collaborator) ===

    pub fn stroke_began(&mut self, pos: Vec2) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.swipe.begin_stroke(pos, self.clock);
    }

    pub fn stroke_moved(&mut self, pos: Vec2) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.swipe.extend_stroke(pos, self.clock);
        if self.swipe.stroke_active() && !self.swoosh_active {
            self.swoosh_active = true;
            let sound = match self.rng.roll(3) {
                0 => SoundEffect::Swoosh1,
                1 => SoundEffect::Swoosh2,
                _ => SoundEffect::Swoosh3,
            };
            self.events.push(GameEvent::Sound(sound));
        }
    }

    pub fn stroke_ended(&mut self) {
        self.swipe.end_stroke();
        self.events.push(GameEvent::TrailFadeRequested);
    }

    pub fn stroke_cancelled(&mut self) {
        self.stroke_ended();
    }

    /// Completion callback from the audio collaborator: the swoosh finished,
    /// the next stroke movement may trigger another.
    pub fn swoosh_finished(&mut self) {
        self.swoosh_active = false;
    }

    // === Read access for the host ===

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn pacing(&self) -> &Pacing {
        &self.pacing
    }

    pub fn simulation(&self) -> &ObjectSimulation {
        &self.sim
    }

    pub fn swipe(&self) -> &SwipeTracker {
        &self.swipe
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.scores
    }

    /// Take all events accumulated since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
