//! In-flight spawned objects
//!
//! The simulation owns every launched object exclusively: objects exist in
//! the active set from spawn until they are sliced or fall off-screen, and
//! never after. Integration is plain Euler under a constant downward pull,
//! pre-scaled by the game's speed multiplier.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{GRAVITY, OFF_SCREEN_Y};

/// What a spawned object is, and what slicing it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectKind {
    /// Worth one point when sliced; costs a life if it falls untouched.
    Regular,
    /// Ends the game when sliced; falls off harmlessly when ignored.
    Bomb,
}

/// A launched object tracked by the simulation.
///
/// A bomb renders as two parts (body and fuse) but is one hit-testable unit
/// with a single life-affecting outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnedObject {
    pub id: u32,
    pub kind: ObjectKind,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Spin rate (radians/s), cosmetic but tracked for the presenter
    pub angular_vel: f32,
    pub rotation: f32,
    /// Latched on first hit so one stroke can never count an object twice
    pub sliced: bool,
    /// Simulation tick the object was launched on
    pub spawned_at: u64,
}

/// Owns and advances the active object set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObjectSimulation {
    objects: Vec<SpawnedObject>,
    next_id: u32,
}

impl ObjectSimulation {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            next_id: 1,
        }
    }

    /// Add a new object to the active set, returning its id.
    pub fn spawn(
        &mut self,
        kind: ObjectKind,
        pos: Vec2,
        vel: Vec2,
        angular_vel: f32,
        tick: u64,
    ) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.objects.push(SpawnedObject {
            id,
            kind,
            pos,
            vel,
            angular_vel,
            rotation: 0.0,
            sliced: false,
            spawned_at: tick,
        });
        log::debug!("spawned {kind:?} #{id} at {pos}");
        id
    }

    /// Advance every object by one step. `dt` is already scaled by the
    /// global speed multiplier.
    pub fn advance(&mut self, dt: f32) {
        for obj in &mut self.objects {
            obj.vel.y -= GRAVITY * dt;
            obj.pos += obj.vel * dt;
            obj.rotation += obj.angular_vel * dt;
        }
    }

    /// Remove every object that has fallen below the off-screen line,
    /// returning what was removed so the caller can apply outcomes
    /// (life loss for regulars, silence for bombs).
    pub fn sweep_off_screen(&mut self) -> Vec<(u32, ObjectKind)> {
        let mut removed = Vec::new();
        self.objects.retain(|obj| {
            if obj.pos.y < OFF_SCREEN_Y {
                removed.push((obj.id, obj.kind));
                false
            } else {
                true
            }
        });
        removed
    }

    /// Latch the sliced flag. Returns false if the object is unknown or was
    /// already sliced, so a single stroke cannot double-count it.
    pub fn mark_sliced(&mut self, id: u32) -> bool {
        match self.objects.iter_mut().find(|o| o.id == id) {
            Some(obj) if !obj.sliced => {
                obj.sliced = true;
                true
            }
            _ => false,
        }
    }

    /// Remove an object by id. Stale ids are a no-op (the object may have
    /// already fallen off-screen by the time a deferred outcome lands).
    pub fn remove(&mut self, id: u32) -> Option<SpawnedObject> {
        let idx = self.objects.iter().position(|o| o.id == id)?;
        Some(self.objects.remove(idx))
    }

    pub fn get(&self, id: u32) -> Option<&SpawnedObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    /// Read-only view of the active set.
    pub fn active(&self) -> &[SpawnedObject] {
        &self.objects
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Active bombs, for fuse-sound discipline.
    pub fn bomb_count(&self) -> usize {
        self.objects
            .iter()
            .filter(|o| o.kind == ObjectKind::Bomb)
            .count()
    }

    /// Drop everything (restart).
    pub fn clear(&mut self) {
        self.objects.clear();
    }
}
