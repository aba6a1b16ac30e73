//! Bounded swipe polyline tracking
//!
//! One stroke at a time: points accumulate on move, the oldest fall off past a
//! fixed cap, and the whole buffer resets when the next stroke begins. The
//! polyline outlives the stroke so the presenter can fade the trail, but
//! hit-testing only runs while the stroke is live.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::MAX_SWIPE_POINTS;

/// A timestamped point of the player's swipe, in scene coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwipePoint {
    pub pos: Vec2,
    /// Game-clock time the point was recorded (seconds)
    pub time: f32,
}

/// Tracks the most recent points of the active stroke.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SwipeTracker {
    points: Vec<SwipePoint>,
    stroke_active: bool,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self {
            points: Vec::with_capacity(MAX_SWIPE_POINTS),
            stroke_active: false,
        }
    }

    /// Start a new stroke: any previous trail is discarded.
    pub fn begin_stroke(&mut self, pos: Vec2, time: f32) {
        self.points.clear();
        self.points.push(SwipePoint { pos, time });
        self.stroke_active = true;
    }

    /// Append a point to the live stroke, dropping the oldest past the cap.
    /// Ignored when no stroke is active (late move events after end/cancel).
    pub fn extend_stroke(&mut self, pos: Vec2, time: f32) {
        if !self.stroke_active {
            return;
        }
        self.points.push(SwipePoint { pos, time });
        while self.points.len() > MAX_SWIPE_POINTS {
            self.points.remove(0);
        }
    }

    /// Finish the stroke. The polyline is retained for trail fade-out but no
    /// longer participates in hit-testing.
    pub fn end_stroke(&mut self) {
        self.stroke_active = false;
    }

    /// A cancelled stroke ends the same way a finished one does.
    pub fn cancel_stroke(&mut self) {
        self.end_stroke();
    }

    /// True while a stroke is being drawn.
    pub fn stroke_active(&self) -> bool {
        self.stroke_active
    }

    /// The current polyline, oldest point first. May be empty or single-point
    /// (in which case it has no segments).
    pub fn polyline(&self) -> &[SwipePoint] {
        &self.points
    }

    /// True when the live stroke has at least one segment to test.
    pub fn has_segments(&self) -> bool {
        self.stroke_active && self.points.len() >= 2
    }

    /// Consecutive point pairs of the live stroke. Empty when the stroke has
    /// ended or holds fewer than two points.
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let pts: &[SwipePoint] = if self.stroke_active { &self.points } else { &[] };
        pts.windows(2).map(|w| (w[0].pos, w[1].pos))
    }
}
