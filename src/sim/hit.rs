//! Swipe-vs-object hit testing
//!
//! Each tick, every segment of the live swipe polyline is tested against the
//! circular hit region of every active object. An object appears in the
//! result at most once no matter how many segments cross it.

use glam::Vec2;

use super::object::SpawnedObject;

/// True when the line segment `a`→`b` passes within `radius` of `center`.
pub fn segment_hits_circle(a: Vec2, b: Vec2, center: Vec2, radius: f32) -> bool {
    let seg = b - a;
    let to_center = center - a;
    let len_sq = seg.length_squared();

    if len_sq < 0.0001 {
        // Degenerate segment: treat as a point
        return to_center.length() <= radius;
    }

    // Closest point on the segment to the circle center
    let t = (to_center.dot(seg) / len_sq).clamp(0.0, 1.0);
    let closest = a + seg * t;
    (center - closest).length() <= radius
}

/// Test every polyline segment against every object, returning the ids of
/// objects crossed by the swipe. Already-sliced objects are skipped and each
/// id appears once; ordering carries no meaning.
pub fn sweep_polyline(
    segments: &[(Vec2, Vec2)],
    objects: &[SpawnedObject],
    radius: f32,
) -> Vec<u32> {
    let mut hits = Vec::new();
    for &(a, b) in segments {
        for obj in objects {
            if obj.sliced || hits.contains(&obj.id) {
                continue;
            }
            if segment_hits_circle(a, b, obj.pos, radius) {
                hits.push(obj.id);
            }
        }
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::HIT_RADIUS;
    use crate::sim::object::{ObjectKind, ObjectSimulation};

    fn v(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    #[test]
    fn segment_through_circle_hits() {
        assert!(segment_hits_circle(
            v(-100.0, 0.0),
            v(100.0, 0.0),
            v(0.0, 10.0),
            20.0
        ));
    }

    #[test]
    fn segment_far_from_circle_misses() {
        assert!(!segment_hits_circle(
            v(-100.0, 0.0),
            v(100.0, 0.0),
            v(0.0, 50.0),
            20.0
        ));
    }

    #[test]
    fn endpoint_clamping_prevents_infinite_line_hits() {
        // The infinite line through a-b passes the circle, the segment does not
        assert!(!segment_hits_circle(
            v(0.0, 0.0),
            v(10.0, 0.0),
            v(100.0, 0.0),
            20.0
        ));
        // But touching from an endpoint counts
        assert!(segment_hits_circle(
            v(0.0, 0.0),
            v(10.0, 0.0),
            v(25.0, 0.0),
            20.0
        ));
    }

    #[test]
    fn degenerate_segment_acts_as_point() {
        assert!(segment_hits_circle(v(5.0, 5.0), v(5.0, 5.0), v(5.0, 8.0), 4.0));
        assert!(!segment_hits_circle(v(5.0, 5.0), v(5.0, 5.0), v(5.0, 20.0), 4.0));
    }

    #[test]
    fn object_crossed_by_two_segments_reported_once() {
        let mut sim = ObjectSimulation::new();
        let id = sim.spawn(ObjectKind::Regular, v(50.0, 50.0), Vec2::ZERO, 0.0, 0);

        // A "V" whose both strokes pass through the object
        let segments = vec![
            (v(0.0, 100.0), v(50.0, 40.0)),
            (v(50.0, 40.0), v(100.0, 100.0)),
        ];
        let hits = sweep_polyline(&segments, sim.active(), HIT_RADIUS);
        assert_eq!(hits, vec![id]);
    }

    #[test]
    fn sliced_objects_are_skipped() {
        let mut sim = ObjectSimulation::new();
        let id = sim.spawn(ObjectKind::Regular, v(50.0, 50.0), Vec2::ZERO, 0.0, 0);
        sim.mark_sliced(id);

        let segments = vec![(v(0.0, 50.0), v(100.0, 50.0))];
        assert!(sweep_polyline(&segments, sim.active(), HIT_RADIUS).is_empty());
    }

    #[test]
    fn multiple_objects_all_reported() {
        let mut sim = ObjectSimulation::new();
        let a = sim.spawn(ObjectKind::Regular, v(100.0, 0.0), Vec2::ZERO, 0.0, 0);
        let b = sim.spawn(ObjectKind::Bomb, v(300.0, 0.0), Vec2::ZERO, 0.0, 0);
        let far = sim.spawn(ObjectKind::Regular, v(300.0, 500.0), Vec2::ZERO, 0.0, 0);

        let segments = vec![(v(0.0, 0.0), v(400.0, 0.0))];
        let hits = sweep_polyline(&segments, sim.active(), HIT_RADIUS);
        assert!(hits.contains(&a));
        assert!(hits.contains(&b));
        assert!(!hits.contains(&far));
    }
}
