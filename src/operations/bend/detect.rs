use tracing::{debug, warn};

use crate::error::GraphError;
use crate::math::vector_2d::angle_between_degrees;
use crate::math::{Vector2, ANGLE_EPSILON_DEGREES};
use crate::profile::{PointId, ProfileGraph, SegmentId};

/// A bend at a profile vertex shared by exactly two segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bend {
    /// The shared vertex.
    pub vertex: PointId,
    /// Angle between the two segments at the vertex, in `(0, 180)` degrees.
    pub angle_degrees: f64,
    /// First segment meeting at the vertex.
    pub segment_a: SegmentId,
    /// Second segment meeting at the vertex.
    pub segment_b: SegmentId,
}

/// Finds every bend in a profile.
///
/// Only vertices with exactly two incident segments are considered; open
/// chain ends and branch points yield nothing. Vertices where a segment has
/// zero length are skipped, as are near-straight and fully folded angles
/// (within [`ANGLE_EPSILON_DEGREES`] of 0° or 180°).
#[derive(Debug, Default)]
pub struct DetectBends;

impl DetectBends {
    /// Creates a new `DetectBends` query.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Executes the query, returning bends in point iteration order.
    #[must_use]
    pub fn execute(&self, graph: &ProfileGraph) -> Vec<Bend> {
        let adjacency = graph.adjacency();
        let mut bends = Vec::new();

        for (vertex, incident) in &adjacency {
            let [segment_a, segment_b] = incident.as_slice() else {
                continue;
            };
            let (v1, v2) = match (
                arm_vector(graph, *segment_a, vertex),
                arm_vector(graph, *segment_b, vertex),
            ) {
                (Ok(v1), Ok(v2)) => (v1, v2),
                (Err(err), _) | (_, Err(err)) => {
                    warn!(?vertex, %err, "cannot resolve bend arms, skipping vertex");
                    continue;
                }
            };
            let Some(angle) = angle_between_degrees(&v1, &v2) else {
                continue;
            };
            if angle <= ANGLE_EPSILON_DEGREES || angle >= 180.0 - ANGLE_EPSILON_DEGREES {
                continue;
            }
            bends.push(Bend {
                vertex,
                angle_degrees: angle,
                segment_a: *segment_a,
                segment_b: *segment_b,
            });
        }

        debug!(bends = bends.len(), "detected bends");
        bends
    }
}

/// Vector from `vertex` to the far end of `segment`.
fn arm_vector(
    graph: &ProfileGraph,
    segment: SegmentId,
    vertex: PointId,
) -> Result<Vector2, GraphError> {
    let seg = graph.segment(segment)?;
    let other = seg
        .other_end(vertex)
        .ok_or(GraphError::EntityNotFound("segment endpoint"))?;
    Ok(graph.point(other)?.position - graph.point(vertex)?.position)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use crate::profile::PointData;
    use approx::assert_relative_eq;

    fn chain(coords: &[(f64, f64)]) -> (ProfileGraph, Vec<PointId>) {
        let mut graph = ProfileGraph::new();
        let ids = coords
            .iter()
            .map(|&(x, y)| graph.append_point(Point2::new(x, y)).unwrap().0)
            .collect();
        (graph, ids)
    }

    #[test]
    fn right_angle_bracket() {
        let (graph, ids) = chain(&[(0.0, 0.0), (100.0, 0.0), (100.0, 50.0)]);
        let bends = DetectBends::new().execute(&graph);
        assert_eq!(bends.len(), 1);
        assert_eq!(bends[0].vertex, ids[1]);
        assert_relative_eq!(bends[0].angle_degrees, 90.0, epsilon = 1e-9);
    }

    #[test]
    fn collinear_points_have_no_bend() {
        let (graph, _) = chain(&[(0.0, 0.0), (50.0, 0.0), (100.0, 0.0)]);
        assert!(DetectBends::new().execute(&graph).is_empty());
    }

    #[test]
    fn fully_folded_hem_excluded() {
        let (graph, _) = chain(&[(0.0, 0.0), (100.0, 0.0), (0.0, 0.0)]);
        assert!(DetectBends::new().execute(&graph).is_empty());
    }

    #[test]
    fn coincident_points_skipped() {
        let (graph, _) = chain(&[(0.0, 0.0), (10.0, 10.0), (10.0, 10.0)]);
        assert!(DetectBends::new().execute(&graph).is_empty());
    }

    #[test]
    fn chain_with_two_bends() {
        // Z-closure: 90° then 45°-interior corner.
        let (graph, _) = chain(&[(0.0, 0.0), (0.0, 40.0), (60.0, 40.0), (100.0, 80.0)]);
        let mut angles: Vec<f64> = DetectBends::new()
            .execute(&graph)
            .iter()
            .map(|b| b.angle_degrees)
            .collect();
        angles.sort_by(f64::total_cmp);
        assert_eq!(angles.len(), 2);
        assert_relative_eq!(angles[0], 90.0, epsilon = 1e-9);
        assert_relative_eq!(angles[1], 135.0, epsilon = 1e-9);
    }

    #[test]
    fn branch_point_ignored() {
        let mut graph = ProfileGraph::new();
        let hub = graph.add_point(PointData::new(Point2::new(0.0, 0.0)));
        for (x, y) in [(10.0, 0.0), (0.0, 10.0), (-10.0, 0.0)] {
            let leaf = graph.add_point(PointData::new(Point2::new(x, y)));
            graph.connect(hub, leaf).unwrap();
        }
        assert!(DetectBends::new().execute(&graph).is_empty());
    }

    #[test]
    fn closed_triangle_bends_at_every_corner() {
        let mut graph = ProfileGraph::new();
        let a = graph.add_point(PointData::new(Point2::new(0.0, 0.0)));
        let b = graph.add_point(PointData::new(Point2::new(10.0, 0.0)));
        let c = graph.add_point(PointData::new(Point2::new(0.0, 10.0)));
        graph.connect(a, b).unwrap();
        graph.connect(b, c).unwrap();
        graph.connect(c, a).unwrap();

        let bends = DetectBends::new().execute(&graph);
        let total: f64 = bends.iter().map(|b| b.angle_degrees).sum();
        assert_eq!(bends.len(), 3);
        assert_relative_eq!(total, 180.0, epsilon = 1e-9);
    }

    #[test]
    fn detection_is_repeatable() {
        let (graph, _) = chain(&[(0.0, 0.0), (30.0, 0.0), (30.0, 30.0), (60.0, 60.0)]);
        let first = DetectBends::new().execute(&graph);
        let second = DetectBends::new().execute(&graph);
        assert_eq!(first, second);
    }
}
