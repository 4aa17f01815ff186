use nalgebra::Rotation2;

use crate::error::Result;
use crate::profile::ProfileGraph;

/// Rotates every point of a profile around the centroid of its points.
pub struct RotateProfile {
    degrees: f64,
}

impl RotateProfile {
    /// Creates a new `RotateProfile` operation (counter-clockwise in a
    /// y-up frame).
    #[must_use]
    pub fn new(degrees: f64) -> Self {
        Self { degrees }
    }

    /// Executes the rotation in-place. An empty profile is left untouched.
    ///
    /// # Errors
    ///
    /// Currently infallible; returns `Result` for symmetry with other edits.
    pub fn execute(&self, graph: &mut ProfileGraph) -> Result<()> {
        let Some(center) = graph.centroid() else {
            return Ok(());
        };
        let rotation = Rotation2::new(self.degrees.to_radians());
        for (_, point) in graph.points_mut() {
            point.position = center + rotation * (point.position - center);
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use crate::operations::bend::DetectBends;
    use approx::assert_relative_eq;

    #[test]
    fn quarter_turn_about_centroid() {
        let mut graph = ProfileGraph::new();
        let (a, _) = graph.append_point(Point2::new(0.0, 0.0)).unwrap();
        let (b, seg) = graph.append_point(Point2::new(10.0, 0.0)).unwrap();

        RotateProfile::new(90.0).execute(&mut graph).unwrap();
        let pa = graph.point(a).unwrap().position;
        let pb = graph.point(b).unwrap().position;
        assert_relative_eq!(pa.x, 5.0, epsilon = 1e-9);
        assert_relative_eq!(pa.y, -5.0, epsilon = 1e-9);
        assert_relative_eq!(pb.x, 5.0, epsilon = 1e-9);
        assert_relative_eq!(pb.y, 5.0, epsilon = 1e-9);
        assert_relative_eq!(graph.segment_length(seg.unwrap()).unwrap(), 10.0, epsilon = 1e-9);
    }

    #[test]
    fn bend_angles_survive_rotation() {
        let mut graph = ProfileGraph::new();
        for (x, y) in [(0.0, 0.0), (40.0, 0.0), (40.0, 40.0), (80.0, 80.0)] {
            graph.append_point(Point2::new(x, y)).unwrap();
        }
        let angles = |g: &ProfileGraph| {
            let mut a: Vec<f64> = DetectBends::new().execute(g).iter().map(|b| b.angle_degrees).collect();
            a.sort_by(f64::total_cmp);
            a
        };
        let before = angles(&graph);
        RotateProfile::new(33.0).execute(&mut graph).unwrap();
        let after = angles(&graph);
        assert_eq!(before.len(), after.len());
        for (x, y) in before.iter().zip(&after) {
            assert_relative_eq!(*x, *y, epsilon = 1e-9);
        }
    }

    #[test]
    fn empty_profile_is_noop() {
        let mut graph = ProfileGraph::new();
        assert!(RotateProfile::new(45.0).execute(&mut graph).is_ok());
    }
}
