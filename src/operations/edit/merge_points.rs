use std::collections::HashSet;

use tracing::debug;

use crate::error::{GraphError, Result};
use crate::profile::{PointId, ProfileGraph};

/// Distance in pixels under which a dragged point snaps onto another.
pub const MERGE_THRESHOLD_PIXELS: f64 = 15.0;

/// Merges `source` into `target`.
///
/// Segments touching `source` are re-attached to `target`. A segment that
/// would then start and end at `target` is dropped, as is any segment that
/// duplicates an existing connection. `source` is removed.
pub struct MergePoints {
    source: PointId,
    target: PointId,
}

impl MergePoints {
    /// Creates a new `MergePoints` operation.
    #[must_use]
    pub fn new(source: PointId, target: PointId) -> Self {
        Self { source, target }
    }

    /// Executes the merge in-place.
    ///
    /// # Errors
    ///
    /// Returns an error if either point is missing or both are the same.
    pub fn execute(&self, graph: &mut ProfileGraph) -> Result<()> {
        if self.source == self.target {
            return Err(GraphError::Degenerate("cannot merge a point into itself".into()).into());
        }
        graph.point(self.source)?;
        graph.point(self.target)?;

        let (source, target) = (self.source, self.target);
        let mut seen: HashSet<(PointId, PointId)> = HashSet::new();
        let before = graph.segment_count();
        graph.retain_segments(|_, seg| {
            if seg.start == source {
                seg.start = target;
            }
            if seg.end == source {
                seg.end = target;
            }
            if seg.start == seg.end {
                return false;
            }
            let key = if seg.start < seg.end {
                (seg.start, seg.end)
            } else {
                (seg.end, seg.start)
            };
            seen.insert(key)
        });
        graph.remove_point(source)?;

        debug!(
            dropped = before - graph.segment_count(),
            "merged point into neighbour"
        );
        Ok(())
    }
}

/// Finds the nearest other point within a snapping distance.
pub struct FindMergeTarget {
    point: PointId,
    threshold: f64,
}

impl FindMergeTarget {
    /// Creates a query with the default [`MERGE_THRESHOLD_PIXELS`].
    #[must_use]
    pub fn new(point: PointId) -> Self {
        Self {
            point,
            threshold: MERGE_THRESHOLD_PIXELS,
        }
    }

    /// Overrides the snapping distance (pixels).
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Executes the query, returning the closest point strictly within the
    /// threshold.
    ///
    /// # Errors
    ///
    /// Returns an error if `point` is missing.
    pub fn execute(&self, graph: &ProfileGraph) -> Result<Option<PointId>> {
        let origin = graph.point(self.point)?.position;
        let nearest = graph
            .points()
            .filter(|(id, _)| *id != self.point)
            .map(|(id, p)| (id, (p.position - origin).norm()))
            .filter(|&(_, d)| d < self.threshold)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id);
        Ok(nearest)
    }
}
