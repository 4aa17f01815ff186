use crate::error::{GraphError, Result};
use crate::math::TOLERANCE;
use crate::profile::{ProfileGraph, SegmentId};

/// Resizes a segment by moving its end point along the current direction.
pub struct SetSegmentLength {
    segment: SegmentId,
    length: f64,
}

impl SetSegmentLength {
    /// Creates a new `SetSegmentLength` operation.
    ///
    /// * `length` - New length in pixels.
    #[must_use]
    pub fn new(segment: SegmentId, length: f64) -> Self {
        Self { segment, length }
    }

    /// Executes the operation, modifying the profile in-place.
    ///
    /// # Errors
    ///
    /// Returns an error if the segment is missing, the new length is not
    /// positive, or the segment currently has zero length (no direction).
    pub fn execute(&self, graph: &mut ProfileGraph) -> Result<()> {
        if self.length <= 0.0 || !self.length.is_finite() {
            return Err(GraphError::Degenerate(format!("segment length {}", self.length)).into());
        }
        let (start, end) = graph.segment_endpoints(self.segment)?;
        let current = end - start;
        let norm = current.norm();
        if norm < TOLERANCE {
            return Err(GraphError::Degenerate("zero-length segment has no direction".into()).into());
        }
        let end_id = graph.segment(self.segment)?.end;
        graph.move_point(end_id, start + current * (self.length / norm))?;
        Ok(())
    }
}
