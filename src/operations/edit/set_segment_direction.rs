use crate::error::Result;
use crate::math::vector_2d::unit_from_degrees;
use crate::profile::{ProfileGraph, SegmentId};

/// Points a segment in a new direction, keeping its start point and length.
pub struct SetSegmentDirection {
    segment: SegmentId,
    degrees: f64,
}

impl SetSegmentDirection {
    /// Creates a new `SetSegmentDirection` operation.
    ///
    /// * `degrees` - Direction measured from the +X axis.
    #[must_use]
    pub fn new(segment: SegmentId, degrees: f64) -> Self {
        Self { segment, degrees }
    }

    /// Executes the operation, moving the segment's end point.
    ///
    /// # Errors
    ///
    /// Returns an error if the segment or its endpoints are missing.
    pub fn execute(&self, graph: &mut ProfileGraph) -> Result<()> {
        let length = graph.segment_length(self.segment)?;
        let (start, _) = graph.segment_endpoints(self.segment)?;
        let end_id = graph.segment(self.segment)?.end;
        graph.move_point(end_id, start + unit_from_degrees(self.degrees) * length)?;
        Ok(())
    }
}
