pub mod point;
pub mod segment;
pub mod snapshot;

pub use point::{PointData, PointId};
pub use segment::{segment_label, SegmentData, SegmentId};
pub use snapshot::{PointRecord, ProfileSnapshot, SegmentRecord};

use slotmap::{SecondaryMap, SlotMap};

use crate::error::GraphError;
use crate::math::vector_2d::direction_degrees;
use crate::math::Point2;

/// Arena that owns the points and segments of a flashing profile.
///
/// Segments reference points by [`PointId`]. Removing a point removes every
/// segment touching it, so a segment never refers to a missing point.
#[derive(Debug, Clone, Default)]
pub struct ProfileGraph {
    points: SlotMap<PointId, PointData>,
    segments: SlotMap<SegmentId, SegmentData>,
    /// Point IDs in insertion order; the tail is the chain end for appends.
    insertion_order: Vec<PointId>,
}

impl ProfileGraph {
    /// Creates a new, empty profile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the profile has at least one point and one segment.
    #[must_use]
    pub fn has_geometry(&self) -> bool {
        !self.points.is_empty() && !self.segments.is_empty()
    }

    /// Number of points.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Number of segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Iterates over all points.
    pub fn points(&self) -> impl Iterator<Item = (PointId, &PointData)> {
        self.points.iter()
    }

    /// Iterates over all segments.
    pub fn segments(&self) -> impl Iterator<Item = (SegmentId, &SegmentData)> {
        self.segments.iter()
    }

    // --- Point operations ---

    /// Inserts a point and returns its ID.
    pub fn add_point(&mut self, data: PointData) -> PointId {
        let id = self.points.insert(data);
        self.insertion_order.push(id);
        id
    }

    /// Inserts a point and connects it to the most recently added point that
    /// is still in the profile, if any.
    ///
    /// Returns the new point and the connecting segment.
    ///
    /// # Errors
    ///
    /// Returns an error if the new point coincides with the previous point's ID
    /// (never happens for freshly inserted points).
    pub fn append_point(
        &mut self,
        position: Point2,
    ) -> Result<(PointId, Option<SegmentId>), GraphError> {
        let previous = self.insertion_order.last().copied();
        let id = self.add_point(PointData::new(position));
        let segment = match previous {
            Some(prev) => Some(self.connect(prev, id)?),
            None => None,
        };
        Ok((id, segment))
    }

    /// Returns a reference to the point data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the point is not in the profile.
    pub fn point(&self, id: PointId) -> Result<&PointData, GraphError> {
        self.points
            .get(id)
            .ok_or(GraphError::EntityNotFound("point"))
    }

    /// Returns a mutable reference to the point data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the point is not in the profile.
    pub fn point_mut(&mut self, id: PointId) -> Result<&mut PointData, GraphError> {
        self.points
            .get_mut(id)
            .ok_or(GraphError::EntityNotFound("point"))
    }

    /// Moves a point to a new canvas position.
    ///
    /// # Errors
    ///
    /// Returns an error if the point is not in the profile.
    pub fn move_point(&mut self, id: PointId, position: Point2) -> Result<(), GraphError> {
        self.point_mut(id)?.position = position;
        Ok(())
    }

    /// Removes a point together with every segment touching it.
    ///
    /// # Errors
    ///
    /// Returns an error if the point is not in the profile.
    pub fn remove_point(&mut self, id: PointId) -> Result<PointData, GraphError> {
        let data = self
            .points
            .remove(id)
            .ok_or(GraphError::EntityNotFound("point"))?;
        self.segments.retain(|_, seg| !seg.touches(id));
        self.insertion_order.retain(|&p| p != id);
        Ok(data)
    }

    // --- Segment operations ---

    /// Connects two existing points with a new segment labelled after the
    /// current segment count.
    ///
    /// # Errors
    ///
    /// Returns an error if either point is missing or `start == end`.
    pub fn connect(&mut self, start: PointId, end: PointId) -> Result<SegmentId, GraphError> {
        let label = segment_label(self.segments.len());
        let mut data = SegmentData::new(start, end);
        data.label = Some(label);
        self.add_segment(data)
    }

    /// Inserts a segment after validating its endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error if either point is missing or `start == end`.
    pub fn add_segment(&mut self, data: SegmentData) -> Result<SegmentId, GraphError> {
        if data.start == data.end {
            return Err(GraphError::SelfLoop);
        }
        self.point(data.start)?;
        self.point(data.end)?;
        Ok(self.segments.insert(data))
    }

    /// Returns a reference to the segment data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the segment is not in the profile.
    pub fn segment(&self, id: SegmentId) -> Result<&SegmentData, GraphError> {
        self.segments
            .get(id)
            .ok_or(GraphError::EntityNotFound("segment"))
    }

    pub(crate) fn segment_mut(&mut self, id: SegmentId) -> Result<&mut SegmentData, GraphError> {
        self.segments
            .get_mut(id)
            .ok_or(GraphError::EntityNotFound("segment"))
    }

    pub(crate) fn retain_segments(&mut self, keep: impl FnMut(SegmentId, &mut SegmentData) -> bool) {
        self.segments.retain(keep);
    }

    /// Removes a segment; its endpoints stay in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the segment is not in the profile.
    pub fn remove_segment(&mut self, id: SegmentId) -> Result<SegmentData, GraphError> {
        self.segments
            .remove(id)
            .ok_or(GraphError::EntityNotFound("segment"))
    }

    /// Removes all points and segments.
    pub fn clear(&mut self) {
        self.points.clear();
        self.segments.clear();
        self.insertion_order.clear();
    }

    // --- Derived geometry ---

    /// Returns the start and end positions of a segment.
    ///
    /// # Errors
    ///
    /// Returns an error if the segment or either endpoint is missing.
    pub fn segment_endpoints(&self, id: SegmentId) -> Result<(Point2, Point2), GraphError> {
        let seg = self.segment(id)?;
        Ok((self.point(seg.start)?.position, self.point(seg.end)?.position))
    }

    /// Euclidean length of a segment in pixels, computed from its endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error if the segment or either endpoint is missing.
    pub fn segment_length(&self, id: SegmentId) -> Result<f64, GraphError> {
        let (a, b) = self.segment_endpoints(id)?;
        Ok((b - a).norm())
    }

    /// Direction of a segment (start → end) in degrees from the +X axis.
    ///
    /// # Errors
    ///
    /// Returns an error if the segment or either endpoint is missing.
    pub fn segment_direction(&self, id: SegmentId) -> Result<f64, GraphError> {
        let (a, b) = self.segment_endpoints(id)?;
        Ok(direction_degrees(&a, &b))
    }

    /// Segments incident to each point, in segment iteration order.
    #[must_use]
    pub fn adjacency(&self) -> SecondaryMap<PointId, Vec<SegmentId>> {
        let mut map: SecondaryMap<PointId, Vec<SegmentId>> = SecondaryMap::new();
        for (sid, seg) in &self.segments {
            for pid in [seg.start, seg.end] {
                if let Some(list) = map.entry(pid) {
                    list.or_default().push(sid);
                }
            }
        }
        map
    }

    /// Number of segments touching `point`.
    #[must_use]
    pub fn degree(&self, point: PointId) -> usize {
        self.segments.values().filter(|s| s.touches(point)).count()
    }

    /// Centroid of all point positions, or `None` for an empty profile.
    #[must_use]
    pub fn centroid(&self) -> Option<Point2> {
        if self.points.is_empty() {
            return None;
        }
        let sum = self
            .points
            .values()
            .fold(nalgebra::Vector2::zeros(), |acc, p| acc + p.position.coords);
        #[allow(clippy::cast_precision_loss)]
        let n = self.points.len() as f64;
        Some(Point2::from(sum / n))
    }

    pub(crate) fn points_mut(&mut self) -> impl Iterator<Item = (PointId, &mut PointData)> {
        self.points.iter_mut()
    }
}
