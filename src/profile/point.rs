use crate::math::Point2;

slotmap::new_key_type! {
    /// Unique identifier for a point in a profile graph.
    pub struct PointId;
}

/// Data associated with a profile point.
#[derive(Debug, Clone, PartialEq)]
pub struct PointData {
    /// Canvas position in pixels.
    pub position: Point2,
    /// Optional user label.
    pub label: Option<String>,
}

impl PointData {
    /// Creates an unlabeled point at the given canvas position.
    #[must_use]
    pub fn new(position: Point2) -> Self {
        Self {
            position,
            label: None,
        }
    }

    /// Attaches a label to the point.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}
