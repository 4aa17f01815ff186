use super::point::PointId;

slotmap::new_key_type! {
    /// Unique identifier for a segment in a profile graph.
    pub struct SegmentId;
}

/// Data associated with a segment connecting two points.
///
/// Length and direction are not stored; they are always derived from the
/// current endpoint positions.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentData {
    /// Start point of the segment.
    pub start: PointId,
    /// End point of the segment.
    pub end: PointId,
    /// Display label (`A`, `B`, ...).
    pub label: Option<String>,
}

impl SegmentData {
    /// Creates an unlabeled segment.
    #[must_use]
    pub fn new(start: PointId, end: PointId) -> Self {
        Self {
            start,
            end,
            label: None,
        }
    }

    /// Returns `true` if either endpoint is `point`.
    #[must_use]
    pub fn touches(&self, point: PointId) -> bool {
        self.start == point || self.end == point
    }

    /// Returns the endpoint opposite to `at`, or `None` if `at` is not an endpoint.
    #[must_use]
    pub fn other_end(&self, at: PointId) -> Option<PointId> {
        if self.start == at {
            Some(self.end)
        } else if self.end == at {
            Some(self.start)
        } else {
            None
        }
    }
}

/// Spreadsheet-style label for the `index`-th segment: `A`..`Z`, `AA`, `AB`, ...
#[must_use]
pub fn segment_label(index: usize) -> String {
    let mut n = index + 1;
    let mut out = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        #[allow(clippy::cast_possible_truncation)]
        out.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_run_past_z() {
        assert_eq!(segment_label(0), "A");
        assert_eq!(segment_label(2), "C");
        assert_eq!(segment_label(25), "Z");
        assert_eq!(segment_label(26), "AA");
        assert_eq!(segment_label(27), "AB");
        assert_eq!(segment_label(52), "BA");
    }
}
