use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{PointData, PointId, ProfileGraph, SegmentData};
use crate::math::Point2;

/// A stored point, keyed by an external string ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    pub id: String,
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// A stored segment. `length` and `angle` are written for readers of the
/// stored data and ignored on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentRecord {
    pub id: String,
    pub start_point_id: String,
    pub end_point_id: String,
    #[serde(default)]
    pub length: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Plain-data form of a profile as exchanged with persistence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    pub points: Vec<PointRecord>,
    pub segments: Vec<SegmentRecord>,
}

impl ProfileSnapshot {
    /// Parses a snapshot from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match the snapshot shape.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the snapshot to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl ProfileGraph {
    /// Builds a profile from stored data.
    ///
    /// Duplicate point IDs keep the first occurrence. Segments that reference
    /// unknown points or loop back onto their start are skipped.
    #[must_use]
    pub fn from_snapshot(snapshot: &ProfileSnapshot) -> Self {
        let mut graph = Self::new();
        let mut ids: HashMap<&str, PointId> = HashMap::with_capacity(snapshot.points.len());

        for record in &snapshot.points {
            if ids.contains_key(record.id.as_str()) {
                warn!(point = %record.id, "duplicate point id in snapshot, skipping");
                continue;
            }
            let data = PointData {
                position: Point2::new(record.x, record.y),
                label: record.label.clone(),
            };
            ids.insert(record.id.as_str(), graph.add_point(data));
        }

        for record in &snapshot.segments {
            let (Some(&start), Some(&end)) = (
                ids.get(record.start_point_id.as_str()),
                ids.get(record.end_point_id.as_str()),
            ) else {
                warn!(segment = %record.id, "segment references a missing point, skipping");
                continue;
            };
            let data = SegmentData {
                start,
                end,
                label: record.label.clone(),
            };
            if let Err(err) = graph.add_segment(data) {
                warn!(segment = %record.id, %err, "invalid segment in snapshot, skipping");
            }
        }

        graph
    }

    /// Exports the profile with freshly numbered string IDs and derived
    /// segment lengths (pixels) and directions (degrees).
    #[must_use]
    pub fn to_snapshot(&self) -> ProfileSnapshot {
        let mut names: HashMap<PointId, String> = HashMap::with_capacity(self.point_count());
        let points = self
            .points()
            .enumerate()
            .map(|(i, (id, data))| {
                let name = format!("point-{i}");
                names.insert(id, name.clone());
                PointRecord {
                    id: name,
                    x: data.position.x,
                    y: data.position.y,
                    label: data.label.clone(),
                }
            })
            .collect();

        let segments = self
            .segments()
            .enumerate()
            .filter_map(|(i, (id, seg))| {
                Some(SegmentRecord {
                    id: format!("segment-{i}"),
                    start_point_id: names.get(&seg.start)?.clone(),
                    end_point_id: names.get(&seg.end)?.clone(),
                    length: self.segment_length(id).ok()?,
                    angle: self.segment_direction(id).ok(),
                    label: seg.label.clone(),
                })
            })
            .collect();

        ProfileSnapshot { points, segments }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const STORED: &str = r#"{
        "points": [
            {"id": "p1", "x": 0, "y": 0},
            {"id": "p2", "x": 30, "y": 40, "label": "corner"},
            {"id": "p3", "x": 30, "y": 100}
        ],
        "segments": [
            {"id": "s1", "startPointId": "p1", "endPointId": "p2", "length": 50, "label": "A"},
            {"id": "s2", "startPointId": "p2", "endPointId": "p3", "length": 999},
            {"id": "s3", "startPointId": "p3", "endPointId": "ghost", "length": 1},
            {"id": "s4", "startPointId": "p1", "endPointId": "p1", "length": 0}
        ]
    }"#;

    #[test]
    fn load_skips_dangling_and_self_loops() {
        let snapshot = ProfileSnapshot::from_json(STORED).unwrap();
        let graph = ProfileGraph::from_snapshot(&snapshot);
        assert_eq!(graph.point_count(), 3);
        assert_eq!(graph.segment_count(), 2);
    }

    #[test]
    fn stored_length_is_ignored() {
        let snapshot = ProfileSnapshot::from_json(STORED).unwrap();
        let graph = ProfileGraph::from_snapshot(&snapshot);
        let total: f64 = graph
            .segments()
            .map(|(id, _)| graph.segment_length(id).unwrap())
            .sum();
        assert_relative_eq!(total, 50.0 + 60.0);
    }

    #[test]
    fn duplicate_point_ids_keep_first() {
        let snapshot = ProfileSnapshot {
            points: vec![
                PointRecord { id: "a".into(), x: 1.0, y: 2.0, label: None },
                PointRecord { id: "a".into(), x: 9.0, y: 9.0, label: None },
            ],
            segments: vec![],
        };
        let graph = ProfileGraph::from_snapshot(&snapshot);
        assert_eq!(graph.point_count(), 1);
        let (_, p) = graph.points().next().unwrap();
        assert_relative_eq!(p.position.x, 1.0);
    }

    #[test]
    fn export_writes_derived_fields() {
        let snapshot = ProfileSnapshot::from_json(STORED).unwrap();
        let exported = ProfileGraph::from_snapshot(&snapshot).to_snapshot();
        assert_eq!(exported.points.len(), 3);
        assert_eq!(exported.segments.len(), 2);

        let labelled = exported
            .segments
            .iter()
            .find(|s| s.label.as_deref() == Some("A"))
            .unwrap();
        assert_relative_eq!(labelled.length, 50.0);

        let json = exported.to_json().unwrap();
        assert!(json.contains("startPointId"));
        let reloaded = ProfileGraph::from_snapshot(&ProfileSnapshot::from_json(&json).unwrap());
        assert_eq!(reloaded.segment_count(), 2);
    }
}
