use crate::catalog::Material;
use crate::math::units::from_pixels;
use crate::math::Unit;
use crate::operations::bend::DetectBends;
use crate::operations::length::{BendContribution, DevelopedLength, DevelopedLengthReport};
use crate::profile::{segment_label, PointId, ProfileGraph, SegmentId};

/// Surface figures for a segment that ends in a bend.
///
/// The arcs come from the same bend dimensions the price path uses, so the
/// bend angle is the interior angle between the two segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentBendFigures {
    /// Segment length on the compression side.
    pub inner: f64,
    /// Segment length plus the neutral-axis arc.
    pub neutral: f64,
    /// Segment length plus the extra stretch of the outer surface.
    pub outer: f64,
}

/// One row of the segment table.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentRow {
    pub segment: SegmentId,
    pub label: String,
    pub length: f64,
    pub direction_degrees: f64,
    pub bend_at_end: Option<SegmentBendFigures>,
}

/// One row of the bend table.
#[derive(Debug, Clone, PartialEq)]
pub struct BendRow {
    pub vertex: PointId,
    pub vertex_label: Option<String>,
    pub angle_degrees: f64,
    pub allowance: f64,
}

/// Everything a production specification export needs, in one display unit.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductionSheet {
    pub unit: Unit,
    pub material: Option<String>,
    pub segments: Vec<SegmentRow>,
    pub bends: Vec<BendRow>,
    pub bend_count: usize,
    pub lengths: DevelopedLengthReport,
}

/// Collects segment lengths, bend angles and developed-length totals for a
/// profile.
pub struct BuildProductionSheet<'a> {
    unit: Unit,
    material: Option<&'a Material>,
}

impl<'a> BuildProductionSheet<'a> {
    /// Creates a new `BuildProductionSheet` query reporting in `unit`.
    #[must_use]
    pub fn new(unit: Unit) -> Self {
        Self {
            unit,
            material: None,
        }
    }

    /// Sets the material used for bend figures and the description line.
    #[must_use]
    pub fn with_material(mut self, material: Option<&'a Material>) -> Self {
        self.material = material;
        self
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self, graph: &ProfileGraph) -> ProductionSheet {
        let detected = DetectBends::new().execute(graph);
        let lengths = DevelopedLength::new(self.unit)
            .with_material(self.material)
            .execute(graph, &detected);

        let segments = graph
            .segments()
            .enumerate()
            .filter_map(|(index, (id, seg))| {
                let length = from_pixels(graph.segment_length(id).ok()?, self.unit);
                let bend_at_end = lengths
                    .bends
                    .iter()
                    .find(|c| c.bend.vertex == seg.end && touches(c, id))
                    .map(|c| SegmentBendFigures {
                        inner: length,
                        neutral: length + c.dimensions.neutral_axis_length,
                        outer: length + c.dimensions.outer_length - c.dimensions.inner_length,
                    });
                Some(SegmentRow {
                    segment: id,
                    label: seg.label.clone().unwrap_or_else(|| segment_label(index)),
                    length,
                    direction_degrees: graph.segment_direction(id).ok()?,
                    bend_at_end,
                })
            })
            .collect();

        let bends = detected
            .iter()
            .map(|bend| BendRow {
                vertex: bend.vertex,
                vertex_label: graph.point(bend.vertex).ok().and_then(|p| p.label.clone()),
                angle_degrees: bend.angle_degrees,
                allowance: lengths
                    .bends
                    .iter()
                    .find(|c| c.bend.vertex == bend.vertex)
                    .map_or(0.0, |c| c.dimensions.bend_allowance),
            })
            .collect();

        ProductionSheet {
            unit: self.unit,
            material: self.material.map(Material::description),
            segments,
            bends,
            bend_count: detected.len(),
            lengths,
        }
    }
}

fn touches(contribution: &BendContribution, segment: SegmentId) -> bool {
    contribution.bend.segment_a == segment || contribution.bend.segment_b == segment
}
