mod production_sheet;

pub use production_sheet::{
    BendRow, BuildProductionSheet, ProductionSheet, SegmentBendFigures, SegmentRow,
};
