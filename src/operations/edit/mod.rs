mod merge_points;
mod rotate_profile;
mod set_segment_direction;
mod set_segment_length;

pub use merge_points::{FindMergeTarget, MergePoints, MERGE_THRESHOLD_PIXELS};
pub use rotate_profile::RotateProfile;
pub use set_segment_direction::SetSegmentDirection;
pub use set_segment_length::SetSegmentLength;
